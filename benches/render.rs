use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3A;
use glint::{
    hittables::Hittable,
    ray::{Ray, SHADOW_ACNE_EPSILON},
    render::{RenderSettings, Renderer},
    scenes,
};
use rand::SeedableRng;

fn bench_hit(c: &mut Criterion) {
    let mut bench_group = c.benchmark_group("scene_hit");
    // filter noise more noise
    bench_group.noise_threshold(0.05);

    let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    let world = scenes::get_geometry(scenes::SceneType::CoverPhoto, &mut rng)
        .expect("cover photo scene builds");
    let ray = Ray::new(Vec3A::new(13.0, 2.0, 3.0), Vec3A::new(-13.0, -2.0, -3.0));

    // linear scan over every sphere, the baseline an acceleration structure would beat
    bench_group.bench_function("cover_photo", |b| {
        b.iter(|| world.hit(&ray, SHADOW_ACNE_EPSILON, f32::INFINITY))
    });

    bench_group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut bench_group = c.benchmark_group("render");
    // full renders are slow, keep the sample count low
    bench_group.sample_size(10);

    let scenes_to_check = [scenes::SceneType::MaterialDev, scenes::SceneType::CoverPhoto];

    for scene_type in scenes_to_check {
        let scene_name = format!("{scene_type:?}");
        let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
        let scene = scenes::get_scene(scene_type, &mut rng).expect("scene builds");
        let cam = scene.camera.build(2.0).expect("scene camera is valid");
        let renderer = Renderer::new(RenderSettings {
            image_width: 64,
            image_height: 32,
            samples_per_pixel: 4,
            bounce_depth: 8,
            background: scene.background,
            seed: 0,
        })
        .expect("render settings are valid");

        // use bench with input for cleaner per-scene test name
        bench_group.bench_with_input(BenchmarkId::from_parameter(scene_name), &scene, |b, s| {
            b.iter(|| renderer.render_scene(&cam, &s.world))
        });
    }

    bench_group.finish();
}

criterion_group! {benches, bench_hit, bench_render}
criterion_main!(benches);
