//! Scene generation functionality

use std::sync::Arc;

use glam::Vec3A;
use rand::Rng;

use crate::{
    camera::CameraSettings,
    color::Color,
    error::Result,
    hittables::*,
    material::Material,
    ray::Background,
    utils::random::{rand_vec3, rand_vec3_range},
};

/// Possible hard-coded scenes to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneType {
    /// Scene like the cover of "Ray Tracing in One Weekend".
    CoverPhoto,
    /// Test scene with one sphere of each material
    MaterialDev,
    /// A single diffuse sphere resting on a large ground sphere
    Simple,
}

/// Everything needed to render a scene besides the image settings
#[derive(Clone)]
pub struct Scene {
    /// Default camera placement, may be overridden by the caller
    pub camera: CameraSettings,
    /// Preferred width / height ratio when no explicit height is requested
    pub aspect_ratio: f32,
    /// Radiance for rays leaving the scene
    pub background: Background,
    /// The geometry of the scene
    pub world: HittableList,
}

/// Returns the camera defaults, aspect ratio, background and geometry of `scene_type`.
///
/// Random scenes draw from `rng`, so a seeded source reproduces the same layout.
pub fn get_scene(scene_type: SceneType, rng: &mut impl Rng) -> Result<Scene> {
    // Setup default camera properties
    let mut camera = CameraSettings {
        look_from: Vec3A::new(13.0, 2.0, 3.0),
        look_at: Vec3A::ZERO,
        view_up: Vec3A::Y,
        vert_fov: 20.0,
        aperture: 0.0,
        focus_dist: 10.0,
    };
    let mut aspect_ratio = 16.0 / 9.0;

    match scene_type {
        SceneType::CoverPhoto => {
            camera.aperture = 0.1;
            aspect_ratio = 2.0;
        }
        SceneType::MaterialDev | SceneType::Simple => {
            camera.look_from = Vec3A::ZERO;
            camera.look_at = Vec3A::NEG_Z;
            camera.vert_fov = 90.0;
            camera.focus_dist = 1.0;
        }
    }

    Ok(Scene {
        camera,
        aspect_ratio,
        background: Background::Sky,
        world: get_geometry(scene_type, rng)?,
    })
}

/// Returns just the geometry of `scene_type`.
pub fn get_geometry(scene_type: SceneType, rng: &mut impl Rng) -> Result<HittableList> {
    match scene_type {
        SceneType::CoverPhoto => gen_random_scene(rng),
        SceneType::MaterialDev => get_mat_dev_scene(),
        SceneType::Simple => get_simple_scene(),
    }
}

/// Returns a [HittableList] containing a few spheres with unique materials
fn get_mat_dev_scene() -> Result<HittableList> {
    let ground_material = Arc::new(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
    let mat_center = Arc::new(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
    let mat_left = Arc::new(Material::dielectric(1.5)?);
    let mat_right = Arc::new(Material::metal(Color::new(0.8, 0.6, 0.2), 0.1));

    Ok(vec![
        Sphere::new(Vec3A::new(0.0, -100.5, -1.0), 100.0, &ground_material)?.wrap(),
        Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5, &mat_center)?.wrap(),
        Sphere::new(Vec3A::new(-1.0, 0.0, -1.0), 0.5, &mat_left)?.wrap(),
        Sphere::new(Vec3A::new(1.0, 0.0, -1.0), 0.5, &mat_right)?.wrap(),
    ])
}

/// Returns a [HittableList] with one diffuse sphere over the ground
fn get_simple_scene() -> Result<HittableList> {
    let mat = Arc::new(Material::lambertian(Color::splat(0.5)));

    Ok(vec![
        Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5, &mat)?.wrap(),
        Sphere::new(Vec3A::new(0.0, -100.5, -1.0), 100.0, &mat)?.wrap(),
    ])
}

/// Returns a [HittableList] containing randomly-generated spheres
fn gen_random_scene(rng: &mut impl Rng) -> Result<HittableList> {
    //  Create ground sphere
    let ground_material = Arc::new(Material::lambertian(Color::splat(0.5)));
    let mut world: HittableList =
        vec![Sphere::new(Vec3A::new(0.0, -1000.0, 0.0), 1000.0, &ground_material)?.wrap()];

    // The random generation part
    const CLEARING: Vec3A = Vec3A::from_array([4.0, 0.2, 0.0]);
    for a in -11..11 {
        for b in -11..11 {
            let decide_mat = rng.gen::<f32>();
            let center = Vec3A::new(
                a as f32 + 0.9 * rng.gen::<f32>(),
                0.2,
                b as f32 + 0.9 * rng.gen::<f32>(),
            );

            if (center - CLEARING).length() > 0.9 {
                // pick a material by "rarity"
                let mat = if decide_mat < 0.8 {
                    // diffuse
                    let albedo = rand_vec3(rng) * rand_vec3(rng);
                    Material::lambertian(albedo)
                } else if decide_mat < 0.95 {
                    // metal
                    let albedo = rand_vec3_range(rng, 0.5, 1.0);
                    Material::metal(albedo, rng.gen_range(0.0..0.5))
                } else {
                    // glass
                    Material::dielectric(1.5)?
                };

                world.push(Sphere::new(center, 0.2, &Arc::new(mat))?.wrap());
            }
        }
    }

    // The signature central spheres
    let mat_1 = Arc::new(Material::dielectric(1.5)?);
    let mat_2 = Arc::new(Material::lambertian(Color::new(0.4, 0.2, 0.1)));
    let mat_3 = Arc::new(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0));

    world.push(Sphere::new(Vec3A::new(0.0, 1.0, 0.0), 1.0, &mat_1)?.wrap());
    world.push(Sphere::new(Vec3A::new(-4.0, 1.0, 0.0), 1.0, &mat_2)?.wrap());
    world.push(Sphere::new(Vec3A::new(4.0, 1.0, 0.0), 1.0, &mat_3)?.wrap());

    Ok(world)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn cover_photo_layout() {
        let mut rng = SmallRng::seed_from_u64(0);
        let world = get_geometry(SceneType::CoverPhoto, &mut rng).unwrap();
        // ground + at most 22x22 small spheres + 3 feature spheres
        assert!(world.len() > 4 && world.len() <= 1 + 22 * 22 + 3, "{}", world.len());
    }

    #[test]
    fn seed_reproduces_scene() {
        let ray = crate::ray::Ray::new(Vec3A::new(0.0, 5.0, 0.0), Vec3A::new(0.3, -1.0, 0.7));
        let hit_t = |seed| {
            let world = get_geometry(SceneType::CoverPhoto, &mut SmallRng::seed_from_u64(seed))
                .unwrap();
            (world.len(), world.hit(&ray, 0.001, f32::INFINITY).map(|rec| rec.t))
        };
        assert_eq!(hit_t(17), hit_t(17));
    }

    #[test]
    fn every_scene_builds_a_camera() {
        let mut rng = SmallRng::seed_from_u64(0);
        for scene_type in [SceneType::CoverPhoto, SceneType::MaterialDev, SceneType::Simple] {
            let scene = get_scene(scene_type, &mut rng).unwrap();
            assert!(!scene.world.is_empty());
            assert!(scene.camera.build(scene.aspect_ratio).is_ok(), "{scene_type:?}");
        }
    }
}
