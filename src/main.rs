use anyhow::Context;
use log::{debug, info};
use rand::{Rng, SeedableRng};

use glint::{
    cli::{Arguments, Parser},
    output, render, scenes,
};

fn main() -> anyhow::Result<()> {
    // Parsing cli args
    let cli_args = Arguments::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli_args.verbosity.log_level_filter())
        .init();

    // set up enviroment
    let seed = if let Some(seed) = cli_args.seed {
        // use user-provided seed if available
        seed
    } else if cfg!(debug_assertions) {
        // if debugging, use deterministic seed
        0
    } else {
        // otherwise real psuedo-randomness
        rand::thread_rng().gen()
    };
    info!("Using seed {seed}");
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);

    // Get scene
    let scene = scenes::get_scene(cli_args.scene, &mut rng)
        .with_context(|| format!("Failed to build scene {:?}", cli_args.scene))?;
    debug!("Scene contains {} objects", scene.world.len());

    let (image_width, image_height) = cli_args.dimensions(scene.aspect_ratio);
    let cam = cli_args
        .camera_settings(scene.camera)
        .build(image_width as f32 / image_height as f32)
        .context("Invalid camera configuration")?;

    let renderer = render::Renderer::new(render::RenderSettings {
        image_width,
        image_height,
        samples_per_pixel: cli_args.samples_per_pixel,
        bounce_depth: cli_args.bounce_depth,
        background: scene.background,
        seed,
    })
    .context("Invalid render configuration")?;

    let img_buf = renderer.render_scene(&cam, &scene.world)?;

    // write image to file
    output::save_image(&img_buf, &cli_args.output)
        .with_context(|| format!("Failed to write {:?}", cli_args.output))?;

    Ok(())
}
