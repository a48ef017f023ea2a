//! Render an image given a [Camera] and a [Hittable].

use std::sync::atomic::{AtomicBool, Ordering};

use glam::Vec3A;
use log::{debug, info};
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[cfg(feature = "parallel")]
use {indicatif::ParallelProgressIterator, rayon::prelude::*};

#[cfg(not(feature = "parallel"))]
use indicatif::ProgressIterator;

use crate::{
    camera::Camera,
    color::{Color, VecExt},
    error::{Error, Result},
    hittables::Hittable,
    ray::Background,
    utils::progress::get_progressbar,
};

/// Knobs controlling image size and sampling density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,
    pub bounce_depth: u16,
    pub background: Background,
    /// Base seed; each image row derives its own generator from it
    pub seed: u64,
}

/// Image Renderer storing scene context values such as image dimensions and samples per pixel
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    /// Creates a new [Renderer], rejecting empty images and zero sample or bounce counts.
    pub fn new(settings: RenderSettings) -> Result<Self> {
        let RenderSettings {
            image_width,
            image_height,
            ..
        } = settings;
        if image_width == 0 || image_height == 0 {
            return Err(Error::InvalidDimensions {
                width: image_width,
                height: image_height,
            });
        }
        if settings.samples_per_pixel == 0 {
            return Err(Error::InvalidSampleCount);
        }
        if settings.bounce_depth == 0 {
            return Err(Error::InvalidBounceDepth);
        }

        Ok(Self { settings })
    }

    /// Traces one jittered sample through the pixel at image coordinates (`x`, `y`)
    ///
    /// Uses the provided [Camera] to translate the image coordinates
    /// to world space coordinates, then computes the color value.
    /// Row `y = 0` is the top of the image.
    #[inline]
    fn compute_pixel_v(
        &self,
        cam: &Camera,
        world: &impl Hittable,
        x: u32,
        y: u32,
        rng: &mut impl Rng,
    ) -> Vec3A {
        let RenderSettings {
            image_width,
            image_height,
            ..
        } = self.settings;

        // convert buffer indices to viewport coordinates
        let offset_u: f32 = rng.gen();
        let offset_v: f32 = rng.gen();
        let u = (x as f32 + offset_u) / image_width as f32;
        let v = ((image_height - 1 - y) as f32 + offset_v) / image_height as f32;

        cam.get_ray(u, v, rng).shade(
            world,
            self.settings.bounce_depth,
            self.settings.background,
            rng,
        )
    }

    /// Averages `samples_per_pixel` radiance estimates for one pixel.
    fn sample_pixel(
        &self,
        cam: &Camera,
        world: &impl Hittable,
        x: u32,
        y: u32,
        rng: &mut impl Rng,
    ) -> Color {
        let color_v: Vec3A = (0..self.settings.samples_per_pixel)
            .map(|_| self.compute_pixel_v(cam, world, x, y, rng))
            .sum();

        color_v / self.settings.samples_per_pixel as f32
    }

    /// Seed for the generator of image row `y`
    fn row_seed(&self, y: u32) -> u64 {
        self.settings.seed ^ (u64::from(y) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    /// Fills one row of RGB bytes, checking `cancel` before every pixel.
    fn render_row(
        &self,
        cam: &Camera,
        world: &impl Hittable,
        y: u32,
        row: &mut [u8],
        cancel: &AtomicBool,
    ) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(self.row_seed(y));

        for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
            if cancel.load(Ordering::Relaxed) {
                return Err(Error::Cancelled);
            }
            let color = self.sample_pixel(cam, world, x as u32, y, &mut rng);
            let rgb: image::Rgb<u8> = color.to_pixel();
            pixel.copy_from_slice(&rgb.0);
        }

        Ok(())
    }

    /// Generates an image from the given scene.
    ///
    /// A scene consists of a [Camera] and some [Hittable].
    /// This functions outputs its progress to the commandline.
    pub fn render_scene(&self, cam: &Camera, world: &impl Hittable) -> Result<image::RgbImage> {
        self.render_scene_with_cancel(cam, world, &AtomicBool::new(false))
    }

    /// Like [Renderer::render_scene], but gives up with [Error::Cancelled]
    /// once `cancel` is set. The flag is polled between pixels.
    pub fn render_scene_with_cancel(
        &self,
        cam: &Camera,
        world: &impl Hittable,
        cancel: &AtomicBool,
    ) -> Result<image::RgbImage> {
        let RenderSettings {
            image_width,
            image_height,
            samples_per_pixel,
            bounce_depth,
            seed,
            ..
        } = self.settings;
        info!(
            "Rendering {image_width}x{image_height} at {samples_per_pixel} spp, {bounce_depth} bounces"
        );
        debug!("base seed {seed}");
        let start = std::time::Instant::now();

        let progress_bar = get_progressbar(u64::from(image_height)).with_prefix("Tracing rows");

        // Allocate image buffer
        let mut img_buf: image::RgbImage = image::ImageBuffer::new(image_width, image_height);
        let row_len = image_width as usize * 3;

        // Rows are disjoint slices of the buffer, so workers never share a pixel
        #[cfg(feature = "parallel")]
        img_buf
            .par_chunks_mut(row_len)
            .enumerate()
            .progress_with(progress_bar.clone())
            .try_for_each(|(y, row)| self.render_row(cam, world, y as u32, row, cancel))?;

        #[cfg(not(feature = "parallel"))]
        img_buf
            .chunks_mut(row_len)
            .enumerate()
            .progress_with(progress_bar.clone())
            .try_for_each(|(y, row)| self.render_row(cam, world, y as u32, row, cancel))?;

        progress_bar.finish_and_clear();
        info!("Rendered in {:.2?}", start.elapsed());

        Ok(img_buf)
    }
}
