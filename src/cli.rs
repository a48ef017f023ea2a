//! Definition of command line arguments

use std::path::PathBuf;

pub use clap::Parser;
use glam::Vec3A;

pub use clap_verbosity_flag::{InfoLevel, Verbosity};

use crate::{camera::CameraSettings, output::OutputFormat, scenes::SceneType};

/// Argument definitions for [clap::Parser]
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Arguments {
    /// The path to the file to write the resulting image into
    ///
    /// `.ppm` files are written as plain-text P3; `.png` and `.jpg` are also supported
    #[clap(
        short,
        long,
        value_parser = valid_image_file,
        default_value = "output.ppm",
        value_name = "FILE"
    )]
    pub output: PathBuf,

    /// The width of the generated image
    #[clap(
        short = 'w',
        long = "width",
        value_parser = valid_count::<u32>,
        default_value_t = 800,
        value_name = "NUM"
    )]
    pub image_width: u32,

    /// The height of the generated image [default: derived from the scene's aspect ratio]
    #[clap(long = "height", value_parser = valid_count::<u32>, value_name = "NUM")]
    pub image_height: Option<u32>,

    /// samples per pixel
    ///
    /// A higher count of samples leads to higher visual fidelity due to more rays sent for a pixel
    #[clap(
        short = 'n',
        long = "samples",
        value_parser = valid_count::<u32>,
        default_value_t = 100,
        value_name = "NUM"
    )]
    pub samples_per_pixel: u32,

    /// number of light contribution bounces
    ///
    /// A higher number of bounces leads to higher visual fidelity due to more accurate gathered light
    #[clap(
        short,
        long = "bounces",
        value_parser = valid_count::<u16>,
        default_value_t = 50,
        value_name = "NUM"
    )]
    pub bounce_depth: u16,

    /// The hardcoded scene to use
    #[clap(short, long, value_enum, default_value_t = SceneType::CoverPhoto)]
    pub scene: SceneType,

    /// The seed used for psuedorandom number generation
    #[clap(long)]
    pub seed: Option<u64>,

    /// Camera position, overriding the scene's
    #[clap(long, value_parser = parse_vec3, allow_hyphen_values = true, value_name = "X,Y,Z")]
    pub look_from: Option<Vec3A>,

    /// Point the camera faces, overriding the scene's
    #[clap(long, value_parser = parse_vec3, allow_hyphen_values = true, value_name = "X,Y,Z")]
    pub look_at: Option<Vec3A>,

    /// Camera up direction, overriding the scene's
    #[clap(long, value_parser = parse_vec3, allow_hyphen_values = true, value_name = "X,Y,Z")]
    pub view_up: Option<Vec3A>,

    /// Vertical field of view in degrees
    #[clap(long, value_name = "DEGREES")]
    pub fov: Option<f32>,

    /// Lens aperture; 0 disables depth of field
    #[clap(long, value_name = "NUM")]
    pub aperture: Option<f32>,

    /// Distance from the camera to the plane in focus
    #[clap(long, value_name = "NUM")]
    pub focus_dist: Option<f32>,

    #[clap(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Arguments {
    /// Returns `settings` with every camera option given on the commandline applied.
    pub fn camera_settings(&self, settings: CameraSettings) -> CameraSettings {
        CameraSettings {
            look_from: self.look_from.unwrap_or(settings.look_from),
            look_at: self.look_at.unwrap_or(settings.look_at),
            view_up: self.view_up.unwrap_or(settings.view_up),
            vert_fov: self.fov.unwrap_or(settings.vert_fov),
            aperture: self.aperture.unwrap_or(settings.aperture),
            focus_dist: self.focus_dist.unwrap_or(settings.focus_dist),
        }
    }

    /// Returns the image dimensions, deriving a missing height from `aspect_ratio`.
    pub fn dimensions(&self, aspect_ratio: f32) -> (u32, u32) {
        let height = self
            .image_height
            .unwrap_or_else(|| ((self.image_width as f32 / aspect_ratio) as u32).max(1));
        (self.image_width, height)
    }
}

/// Checks whether the given integer value is greater than 0
fn valid_count<T>(s: &str) -> Result<T, String>
where
    T: num_traits::PrimInt + std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Display,
{
    match s.parse::<T>() {
        Ok(count) => {
            if count > T::zero() {
                Ok(count)
            } else {
                Err("count must be greater than 0".to_string())
            }
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Checks whether the given output file has an extension we can encode
fn valid_image_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    match OutputFormat::from_path(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(e.to_string()),
    }
}

/// Parses a comma separated triple such as `13,2,3` into a [Vec3A]
fn parse_vec3(s: &str) -> Result<Vec3A, String> {
    let parts = s
        .split(',')
        .map(|part| part.trim().parse::<f32>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3A::new(*x, *y, *z)),
        _ => Err(format!("expected 3 comma separated numbers, found {}", parts.len())),
    }
}
