//! Monte Carlo path tracer for scenes made of spheres
//!
//! A [camera::Camera] shoots jittered rays through every pixel, [ray::Ray::shade]
//! follows them through a [hittables::HittableList] while each hit
//! [material::Material] scatters or absorbs them, and [render::Renderer]
//! averages the samples into an 8-bit image.

mod utils;

pub mod camera;
pub mod color;
pub mod error;
pub mod material;
pub mod ray;

// public: commandline parser
pub mod cli;
// public: `Hittable` trait
pub mod hittables;
// public: image writers
pub mod output;
// public: renderer functionality
pub mod render;
// public: scene selection
pub mod scenes;

pub use error::{Error, Result};
pub use utils::{random, vector};
