//! Implementation of a 3-dimensional Ray.

use std::f32::INFINITY;

use glam::Vec3A;
use rand::Rng;

use crate::{
    color::{colors, Color},
    hittables::Hittable,
    material::ScatterRecord,
    utils::vector::unit_vector,
};

/// Lower bound of the accepted hit interval for every traced ray.
///
/// Keeps a scattered ray from re-hitting the surface it starts on.
pub const SHADOW_ACNE_EPSILON: f32 = 0.001;

/// Radiance returned for rays that leave the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Background {
    /// Vertical blend from white (looking down) to sky blue (looking up)
    #[default]
    Sky,
    /// A constant color in every direction
    Solid(Color),
}

impl Background {
    /// Returns the background color seen along `direction`.
    pub fn color(&self, direction: Vec3A) -> Color {
        match self {
            Background::Sky => {
                let t = 0.5 * (unit_vector(direction).y + 1.0);
                (1.0 - t) * colors::WHITE + t * colors::SKY_BLUE
            }
            Background::Solid(color) => *color,
        }
    }
}

/// A 3-dimensional Ray
///
/// The crucial parts of the Ray are its origin and direction;
/// these two members are the primary way to determine an intersection with a [`Hittable`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ray {
    pub origin: Vec3A,
    pub direction: Vec3A,
}

impl std::fmt::Display for Ray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} -> {})", self.origin, self.direction)
    }
}

impl Ray {
    /// Creates a new Ray.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Returns a position in 3D space along the ray.
    ///
    /// Performs the following calculation: `position = origin + t * direction`
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }

    /// Returns a [`Color`] estimating the radiance arriving along this ray.
    ///
    /// Each bounce multiplies in the attenuation of the material that scattered it.
    /// Uses `bounce_depth` to limit the amount of recursion when gathering contributions;
    /// a depth of 0 gathers nothing.
    pub fn shade(
        &self,
        hittable: &impl Hittable,
        bounce_depth: u16,
        background: Background,
        rng: &mut impl Rng,
    ) -> Color {
        // Limit recursion depth
        if bounce_depth == 0 {
            return colors::BLACK;
        }

        // Check for a hit against the `hittable` parameter
        match hittable.hit(self, SHADOW_ACNE_EPSILON, INFINITY) {
            Some(hit_rec) => match hit_rec.material.scatter(self, &hit_rec, rng) {
                // A successful ray scatter leads to more contributions.
                Some(ScatterRecord { ray, attenuation }) => {
                    attenuation * ray.shade(hittable, bounce_depth - 1, background, rng)
                }
                // Otherwise, the light was absorbed
                None => colors::BLACK,
            },
            // without a hit, functions like a miss shader
            None => background.color(self.direction),
        }
    }
}
