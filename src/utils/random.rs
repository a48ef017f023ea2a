//! Miscelleanous utilities related to random number generation and random sampling
//!
//! Relies on the [rand] and [rand_distr] crates. Every sampler takes the
//! random source explicitly so renders can be reproduced from a seed.

use glam::Vec3A;
use rand::Rng;
use rand_distr::{Distribution, UnitBall, UnitDisc, UnitSphere};

/// Generates a random [Vec3A] with components in `[0, 1)`.
pub fn rand_vec3(rng: &mut impl Rng) -> Vec3A {
    rng.gen::<Vec3A>()
}

/// Generates a random [Vec3A] with components in `[min, max)`.
pub fn rand_vec3_range(rng: &mut impl Rng, min: f32, max: f32) -> Vec3A {
    Vec3A::splat(min) + (max - min) * rand_vec3(rng)
}

/// Generates a random [Vec3A] inside the unit ball (radius 1).
///
/// wrapper function around [UnitBall]'s `sample` method, which rejection samples the unit cube
pub fn rand_vec3_in_unit_sphere(rng: &mut impl Rng) -> Vec3A {
    Vec3A::from_array(UnitBall.sample(rng))
}

/// Generates a random [Vec3A] on the surface of the unit sphere.
///
/// wrapper function around [UnitSphere]'s `sample` method
pub fn rand_vec3_on_unit_sphere(rng: &mut impl Rng) -> Vec3A {
    Vec3A::from_array(UnitSphere.sample(rng))
}

/// Generates a random [Vec3A] inside the unit ball, flipped into the same hemisphere as `normal`.
pub fn rand_vec3_in_unit_hemisphere(rng: &mut impl Rng, normal: Vec3A) -> Vec3A {
    let in_ball = rand_vec3_in_unit_sphere(rng);
    if in_ball.dot(normal) < 0.0 {
        -in_ball
    } else {
        in_ball
    }
}

/// Generates a random [Vec3A] within the unit disk (radius 1) on the xy-plane.
///
/// wrapper function around [UnitDisc]'s `sample` method.
pub fn rand_vec3_in_unit_disk(rng: &mut impl Rng) -> Vec3A {
    let [x, y] = UnitDisc.sample(rng);
    Vec3A::new(x, y, 0.0)
}
