//! Thin-lens camera turning image-plane coordinates into world-space rays

use glam::Vec3A;
use rand::Rng;

use crate::{
    error::{Error, Result},
    ray::Ray,
    utils::random::rand_vec3_in_unit_disk,
};

/// User-facing camera parameters, validated by [CameraSettings::build]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Camera position
    pub look_from: Vec3A,
    /// Point the camera faces
    pub look_at: Vec3A,
    /// Approximate up direction, need not be perpendicular to the view
    pub view_up: Vec3A,
    /// Vertical field of view in degrees
    pub vert_fov: f32,
    /// Lens diameter; 0 gives a pinhole camera
    pub aperture: f32,
    /// Distance to the plane in perfect focus
    pub focus_dist: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Vec3A::ZERO,
            look_at: Vec3A::NEG_Z,
            view_up: Vec3A::Y,
            vert_fov: 90.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }
}

impl CameraSettings {
    /// Validates the settings and derives a [Camera] for the given aspect ratio (width / height).
    pub fn build(&self, aspect_ratio: f32) -> Result<Camera> {
        Camera::new(
            self.look_from,
            self.look_at,
            self.view_up,
            self.vert_fov,
            aspect_ratio,
            self.aperture,
            self.focus_dist,
        )
    }
}

/// A camera with an orthonormal basis and a viewport placed on the focus plane
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3A,
    lower_left_corner: Vec3A,
    horizontal: Vec3A,
    vertical: Vec3A,
    u: Vec3A,
    v: Vec3A,
    lens_radius: f32,
}

impl Camera {
    /// Creates a new camera.
    ///
    /// Rejects non-finite input, a field of view outside `(0, 180)` degrees,
    /// a negative aperture, a non-positive focus distance or aspect ratio,
    /// and a view direction that is zero or parallel to `view_up`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        look_from: Vec3A,
        look_at: Vec3A,
        view_up: Vec3A,
        vert_fov: f32,
        aspect_ratio: f32,
        aperture: f32,
        focus_dist: f32,
    ) -> Result<Self> {
        if !(look_from.is_finite() && look_at.is_finite() && view_up.is_finite()) {
            return Err(Error::InvalidCamera("positions must be finite"));
        }
        if !(vert_fov > 0.0 && vert_fov < 180.0) {
            return Err(Error::InvalidCamera("vertical fov must be within (0, 180) degrees"));
        }
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(Error::InvalidCamera("aspect ratio must be positive"));
        }
        if !(aperture.is_finite() && aperture >= 0.0) {
            return Err(Error::InvalidCamera("aperture must not be negative"));
        }
        if !(focus_dist.is_finite() && focus_dist > 0.0) {
            return Err(Error::InvalidCamera("focus distance must be positive"));
        }

        let theta = vert_fov.to_radians();
        let viewport_height = 2.0 * (theta / 2.0).tan();
        let viewport_width = aspect_ratio * viewport_height;

        let w = (look_from - look_at).normalize_or_zero();
        if w == Vec3A::ZERO {
            return Err(Error::InvalidCamera("look_from and look_at coincide"));
        }
        let u = view_up.cross(w).normalize_or_zero();
        if u == Vec3A::ZERO {
            return Err(Error::InvalidCamera("view_up is parallel to the view direction"));
        }
        let v = w.cross(u);

        let origin = look_from;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Ok(Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: aperture / 2.0,
        })
    }

    /// Returns a ray through the viewport point at normalized coordinates (`s`, `t`).
    ///
    /// `(0, 0)` is the lower left corner of the viewport and `(1, 1)` the upper right.
    /// The ray starts at a random point of the lens disk.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut impl Rng) -> Ray {
        let rd = self.lens_radius * rand_vec3_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin - offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    fn pinhole() -> Camera {
        CameraSettings::default().build(2.0).unwrap()
    }

    #[test]
    fn center_ray_looks_forward() {
        let cam = pinhole();
        let mut rng = SmallRng::seed_from_u64(0);
        let ray = cam.get_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin, Vec3A::ZERO);
        assert!(ray.direction.abs_diff_eq(Vec3A::NEG_Z, 1e-6), "{ray}");
    }

    #[test]
    fn viewport_corners() {
        // 90 degree fov at focus distance 1 spans [-1, 1] vertically and [-2, 2] horizontally
        let cam = pinhole();
        let mut rng = SmallRng::seed_from_u64(0);
        let lower_left = cam.get_ray(0.0, 0.0, &mut rng).direction;
        let upper_right = cam.get_ray(1.0, 1.0, &mut rng).direction;
        assert!(lower_left.abs_diff_eq(Vec3A::new(-2.0, -1.0, -1.0), 1e-5), "{lower_left}");
        assert!(upper_right.abs_diff_eq(Vec3A::new(2.0, 1.0, -1.0), 1e-5), "{upper_right}");
    }

    #[test]
    fn lens_jitters_origin_but_keeps_focus() {
        let settings = CameraSettings {
            look_from: Vec3A::new(13.0, 2.0, 3.0),
            look_at: Vec3A::ZERO,
            vert_fov: 20.0,
            aperture: 0.5,
            focus_dist: 10.0,
            ..Default::default()
        };
        let cam = settings.build(1.5).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);

        let focus_point = cam.get_ray(0.3, 0.7, &mut SmallRng::seed_from_u64(0));
        let focus_point = focus_point.at(1.0);
        for _ in 0..50 {
            let ray = cam.get_ray(0.3, 0.7, &mut rng);
            assert!(ray.origin.distance(settings.look_from) <= 0.25 + 1e-5);
            // every lens sample converges on the same focus-plane point
            assert!(ray.at(1.0).abs_diff_eq(focus_point, 1e-3), "{}", ray.at(1.0));
        }
    }

    #[test]
    fn rejects_invalid_settings() {
        let base = CameraSettings::default();
        let cases = [
            CameraSettings { vert_fov: 0.0, ..base },
            CameraSettings { vert_fov: 180.0, ..base },
            CameraSettings { aperture: -0.1, ..base },
            CameraSettings { focus_dist: 0.0, ..base },
            CameraSettings { look_at: base.look_from, ..base },
            CameraSettings { view_up: Vec3A::NEG_Z, ..base },
            CameraSettings { look_from: Vec3A::splat(f32::NAN), ..base },
        ];
        for settings in cases {
            assert!(
                matches!(settings.build(1.0), Err(Error::InvalidCamera(_))),
                "{settings:?} was accepted"
            );
        }
        assert!(base.build(0.0).is_err());
    }
}
