//! Analytic sphere primitive

use std::sync::Arc;

use glam::Vec3A;

use crate::{
    error::{Error, Result},
    hittables::{HitRecord, Hittable},
    material::Material,
    ray::Ray,
};

/// A sphere with a shared [Material]
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3A,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// Fails unless `center` is finite and `radius` is finite and positive.
    pub fn new(center: Vec3A, radius: f32, material: &Arc<Material>) -> Result<Self> {
        if !center.is_finite() {
            return Err(Error::InvalidCenter);
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material: Arc::clone(material),
        })
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        // solve |O + tD - C|^2 = r^2 using the half-b form of the quadratic
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();

        // nearest root in range, smaller one first
        let in_range = |t: f32| t_min < t && t < t_max;
        let root = [(-half_b - sqrt_d) / a, (-half_b + sqrt_d) / a]
            .into_iter()
            .find(|&t| in_range(t))?;

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, &self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        let mat = Arc::new(Material::lambertian(Vec3A::ONE));
        Sphere::new(Vec3A::ZERO, 1.0, &mat).unwrap()
    }

    #[test]
    fn head_on_hit() {
        let ray = Ray::new(Vec3A::new(0.0, 0.0, 5.0), Vec3A::NEG_Z);
        let rec = unit_sphere().hit(&ray, 0.001, f32::INFINITY).unwrap();

        assert!((rec.t - 4.0).abs() < 1e-5, "t was {}", rec.t);
        assert!(rec.point.abs_diff_eq(Vec3A::Z, 1e-5), "point was {}", rec.point);
        assert!(rec.normal.abs_diff_eq(Vec3A::Z, 1e-5), "normal was {}", rec.normal);
        assert!(rec.front_face);
    }

    #[test]
    fn miss() {
        let ray = Ray::new(Vec3A::new(2.0, 2.0, 5.0), Vec3A::NEG_Z);
        assert!(unit_sphere().hit(&ray, 0.001, f32::INFINITY).is_none());
    }

    #[test]
    fn falls_back_to_far_root_from_inside() {
        let ray = Ray::new(Vec3A::ZERO, Vec3A::NEG_Z);
        let rec = unit_sphere().hit(&ray, 0.001, f32::INFINITY).unwrap();

        assert!((rec.t - 1.0).abs() < 1e-5, "t was {}", rec.t);
        assert!(!rec.front_face);
        // stored normal faces back toward the ray origin
        assert!(rec.normal.abs_diff_eq(Vec3A::Z, 1e-5), "normal was {}", rec.normal);
    }

    #[test]
    fn respects_interval() {
        let ray = Ray::new(Vec3A::new(0.0, 0.0, 5.0), Vec3A::NEG_Z);
        let sphere = unit_sphere();
        // both roots (4 and 6) outside the interval
        assert!(sphere.hit(&ray, 0.001, 3.9).is_none());
        assert!(sphere.hit(&ray, 6.1, f32::INFINITY).is_none());
        // near root excluded, far root accepted
        let rec = sphere.hit(&ray, 4.5, f32::INFINITY).unwrap();
        assert!((rec.t - 6.0).abs() < 1e-5);
    }

    #[test]
    fn unnormalized_direction() {
        let ray = Ray::new(Vec3A::new(0.0, 0.0, 5.0), Vec3A::new(0.0, 0.0, -2.0));
        let rec = unit_sphere().hit(&ray, 0.001, f32::INFINITY).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-5);
        assert!(rec.normal.is_normalized());
    }

    #[test]
    fn rejects_bad_geometry() {
        let mat = Arc::new(Material::dielectric(1.5).unwrap());
        assert!(matches!(
            Sphere::new(Vec3A::ZERO, -1.0, &mat),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            Sphere::new(Vec3A::ZERO, 0.0, &mat),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            Sphere::new(Vec3A::ZERO, f32::NAN, &mat),
            Err(Error::InvalidRadius(_))
        ));
        assert!(matches!(
            Sphere::new(Vec3A::splat(f32::INFINITY), 1.0, &mat),
            Err(Error::InvalidCenter)
        ));
    }
}
