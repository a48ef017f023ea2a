//! Ray-object intersection: the [Hittable] trait and its implementors

use std::sync::Arc;

use glam::Vec3A;

use crate::{material::Material, ray::Ray};

mod sphere;

pub use sphere::Sphere;

/// Set of data describing a ray's intersection with a surface
#[derive(Debug, Clone)]
pub struct HitRecord {
    /// Where the ray struck the surface
    pub point: Vec3A,
    /// Unit surface normal, always facing against the incoming ray
    pub normal: Vec3A,
    /// Ray parameter of the intersection
    pub t: f32,
    /// Whether the ray struck the outside of the surface
    pub front_face: bool,
    /// Material of the surface that was hit
    pub material: Arc<Material>,
}

impl HitRecord {
    /// Creates a record for `ray` hitting a surface at parameter `t`.
    ///
    /// `outward_normal` must be unit length; it is flipped as needed by [HitRecord::set_face_normal].
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3A, material: &Arc<Material>) -> Self {
        let mut rec = Self {
            point: ray.at(t),
            normal: outward_normal,
            t,
            front_face: true,
            material: Arc::clone(material),
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Orients the stored normal against the ray and records which side was hit.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3A) {
        self.front_face = ray.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be intersected by a [Ray].
///
/// Implementors are shared read-only across render threads.
pub trait Hittable: Send + Sync {
    /// Returns the nearest intersection with `ray` whose parameter lies strictly within `(t_min, t_max)`.
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord>;

    /// Moves `self` behind a shared pointer so it can go in a [HittableList].
    fn wrap(self) -> Arc<dyn Hittable>
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// An ordered collection of scene objects, searched linearly
pub type HittableList = Vec<Arc<dyn Hittable>>;

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord> {
        let mut closest = None;
        let mut t_closest = t_max;

        for object in self {
            if let Some(rec) = object.hit(ray, t_min, t_closest) {
                t_closest = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
