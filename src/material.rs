//! Implementation of material types

use glam::Vec3A;
use rand::Rng;

use crate::{
    color::{colors, Color},
    error::{Error, Result},
    hittables::HitRecord,
    ray::Ray,
    utils::{random, vector},
};

/// Returns a reflected ray direction based on the given normal
///
/// Performs the following computation: `v - 2 * v.dot(n) * n`
#[inline]
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - n * v.dot(n) * 2.0
}

/// Returns a refracted ray direction using the given normal
/// and the ratio between two refractive indices.
///
/// `uv` and `n` must be unit vectors facing each other.
/// See [Shirley's RTiOW's section on Snell's Law](https://raytracing.github.io/books/RayTracingInOneWeekend.html#dielectrics/snell'slaw) for more information
#[inline]
pub fn refract(uv: Vec3A, n: Vec3A, eta_ratio: f32) -> Vec3A {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_perp = eta_ratio * (uv + cos_theta * n);
    let r_para = -(1.0 - r_perp.length_squared()).abs().sqrt() * n;
    r_perp + r_para
}

/// Returns the Lambertian scatter direction `normal + random_unit`.
///
/// Falls back to `normal` when the random vector cancels it out.
#[inline]
fn diffuse_direction(normal: Vec3A, random_unit: Vec3A) -> Vec3A {
    let scatter_dir = normal + random_unit;
    if vector::near_zero(scatter_dir) {
        normal
    } else {
        scatter_dir
    }
}

/// Enumeration of possible material types.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// An approximation of a diffuse, or matte, material.
    ///
    /// See the [Wikipedia page on Lambertian reflectance](https://en.wikipedia.org/wiki/Lambertian_reflectance) for more information.
    Lambertian { albedo: Color },
    /// A metallic material that reflects rays, blurred by `fuzz` in `[0, 1]`.
    Metal { albedo: Color, fuzz: f32 },
    /// A glass material that scatters rays based on the given refractive index.
    Dielectric { refract_index: f32 },
}

/// Set of data returned on a [Material]'s scattering
#[derive(Debug)]
pub struct ScatterRecord {
    /// The resultant ray for subsequent intersections
    pub ray: Ray,
    /// The attenuation at the point of intersection
    pub attenuation: Color,
}

impl Material {
    /// Creates a diffuse material.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Creates a metal; `fuzz` is clamped into `[0, 1]`.
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Creates a glass-like material.
    ///
    /// Fails unless `refract_index` is finite and positive.
    pub fn dielectric(refract_index: f32) -> Result<Self> {
        if !(refract_index.is_finite() && refract_index > 0.0) {
            return Err(Error::InvalidRefractiveIndex(refract_index));
        }
        Ok(Material::Dielectric { refract_index })
    }

    /// Computes reflectance using Schlick's approximation
    pub fn reflectance(cosine: f32, refract_idx: f32) -> f32 {
        let r0 = (1.0 - refract_idx) / (1.0 + refract_idx);
        let r0_squared = r0 * r0;
        r0_squared + (1.0 - r0_squared) * (1.0 - cosine).powi(5)
    }

    /// Returns a scattered ray and its attenuation based on the specific material type.
    ///
    /// Returns `None` if the material type computes a lack of scattering
    pub fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut impl Rng) -> Option<ScatterRecord> {
        match self {
            Material::Lambertian { albedo } => {
                let scatter_dir =
                    diffuse_direction(rec.normal, random::rand_vec3_on_unit_sphere(rng));

                Some(ScatterRecord {
                    ray: Ray::new(rec.point, scatter_dir),
                    attenuation: *albedo,
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(vector::unit_vector(ray.direction), rec.normal);

                let scattered = Ray::new(
                    rec.point,
                    reflected + *fuzz * random::rand_vec3_in_unit_sphere(rng),
                );

                (scattered.direction.dot(rec.normal) > 0.0).then_some(ScatterRecord {
                    ray: scattered,
                    attenuation: *albedo,
                })
            }
            Material::Dielectric { refract_index } => {
                let refract_ratio = if rec.front_face {
                    refract_index.recip()
                } else {
                    *refract_index
                };

                let normed_dir = vector::unit_vector(ray.direction);
                let cos_theta = (-normed_dir).dot(rec.normal).clamp(0.0, 1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                let no_refract = refract_ratio * sin_theta > 1.0;
                let reflect_chance = Self::reflectance(cos_theta, refract_ratio);
                let do_reflect = reflect_chance > rng.gen::<f32>();
                let direction = if no_refract || do_reflect {
                    // must reflect
                    reflect(normed_dir, rec.normal)
                } else {
                    // can refract
                    refract(normed_dir, rec.normal, refract_ratio)
                };

                Some(ScatterRecord {
                    ray: Ray::new(rec.point, direction),
                    attenuation: colors::WHITE,
                })
            }
        }
    }
}
