//! Material trait for surface scattering.

use crate::hittable::HitRecord;
use lumen_math::{random_f64, random_in_unit_sphere, reflect, refract, Ray, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outgoing ray and color attenuation of a scatter event.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
///
/// Materials are shared read-only between spheres and render threads.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns the attenuation and a new outgoing ray if the path continues,
    /// or `None` if the ray is absorbed.
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
    reflectance: f64,
}

impl Lambertian {
    /// Create a new Lambertian material.
    ///
    /// - `albedo`: surface color
    /// - `reflectance`: fraction of light carried by each bounce
    pub fn new(albedo: Color, reflectance: f64) -> Self {
        Self {
            albedo,
            reflectance,
        }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let mut direction = rec.normal + random_in_unit_sphere(rng);

        // Catch degenerate scatter direction
        if direction.length_squared() < 1e-12 {
            direction = rec.normal;
        }

        Some(ScatterResult {
            attenuation: self.albedo * self.reflectance,
            scattered: Ray::new(rec.p, direction.normalize()),
        })
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction().normalize_or_zero(), rec.normal);
        let direction = reflected + self.fuzz * random_in_unit_sphere(rng);

        // Fuzz pushed the ray below the surface
        if direction.dot(rec.normal) <= 0.0 {
            return None;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, direction),
        })
    }
}

/// Dielectric (glass) material between two media.
#[derive(Debug, Clone)]
pub struct Dielectric {
    color: Color,
    /// Index of refraction on the side the normal points to
    n_outside: f64,
    /// Index of refraction inside the sphere
    n_inside: f64,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// A hollow glass shell is an outer sphere with `(1.0, 1.5)` and an inner
    /// one with `(1.5, 1.0)`.
    pub fn new(color: Color, n_outside: f64, n_inside: f64) -> Self {
        Self {
            color,
            n_outside,
            n_inside,
        }
    }

    /// Clear glass in air.
    pub fn glass(ior: f64) -> Self {
        Self::new(Color::ONE, 1.0, ior)
    }

    /// Probability that a ray with `direction` hitting a surface with outward
    /// `normal` is reflected rather than refracted. 1.0 on total internal
    /// reflection.
    pub fn reflect_probability(&self, direction: Vec3, normal: Vec3) -> f64 {
        self.refraction(direction, normal).1
    }

    fn refraction(&self, direction: Vec3, normal: Vec3) -> (Option<Vec3>, f64) {
        let unit = direction.normalize_or_zero();
        let dot = unit.dot(normal);

        // Positive dot: the ray is leaving the medium
        let (facing_normal, ratio) = if dot > 0.0 {
            (-normal, self.n_inside / self.n_outside)
        } else {
            (normal, self.n_outside / self.n_inside)
        };
        let cosine = dot.abs().min(1.0);

        match refract(unit, facing_normal, ratio) {
            Some(refracted) => (
                Some(refracted),
                schlick(cosine, self.n_outside, self.n_inside),
            ),
            None => (None, 1.0),
        }
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let (refracted, reflect_prob) = self.refraction(ray_in.direction(), rec.normal);

        let direction = match refracted {
            Some(refracted) if random_f64(rng) >= reflect_prob => refracted,
            _ => reflect(ray_in.direction(), rec.normal),
        };

        Some(ScatterResult {
            attenuation: self.color,
            scattered: Ray::new(rec.p, direction.normalize_or_zero()),
        })
    }
}

/// Schlick's approximation of Fresnel reflectance between media `n1` and `n2`.
#[inline]
pub fn schlick(cosine: f64, n1: f64, n2: f64) -> f64 {
    let r0 = ((n2 - n1) / (n2 + n1)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
