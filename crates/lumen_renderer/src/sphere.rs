//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use lumen_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// A sphere primitive.
///
/// The material is shared: several spheres may point at the same instance.
#[derive(Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere. Non-positive radii are raised to `f64::EPSILON`.
    pub fn new(center: Vec3, radius: f64, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(f64::EPSILON),
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center) / self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Smaller root first, then the far side of the sphere
        let mut root = (-b - sqrtd) / (2.0 * a);
        if !ray_t.contains(root) {
            root = (-b + sqrtd) / (2.0 * a);
            if !ray_t.contains(root) {
                return None;
            }
        }

        let p = ray.at(root);
        Some(HitRecord {
            p,
            normal: self.normal_at(p),
            t: root,
            material: self.material.as_ref(),
        })
    }
}
