//! Scene: the list of spheres a render traces against.

use crate::{HitRecord, Hittable, Sphere};
use lumen_math::{Interval, Ray};

/// Smallest accepted hit distance, keeps bounced rays off their own surface.
pub const RAY_EPSILON: f64 = 0.01;

/// Hits at or beyond this distance count as misses.
pub const NO_HIT_DISTANCE: f64 = 1e9;

/// Unordered collection of spheres, read-only once rendering starts.
#[derive(Clone, Default)]
pub struct Scene {
    objects: Vec<Sphere>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add(&mut self, sphere: Sphere) {
        self.objects.push(sphere);
    }

    /// Builder form of [`Scene::add`].
    pub fn with(mut self, sphere: Sphere) -> Self {
        self.add(sphere);
        self
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest surface along `ray` in `[RAY_EPSILON, NO_HIT_DISTANCE)`.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.hit(ray, Interval::new(RAY_EPSILON, NO_HIT_DISTANCE))
            .filter(|rec| rec.t < NO_HIT_DISTANCE)
    }
}

impl FromIterator<Sphere> for Scene {
    fn from_iter<I: IntoIterator<Item = Sphere>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            let interval = closest.map_or(ray_t, |rec| ray_t.with_max(rec.t));
            if let Some(rec) = object.hit(ray, interval) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Material, Vec3};
    use std::sync::Arc;

    fn diffuse() -> Arc<dyn Material> {
        Arc::new(Lambertian::new(Vec3::splat(0.5), 0.3))
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.nearest_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).is_none());
    }

    #[test]
    fn test_nearest_hit_regardless_of_order() {
        let material = diffuse();
        let near = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, material.clone());
        let far = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, material);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let forward = Scene::new().with(near.clone()).with(far.clone());
        let backward: Scene = [far, near].into_iter().collect();
        assert_eq!(forward.len(), 2);

        for scene in [forward, backward] {
            let rec = scene.nearest_hit(&ray).expect("hit");
            assert!((rec.t - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_hits_inside_epsilon_are_skipped() {
        // Ray starting on the surface must not hit the same point again
        let scene = Scene::new().with(Sphere::new(Vec3::ZERO, 1.0, diffuse()));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Z);
        assert!(scene.nearest_hit(&ray).is_none());
    }

    #[test]
    fn test_hits_past_horizon_are_misses() {
        let scene = Scene::new().with(Sphere::new(
            Vec3::new(0.0, 0.0, -2.0 * NO_HIT_DISTANCE),
            1.0,
            diffuse(),
        ));
        assert!(scene.nearest_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).is_none());
    }
}
