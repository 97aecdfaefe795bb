//! Random sampling helpers.
//!
//! Every function takes the generator explicitly so each render worker can
//! own an independent one.

use crate::Vec3;
use rand::{Rng, RngCore};

/// Uniform random number in [0, 1).
#[inline]
pub fn random_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Uniform random point strictly inside the unit sphere.
///
/// Rejection sampling: draw from the cube [-1, 1]^3 until the point lands
/// inside the sphere.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            random_f64(rng) * 2.0 - 1.0,
            random_f64(rng) * 2.0 - 1.0,
            random_f64(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_f64_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = random_f64(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_random_in_unit_sphere_is_inside() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length() < 1.0);
        }
    }

    #[test]
    fn test_random_in_unit_sphere_is_centered() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = 20_000;
        let mean = (0..n)
            .map(|_| random_in_unit_sphere(&mut rng))
            .fold(Vec3::ZERO, |acc, p| acc + p)
            / n as f64;
        assert!(mean.length() < 0.05, "mean {:?} should be near the origin", mean);
    }
}
