//! Lumen math types.
//!
//! Double precision vectors (glam's `DVec3`), rays, parameter intervals and
//! the small set of vector helpers the path tracer needs on top of glam.

pub use glam::DVec3;

/// 3D vector used for points, directions and RGB colors.
pub type Vec3 = DVec3;

mod interval;
mod random;
mod ray;
mod vector;

pub use interval::Interval;
pub use random::{random_f64, random_in_unit_sphere};
pub use ray::Ray;
pub use vector::{reflect, refract};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.length_squared(), 14.0);
    }

    #[test]
    fn test_cross_anticommutative() {
        let a = Vec3::new(0.3, -1.2, 2.5);
        let b = Vec3::new(-4.0, 0.5, 1.5);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_normalized_self_dot_is_one() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-0.001, 0.002, 0.0005),
            Vec3::new(1e6, -2e6, 3e6),
        ] {
            let n = v.normalize();
            assert!((n.dot(n) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalize_zero_is_guarded() {
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
    }
}
