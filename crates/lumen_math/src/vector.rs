//! Reflection and refraction of directions about a surface normal.

use crate::Vec3;

/// Reflect a vector about a normal: `v - 2(v·n)n`.
///
/// `n` is expected to be unit length; the result then has the length of `v`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a direction through a surface with Snell's law.
///
/// `n` must be unit length and face against `v`, `ratio` is the index of the
/// medium being left divided by the index of the medium being entered.
/// Returns `None` on total internal reflection.
pub fn refract(v: Vec3, n: Vec3, ratio: f64) -> Option<Vec3> {
    let unit = v.normalize_or_zero();
    let dot = unit.dot(n);
    let discriminant = 1.0 - ratio * ratio * (1.0 - dot * dot);
    if discriminant > 0.0 {
        Some(ratio * (unit - n * dot) - n * discriminant.sqrt())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_preserves_length() {
        let n = Vec3::new(1.0, 2.0, -0.5).normalize();
        for v in [
            Vec3::new(3.0, -1.0, 2.0),
            Vec3::new(0.0, -5.0, 0.0),
            Vec3::new(-0.2, 0.1, 7.0),
        ] {
            assert!((reflect(v, n).length() - v.length()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reflect_mirrors_normal_component() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_head_on_passes_straight() {
        let out = refract(Vec3::new(0.0, 0.0, -3.0), Vec3::Z, 1.0 / 1.5)
            .expect("head-on ray always refracts");
        assert!(out.abs_diff_eq(Vec3::NEG_Z, 1e-12));
    }

    #[test]
    fn test_refract_bends_toward_normal_entering_denser_medium() {
        let incoming = Vec3::new(1.0, 0.0, -1.0).normalize();
        let out = refract(incoming, Vec3::Z, 1.0 / 1.5).expect("refracts");

        // Snell: sin(theta_t) = sin(theta_i) / 1.5
        let sin_i = incoming.cross(Vec3::Z).length();
        let sin_t = out.normalize().cross(Vec3::Z).length();
        assert!((sin_t - sin_i / 1.5).abs() < 1e-12);
        assert!((out.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // Leaving glass at a grazing angle
        let incoming = Vec3::new(1.0, 0.0, -0.1);
        assert!(refract(incoming, Vec3::Z, 1.5).is_none());
    }
}
