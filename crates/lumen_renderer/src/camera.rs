//! Camera for ray generation.

use lumen_math::{random_f64, Ray, Vec3};
use rand::RngCore;

/// Pinhole camera described by a view plane.
///
/// Rays leave `origin` through `direction + u * offset_x + v * offset_y`
/// for view-plane coordinates `(u, v)` in roughly [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    direction: Vec3,
    offset_x: Vec3,
    offset_y: Vec3,
}

impl Camera {
    /// Create a camera from its four defining vectors.
    pub fn new(origin: Vec3, direction: Vec3, offset_x: Vec3, offset_y: Vec3) -> Self {
        Self {
            origin,
            direction,
            offset_x,
            offset_y,
        }
    }

    /// The default view: from (0, 0, 1) looking down -Z, a view plane two
    /// units wide with the vertical extent matching the image aspect.
    pub fn for_resolution(width: u32, height: u32) -> Self {
        let offset_x = Vec3::new(2.0, 0.0, 0.0);
        let offset_y = Vec3::Y * (offset_x.length() * height as f64 / width.max(1) as f64);
        Self::new(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -2.0),
            offset_x,
            offset_y,
        )
    }

    /// Build a camera at `look_from` facing `look_at`.
    ///
    /// - `vup`: world up hint, must not be parallel to the view direction
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect`: image width over height
    pub fn look_at(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f64, aspect: f64) -> Self {
        let w = (look_at - look_from).normalize_or_zero();
        let u = w.cross(vup).normalize_or_zero();
        let v = u.cross(w);

        let half_height = (vfov.to_radians() / 2.0).tan();
        Self::new(look_from, w, u * half_height * aspect, v * half_height)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Ray through view-plane coordinates `(u, v)`, direction normalized.
    pub fn ray_on(&self, u: f64, v: f64) -> Ray {
        let direction = self.direction + self.offset_x * u + self.offset_y * v;
        Ray::new(self.origin, direction.normalize_or_zero())
    }

    /// Generate a ray for pixel (x, y) with a random offset inside the pixel.
    pub fn get_ray(&self, x: u32, y: u32, width: u32, height: u32, rng: &mut dyn RngCore) -> Ray {
        let px = x as f64 + random_f64(rng);
        let py = y as f64 + random_f64(rng);
        let (u, v) = view_coords(px, py, width, height);
        self.ray_on(u, v)
    }
}

/// Map an image position to view-plane coordinates.
///
/// Both axes land in [-1, 1]; `v` is flipped because image rows grow downward.
pub fn view_coords(px: f64, py: f64, width: u32, height: u32) -> (f64, f64) {
    let half_w = width as f64 / 2.0;
    let half_h = height as f64 / 2.0;
    ((px - half_w) / half_w, -(py - half_h) / half_h)
}
