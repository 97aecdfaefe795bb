//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a bounded depth budget
//! - Scatter fan-out at each hit, shrinking with depth
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction

use crate::{Camera, Color, RenderError, RenderResult, Scene};
use lumen_math::Ray;
use log::warn;
use rand::RngCore;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Jittered samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Extra scatter samples taken at a first-bounce hit
    pub branch_samples: u32,
    /// Number of worker threads, each rendering one column range
    pub workers: usize,
    /// Seed for reproducible images; fresh entropy per render when unset
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            samples_per_pixel: 10,
            max_depth: 50,
            branch_samples: 3,
            workers: 8,
            seed: None,
        }
    }
}

impl RenderConfig {
    /// Check the configuration can drive a render.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples per pixel must be at least 1".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(RenderError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        if u32::try_from(self.workers).is_err() {
            return Err(RenderError::InvalidConfig(format!(
                "worker count {} is out of range",
                self.workers
            )));
        }
        Ok(())
    }

    /// Total number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Number of scatter samples taken at a hit with `depth` bounces left.
///
/// `1 + (branch_samples >> (consumed / 2))` where `consumed` is how many
/// bounces of `max_depth` are already spent.
#[inline]
pub fn branch_count(branch_samples: u32, max_depth: u32, depth: u32) -> u32 {
    let consumed = max_depth.saturating_sub(depth);
    branch_samples
        .checked_shr(consumed / 2)
        .unwrap_or(0)
        .saturating_add(1)
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It finds the nearest hit, lets
/// the material scatter the ray several times, recurses on every surviving
/// ray and averages the results.
pub fn shade(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    // Out of bounces, no more light gathered
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = scene.nearest_hit(ray) else {
        return sky_gradient(ray);
    };

    let branches = branch_count(config.branch_samples, config.max_depth, depth);
    let mut color = Color::ZERO;
    for _ in 0..branches {
        if let Some(result) = rec.material.scatter(ray, &rec, rng) {
            color += result.attenuation * shade(&result.scattered, scene, depth - 1, config, rng);
        }
    }

    color / branches as f64
}

/// Background for rays that leave the scene: white at the bottom, sky blue
/// straight up.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize_or_zero();
    let a = (unit_direction.y + 1.0) / 2.0;
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.5, 0.8);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
fn clamp_01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Convert a linear color to opaque 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(linear_to_gamma(color.x))) as u8;
    let g = (255.0 * clamp_01(linear_to_gamma(color.y))) as u8;
    let b = (255.0 * clamp_01(linear_to_gamma(color.z))) as u8;
    [r, g, b, 255]
}

/// Render a single pixel with multi-sampling.
///
/// Returns the linear average of the samples.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;
    let mut samples = 0u32;

    for _ in 0..config.samples_per_pixel {
        let ray = camera.get_ray(x, y, config.width, config.height, rng);
        let radiance = shade(&ray, scene, config.max_depth, config, rng);
        if radiance.is_finite() {
            pixel_color += radiance;
            samples += 1;
        } else {
            warn!("radiance is not finite at pixel ({}, {}): {:?}", x, y, radiance);
        }
    }

    if samples == 0 {
        return Color::ZERO;
    }
    pixel_color / samples as f64
}
