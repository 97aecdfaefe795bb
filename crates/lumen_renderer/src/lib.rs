//! Lumen renderer - CPU path tracing of sphere scenes.
//!
//! A Monte Carlo path tracer that fans out several scatter samples at each
//! hit (fewer the deeper the bounce), renders column ranges of the image on
//! a fixed pool of worker threads, and writes 8-bit gamma corrected pixels.

mod camera;
mod error;
mod framebuffer;
mod hittable;
mod material;
mod progress;
mod renderer;
mod scene;
mod scheduler;
mod sphere;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use framebuffer::Framebuffer;
pub use hittable::{HitRecord, Hittable};
pub use material::{schlick, Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use progress::Progress;
pub use renderer::{
    branch_count, color_to_rgba, linear_to_gamma, render_pixel, shade, sky_gradient,
    RenderConfig,
};
pub use scene::{Scene, NO_HIT_DISTANCE, RAY_EPSILON};
pub use scheduler::{column_ranges, render, render_columns, ColumnRange, ColumnStrip};
pub use sphere::Sphere;

/// Re-export the math types the renderer API is written in.
pub use lumen_math::{Interval, Ray, Vec3};
