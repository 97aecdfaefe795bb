//! Errors surfaced by a render run.
//!
//! The numeric core never fails. Only setup (configuration, worker pool)
//! and writing the finished image can.

use thiserror::Error;

/// Errors that can occur around a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
