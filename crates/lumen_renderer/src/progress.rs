//! Shared completed-pixel counter.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Count of finished pixels, written by every worker and polled by
/// progress reporters. Cloning shares the same counter.
#[derive(Debug, Clone)]
pub struct Progress {
    completed: Arc<AtomicUsize>,
    total: usize,
}

impl Progress {
    /// Create a counter for a render of `total` pixels.
    pub fn new(total: usize) -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total,
        }
    }

    /// Record one finished pixel.
    #[inline]
    pub fn increment(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Pixels finished so far.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.completed() >= self.total
    }
}
