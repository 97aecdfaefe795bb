//! Column-range scheduling of a render across worker threads.
//!
//! The image is split into one contiguous range of columns per worker,
//! computed up front. Each range is rendered on its own rayon task with its
//! own random generator, and every pixel belongs to exactly one range.

use crate::renderer::{color_to_rgba, render_pixel};
use crate::{Camera, Framebuffer, Progress, RenderConfig, RenderResult, Scene};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

/// A contiguous range of image columns `[start, end)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    /// Worker index, also used to derive the worker's seed
    pub index: usize,
    pub start: u32,
    pub end: u32,
}

impl ColumnRange {
    /// Number of columns in the range.
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Pixels of one rendered column range, column-major.
#[derive(Debug, Clone)]
pub struct ColumnStrip {
    pub range: ColumnRange,
    pub pixels: Vec<[u8; 4]>,
}

/// Split `width` columns between `workers`.
///
/// Every worker gets `width / workers` columns and the last one also takes
/// the remainder. With more workers than columns the leading ranges are
/// empty.
pub fn column_ranges(width: u32, workers: usize) -> Vec<ColumnRange> {
    let workers = workers.max(1);
    // More workers than u32 can count means every range but the last is empty
    let per_worker = u32::try_from(workers).map_or(0, |n| width / n);

    (0..workers)
        .map(|index| {
            let start = u32::try_from(index)
                .ok()
                .and_then(|i| per_worker.checked_mul(i))
                .unwrap_or(0)
                .min(width);
            let end = if index + 1 == workers {
                width
            } else {
                start.saturating_add(per_worker).min(width)
            };
            ColumnRange { index, start, end }
        })
        .collect()
}

/// Render every pixel of one column range.
pub fn render_columns(
    range: ColumnRange,
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    progress: &Progress,
) -> ColumnStrip {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(range.index as u64)),
        None => StdRng::from_entropy(),
    };

    debug!(
        "worker {} rendering columns {}..{}",
        range.index, range.start, range.end
    );

    let mut pixels = Vec::with_capacity(range.width() as usize * config.height as usize);
    for x in range.start..range.end {
        for y in 0..config.height {
            let color = render_pixel(camera, scene, x, y, config, &mut rng);
            pixels.push(color_to_rgba(color));
            progress.increment();
        }
    }

    ColumnStrip { range, pixels }
}

/// Render the scene on `config.workers` threads.
///
/// Blocks until every worker is done; the returned framebuffer has every
/// pixel set.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    progress: &Progress,
) -> RenderResult<Framebuffer> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .thread_name(|i| format!("lumen-worker-{}", i))
        .build()?;

    let ranges = column_ranges(config.width, config.workers);
    info!(
        "Rendering {}x{} @ {} spp, depth {}, on {} workers",
        config.width, config.height, config.samples_per_pixel, config.max_depth, config.workers
    );

    let start = Instant::now();
    let strips: Vec<ColumnStrip> = pool.install(|| {
        ranges
            .into_par_iter()
            .map(|range| render_columns(range, scene, camera, config, progress))
            .collect()
    });

    let mut framebuffer = Framebuffer::new(config.width, config.height);
    for strip in &strips {
        framebuffer.write_strip(strip);
    }

    info!("Rendered in {:?}", start.elapsed());
    Ok(framebuffer)
}
