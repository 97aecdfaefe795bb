//! Progress spinner on stderr.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use lumen_renderer::Progress;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Poll `progress` every `interval` and redraw a one-line status until the
/// render is complete.
pub fn spawn(progress: Progress, interval: Duration) -> Result<JoinHandle<()>> {
    let bar = progress_bar(&progress)?;
    let handle = thread::Builder::new()
        .name("lumen-progress".to_string())
        .spawn(move || run(&bar, &progress, interval))?;
    Ok(handle)
}

fn progress_bar(progress: &Progress) -> Result<ProgressBar> {
    let style = ProgressStyle::with_template("{spinner} {pos} from {len}")?.tick_chars("-\\|/ ");
    let bar = ProgressBar::new(progress.total() as u64);
    bar.set_style(style);
    Ok(bar)
}

fn run(bar: &ProgressBar, progress: &Progress, interval: Duration) {
    while !progress.is_complete() {
        bar.set_position(progress.completed() as u64);
        bar.tick();
        thread::sleep(interval);
    }
    bar.set_position(progress.completed() as u64);
    bar.finish_and_clear();
}
