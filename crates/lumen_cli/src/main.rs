use anyhow::{Context, Result};
use clap::Parser;
use lumen_renderer::{render, Camera, Progress};
use std::time::{Duration, Instant};

mod cli;
mod scene;
mod spinner;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let config = args.render_config();
    config.validate().context("Invalid render settings")?;

    let world = scene::demo_scene();
    let camera = Camera::for_resolution(config.width, config.height);
    log::info!("Scene has {} spheres", world.len());

    let progress = Progress::new(config.pixel_count());
    let spinner = if args.quiet {
        None
    } else {
        Some(
            spinner::spawn(progress.clone(), Duration::from_millis(500))
                .context("Failed to start progress spinner")?,
        )
    };

    log::info!("Started");
    let start = Instant::now();
    let framebuffer = render(&world, &camera, &config, &progress).context("Render failed")?;

    if let Some(handle) = spinner {
        if handle.join().is_err() {
            log::warn!("Progress spinner panicked");
        }
    }
    log::info!("Ended in {:?}", start.elapsed());

    framebuffer
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
