use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::RenderConfig;
use std::path::PathBuf;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Monte Carlo path tracer for sphere scenes")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Anti-aliasing samples per pixel
    #[arg(long, short = 's', default_value_t = 10)]
    pub samples: u32,

    /// Maximum bounce depth
    #[arg(long, short = 'd', default_value_t = 50)]
    pub depth: u32,

    /// Extra scatter samples at the first bounce
    #[arg(long, default_value_t = 3)]
    pub branch_samples: u32,

    /// Worker threads, one column range each
    #[arg(long, short = 'j', default_value_t = 8)]
    pub workers: usize,

    /// Seed for a reproducible image
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output PNG path
    #[arg(short, long, default_value = "image.png")]
    pub output: PathBuf,

    /// Logging level, RUST_LOG takes precedence
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Do not show the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            samples_per_pixel: self.samples,
            max_depth: self.depth,
            branch_samples: self.branch_samples,
            workers: self.workers,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_render_config() {
        let args = Args::parse_from(["lumen"]);
        assert_eq!(args.render_config(), RenderConfig::default());
        assert_eq!(args.output, PathBuf::from("image.png"));
        assert!(!args.quiet);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "lumen", "--width", "64", "--height", "48", "-s", "2", "-d", "5", "-j", "3",
            "--seed", "9", "-o", "out.png", "--quiet",
        ]);
        let config = args.render_config();
        assert_eq!((config.width, config.height), (64, 48));
        assert_eq!(config.samples_per_pixel, 2);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.workers, 3);
        assert_eq!(config.seed, Some(9));
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert!(args.quiet);
    }

    #[test]
    fn test_log_level_conversion() {
        let args = Args::parse_from(["lumen", "--log-level", "debug"]);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }
}
