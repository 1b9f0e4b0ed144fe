// Command-line configuration.

use crate::fractal::FractalKind;
use crate::geometry::Point;
use crate::logging::LoggingConfig;
use clap::Parser;
use std::path::PathBuf;

/// Cycle through self-similar fractals. SPACE: next fractal, ESC: quit.
#[derive(Debug, Parser)]
#[command(name = "fractals", version, about)]
pub struct Config {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1400)]
    pub width: usize,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 750)]
    pub height: usize,

    /// Fractal shown first.
    #[arg(long, value_enum, default_value_t = FractalKind::Square)]
    pub fractal: FractalKind,

    /// Render every fractal to PNG files in this directory and exit.
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Log filter in env_logger syntax (e.g. "debug"); defaults to RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Config {
    pub fn canvas_size(&self) -> Point {
        Point::new(self.width as f32, self.height as f32)
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig { env_filter: self.log.clone(), ..LoggingConfig::default() }
    }
}
