use clap::{Parser, ValueEnum};
use log::LevelFilter;

use halo_renderer::RenderSettings;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
///
/// `-h` is taken by `--height`, so help is only available as `--help`.
#[derive(Debug, Parser)]
#[command(name = "halo")]
#[command(about = "Offline Monte Carlo path tracer for sphere scenes")]
#[command(version, disable_help_flag = true)]
pub struct Args {
    /// Image width in pixels
    #[arg(short = 'w', long, default_value_t = 256)]
    pub width: u32,

    /// Image height in pixels
    #[arg(short = 'h', long, default_value_t = 256)]
    pub height: u32,

    /// Total samples per pixel, split across threads
    #[arg(short = 's', long, default_value_t = 16)]
    pub samples: u32,

    /// Maximum path segments per sample
    #[arg(short = 'b', long, default_value_t = 5)]
    pub bounces: u32,

    /// Number of worker threads
    #[arg(short = 't', long, default_value_t = 4)]
    pub threads: u32,

    /// Scene description (JSON)
    #[arg(short = 'i', long)]
    pub input: String,

    /// Output image path
    #[arg(short = 'o', long, default_value = "render.png")]
    pub out: String,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Hide the per-thread progress bars
    #[arg(long)]
    pub no_progress: bool,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    pub fn to_settings(&self) -> RenderSettings {
        RenderSettings::default()
            .with_resolution(self.width, self.height)
            .with_quality(self.samples, self.bounces)
            .with_threads(self.threads)
    }
}
