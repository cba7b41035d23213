use clap::Parser;
use std::path::PathBuf;

use crate::error::{Result, StatsError};

/// Default activity log read when no `--input` is given.
pub const DEFAULT_INPUT: &str = "actividad_2.csv";

/// Default directory the two reports are written into.
pub const DEFAULT_OUTPUT_DIR: &str = "salida";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Weekday and champion statistics over a training-session log
#[derive(Parser, Debug, Clone)]
#[command(
    name = "training-stats",
    about = "Weekday and champion statistics over a training-session log",
    version
)]
pub struct Settings {
    /// CSV file with `timestamp` and `campeon` columns
    #[arg(long, env = "TRAINING_STATS_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory the reports are written into (created if absent)
    #[arg(long, env = "TRAINING_STATS_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments, apply `--debug` and validate.
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] over an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::try_parse_from(args).map_err(|e| match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => e.exit(),
            _ => StatsError::Config(e.to_string()),
        })?;

        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Reject paths that cannot name a file or directory.
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(StatsError::Config("input path is empty".to_string()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(StatsError::Config("output dir is empty".to_string()));
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
