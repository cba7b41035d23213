use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the training statistics pipeline.
#[derive(Error, Debug)]
pub enum StatsError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report file could not be written.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV input was malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV header lacks a column the loader needs.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A JSON document could not be serialized.
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// A timestamp string did not match `YYYY-MM-DD HH:MM`.
    #[error("Invalid timestamp format: {0}")]
    TimestampParse(String),

    /// A statistic that needs at least one record received none.
    #[error("Empty dataset: cannot compute {0}")]
    EmptyDataset(&'static str),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the stats crates.
pub type Result<T> = std::result::Result<T, StatsError>;
