//! Shared types for the training statistics tools.
//!
//! Holds the record model, the weekday calendar, the error type, CLI settings
//! and the small formatting helpers used by the progress output.

pub mod calendar;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{Result, StatsError};
