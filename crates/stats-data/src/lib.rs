//! Data layer for the training statistics tools.
//!
//! Responsible for reading the activity CSV, computing the weekday and
//! champion statistics, shaping the two reports and running the top-level
//! analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod reader;
pub mod reports;
pub mod storage;

pub use stats_core as core;
