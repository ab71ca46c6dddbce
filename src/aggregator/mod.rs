//! Aggregation of timing events into per-location runs.
//!
//! This module transforms matched log lines into:
//! - One `LocationRun` per location key (latest start, latest end)
//! - A report ordered by runtime

pub mod location_run;
pub mod tracker;

// Re-export main types and functions
pub use location_run::{compute_duration, no_result_runtime, LocationRun};
pub use tracker::{load_runs, ReportEntry, RunTracker};
