//! Runtime Analysis
//!
//! Per-location runtime analysis for batch estimation job logs.
//!
//! Scans a log for lines of the form
//! `[YYYY-MM-DD HH:MM:SS] Initialising estimates for: <location>` and their
//! `Completed` counterparts, then reports how long each location took,
//! shortest first. A location without both events reports `23:59:59`.
//!
//! This crate provides the core implementation for the
//! `runtime-analysis` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! runtime-analysis path/to/job.log
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
