//! Analyse command implementation.
//!
//! The analyse command:
//! 1. Reads the log file line by line
//! 2. Matches timing lines and accumulates runs per location
//! 3. Sorts locations by runtime
//! 4. Writes the report

use crate::aggregator::load_runs;
use crate::output::write_report;
use crate::utils::error::AnalysisError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyse command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct AnalyseArgs {
    /// Log file to analyse
    pub log_file: PathBuf,
}

/// Execute the analyse command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written to `out` unless the whole log was read and parsed.
///
/// # Errors
/// * Log file missing or unreadable
/// * Malformed timestamp in a timing line
/// * Failure writing the report
pub fn execute_analyse<W: Write>(args: &AnalyseArgs, out: W) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/2: Collecting runs from {}", args.log_file.display());
    let tracker = load_runs(&args.log_file)
        .with_context(|| format!("Failed to analyse log file {}", args.log_file.display()))?;

    info!("Step 2/2: Writing report for {} locations", tracker.len());
    let report = tracker.report();

    let incomplete = report.iter().filter(|entry| !entry.run.is_complete()).count();
    debug!("{} of {} locations have no result", incomplete, report.len());

    write_report(&report, out).context("Failed to write report")?;

    info!("Analysis completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Validate analyse arguments
///
/// **Public** - can be called before execute_analyse for early validation
///
/// A directory is reported as `AnalysisError::Io`, the same category as a
/// missing file.
pub fn validate_args(args: &AnalyseArgs) -> Result<()> {
    if args.log_file.as_os_str().is_empty() {
        anyhow::bail!("Log file path cannot be empty");
    }

    if args.log_file.is_dir() {
        return Err(AnalysisError::Io {
            path: args.log_file.clone(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path is a directory"),
        }
        .into());
    }

    Ok(())
}
