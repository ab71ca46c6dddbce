//! Runtime Analysis CLI
//!
//! Reports how long each geographic location took to process in a batch
//! estimation log. 23:59:59 denotes a location with no result.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::io;
use std::path::PathBuf;

use runtime_analysis::commands::{execute_analyse, validate_args, AnalyseArgs};
use runtime_analysis::utils::config::DEFAULT_LOG_FILTER;

/// Per-location runtime report for estimation job logs
#[derive(Parser, Debug)]
#[command(name = "runtime-analysis")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Full path to log file
    log_file: PathBuf,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr only; stdout carries the report)
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let args = AnalyseArgs {
        log_file: cli.log_file,
    };

    validate_args(&args)?;

    let stdout = io::stdout();
    execute_analyse(&args, stdout.lock())?;

    Ok(())
}
