//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod analyse;

// Re-export main command functions
pub use analyse::{execute_analyse, validate_args, AnalyseArgs};
