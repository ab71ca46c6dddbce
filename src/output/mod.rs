//! Output writers for the runtime report.

pub mod report;

// Re-export main functions
pub use report::{format_duration, format_entry, report_to_string, write_report};
