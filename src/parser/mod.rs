//! Log line parsing.
//!
//! This module handles:
//! - Matching timing lines against the fixed pattern
//! - Classifying the kind word
//! - Parsing bracketed timestamps

pub mod timing;

// Re-export main types
pub use timing::{match_line, parse_timestamp, EventKind, TimingEvent, TimingMatch};
