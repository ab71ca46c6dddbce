//! Configuration and constants for the analyser.

/// Pattern for a timing line: bracketed timestamp, kind word, marker, location key
pub const TIMING_PATTERN: &str = r"\[([\d\- :]*)\] (\w+) estimates for: (.+)";

/// Same line shape with any bracketed text. Only consulted when
/// `TIMING_PATTERN` finds nothing; captures whose kind is a start or end
/// word are kept so a garbled timestamp is reported instead of skipped.
pub const MALFORMED_TIMING_PATTERN: &str = r"\[([^\]]*)\] (\w+) estimates for: (.+)";

/// chrono format of the bracketed timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layout a timestamp must have before chrono sees it. chrono lets the
/// format's space match nothing and skips blanks before numeric fields.
pub const TIMESTAMP_LAYOUT: &str = r"^\d{4}-\d{1,2}-\d{1,2}\s+\d{1,2}:\d{1,2}:\d{1,2}$";

// Kind words that carry meaning for the run tracker.
// Anything else is matched but ignored.
pub const START_KIND: &str = "Initialising";
pub const END_KIND: &str = "Completed";

/// Runtime reported for a location without both a start and an end (23:59:59)
pub const NO_RESULT_SECONDS: i64 = 23 * 3600 + 59 * 60 + 59;

/// Default env_logger filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
