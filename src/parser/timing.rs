//! Timing line matcher.
//!
//! Extracts `(timestamp, kind, location)` triples from raw log lines and
//! turns them into typed events.

use crate::utils::config::{
    END_KIND, MALFORMED_TIMING_PATTERN, START_KIND, TIMESTAMP_FORMAT, TIMESTAMP_LAYOUT,
    TIMING_PATTERN,
};
use crate::utils::error::{AnalysisError, TimestampError};
use chrono::NaiveDateTime;
use log::trace;
use regex::Regex;
use std::sync::OnceLock;

/// Compiled timing patterns, shared by every call to `match_line`.
static TIMING_REGEX: OnceLock<Regex> = OnceLock::new();
static MALFORMED_TIMING_REGEX: OnceLock<Regex> = OnceLock::new();
static TIMESTAMP_LAYOUT_REGEX: OnceLock<Regex> = OnceLock::new();

fn timing_regex() -> &'static Regex {
    TIMING_REGEX.get_or_init(|| {
        Regex::new(TIMING_PATTERN).expect("built-in timing pattern should compile")
    })
}

fn malformed_timing_regex() -> &'static Regex {
    MALFORMED_TIMING_REGEX.get_or_init(|| {
        Regex::new(MALFORMED_TIMING_PATTERN).expect("built-in timing pattern should compile")
    })
}

fn timestamp_layout_regex() -> &'static Regex {
    TIMESTAMP_LAYOUT_REGEX.get_or_init(|| {
        Regex::new(TIMESTAMP_LAYOUT).expect("built-in timestamp layout should compile")
    })
}

/// Kind of a timing event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `Initialising` - processing of a location began
    Start,
    /// `Completed` - processing of a location finished
    End,
    /// Any other word; matched but carries no meaning for the tracker
    Other,
}

impl EventKind {
    /// Classify the kind word captured from a line
    pub fn from_word(word: &str) -> Self {
        match word {
            START_KIND => EventKind::Start,
            END_KIND => EventKind::End,
            _ => EventKind::Other,
        }
    }

    /// Whether this kind starts or ends a run
    pub fn is_tracked(self) -> bool {
        !matches!(self, EventKind::Other)
    }
}

/// Raw captures of one pattern match, borrowed from the line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingMatch<'a> {
    /// Text between the square brackets
    pub timestamp_text: &'a str,

    /// The word following the timestamp
    pub kind_text: &'a str,

    /// Rest of the line after the marker, trailing whitespace stripped
    pub location_key: &'a str,
}

impl<'a> TimingMatch<'a> {
    pub fn kind(&self) -> EventKind {
        EventKind::from_word(self.kind_text)
    }

    /// Parse the captured timestamp and produce an owned event
    ///
    /// **Public** - used by the run tracker
    ///
    /// # Arguments
    /// * `line_number` - 1-based line the match came from, used in errors
    ///
    /// # Errors
    /// * `AnalysisError::Timestamp` - bracketed text is not `YYYY-MM-DD HH:MM:SS`
    pub fn to_event(&self, line_number: usize) -> Result<TimingEvent, AnalysisError> {
        let timestamp =
            parse_timestamp(self.timestamp_text).map_err(|source| AnalysisError::Timestamp {
                line: line_number,
                text: self.timestamp_text.to_string(),
                source,
            })?;

        Ok(TimingEvent {
            timestamp,
            kind: self.kind(),
            location_key: self.location_key.to_string(),
        })
    }
}

/// A matched line with its timestamp parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingEvent {
    pub timestamp: NaiveDateTime,
    pub kind: EventKind,
    pub location_key: String,
}

/// Find every timing match in a single line
///
/// **Public** - main entry point of the matcher
///
/// Matches are returned left to right. A line without a match yields an
/// empty vector. The kind word is not filtered here.
///
/// If the strict pattern finds nothing but the line still has the shape
/// `[...] Initialising|Completed estimates for: ...`, those captures are
/// returned so the timestamp fails to parse downstream rather than
/// vanishing. Other bracketed tags (`[INFO] Saving ...`) stay unmatched.
pub fn match_line(line: &str) -> Vec<TimingMatch<'_>> {
    let matches = captures(timing_regex(), line);
    if !matches.is_empty() {
        return matches;
    }

    let mut garbled = captures(malformed_timing_regex(), line);
    garbled.retain(|m| m.kind().is_tracked());
    garbled
}

fn captures<'a>(regex: &Regex, line: &'a str) -> Vec<TimingMatch<'a>> {
    regex
        .captures_iter(line)
        .filter_map(|caps| {
            let timestamp_text = caps.get(1)?.as_str();
            let kind_text = caps.get(2)?.as_str();
            let location_key = caps.get(3)?.as_str().trim_end();

            trace!("Matched '{}' {} '{}'", timestamp_text, kind_text, location_key);

            Some(TimingMatch {
                timestamp_text,
                kind_text,
                location_key,
            })
        })
        .collect()
}

/// Parse a bracketed timestamp
///
/// The text must be `YYYY-MM-DD HH:MM:SS` with no leading blanks and at
/// least one blank between date and time.
///
/// # Errors
/// * `TimestampError::Layout` - text does not have that layout
/// * `TimestampError::Invalid` - out-of-range field (month 13, hour 99, ...)
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, TimestampError> {
    if !timestamp_layout_regex().is_match(text) {
        return Err(TimestampError::Layout);
    }

    Ok(NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)?)
}
