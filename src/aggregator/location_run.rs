//! Per-location run record.
//!
//! A `LocationRun` holds the latest start and end seen for one location.
//! The duration is never stored independently: it is recomputed from the
//! two timestamps every time one of them changes.

use crate::parser::{EventKind, TimingEvent};
use crate::utils::config::NO_RESULT_SECONDS;
use chrono::{NaiveDateTime, TimeDelta};
use log::warn;

/// Runtime reported for a location that never completed (23:59:59)
pub fn no_result_runtime() -> TimeDelta {
    TimeDelta::seconds(NO_RESULT_SECONDS)
}

/// Start, end and derived duration of one location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocationRun {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    duration: Option<TimeDelta>,
}

impl LocationRun {
    /// Create an empty run (no start, no end, no-result runtime)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    /// `end - start` once both are known
    pub fn duration(&self) -> Option<TimeDelta> {
        self.duration
    }

    /// Duration, or the 23:59:59 no-result value when incomplete
    pub fn runtime(&self) -> TimeDelta {
        self.duration.unwrap_or_else(no_result_runtime)
    }

    pub fn is_complete(&self) -> bool {
        self.duration.is_some()
    }

    /// Return a copy with `start` replaced
    pub fn with_start(self, start: NaiveDateTime) -> Self {
        Self::from_parts(Some(start), self.end)
    }

    /// Return a copy with `end` replaced
    pub fn with_end(self, end: NaiveDateTime) -> Self {
        Self::from_parts(self.start, Some(end))
    }

    /// Apply one event and return the updated run
    ///
    /// **Public** - the only way the tracker mutates a run
    ///
    /// Last write wins per field. Events of kind `Other` leave the run
    /// untouched.
    pub fn apply(self, event: &TimingEvent) -> Self {
        match event.kind {
            EventKind::Start => self.with_start(event.timestamp),
            EventKind::End => self.with_end(event.timestamp),
            EventKind::Other => self,
        }
    }

    fn from_parts(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self {
            start,
            end,
            duration: compute_duration(start, end),
        }
    }
}

/// Duration as a pure function of the two optional timestamps
///
/// An end before the start gives a negative duration. It is reported as-is.
pub fn compute_duration(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Option<TimeDelta> {
    let (start, end) = (start?, end?);
    let duration = end - start;

    if duration < TimeDelta::zero() {
        warn!("End {} precedes start {}; runtime is negative", end, start);
    }

    Some(duration)
}
