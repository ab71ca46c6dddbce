//! Text report writer.
//!
//! Renders each location as `"{location}, {runtime}"`, one per line.

use crate::aggregator::ReportEntry;
use chrono::TimeDelta;
use log::debug;
use std::io::{self, Write};

const SECONDS_PER_DAY: i64 = 86_400;

/// Render a duration as `H:MM:SS`
///
/// **Public** - used for every runtime in the report
///
/// Durations of a day or more get a `"N day(s), "` prefix. Negative
/// durations are floored to whole days with a positive time of day, so
/// minus five minutes renders as `-1 day, 23:55:00`.
///
/// # Example
/// ```
/// use chrono::TimeDelta;
/// use runtime_analysis::output::format_duration;
///
/// assert_eq!(format_duration(TimeDelta::minutes(5)), "0:05:00");
/// ```
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let days = total.div_euclid(SECONDS_PER_DAY);
    let rest = total.rem_euclid(SECONDS_PER_DAY);

    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);

    if days == 0 {
        clock
    } else {
        let unit = if days.abs() == 1 { "day" } else { "days" };
        format!("{} {}, {}", days, unit, clock)
    }
}

/// Render one report row
pub fn format_entry(entry: &ReportEntry) -> String {
    format!("{}, {}", entry.location_key, format_duration(entry.runtime()))
}

/// Write the full report, one row per line
///
/// # Errors
/// Any I/O error from the writer (e.g. a closed pipe)
pub fn write_report<W: Write>(entries: &[ReportEntry], mut writer: W) -> io::Result<()> {
    debug!("Writing {} report rows", entries.len());

    for entry in entries {
        writeln!(writer, "{}", format_entry(entry))?;
    }

    writer.flush()
}

/// Render the full report to a string (for testing or in-memory use)
pub fn report_to_string(entries: &[ReportEntry]) -> String {
    entries
        .iter()
        .map(|entry| format_entry(entry) + "\n")
        .collect()
}
