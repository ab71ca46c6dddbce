//! Run tracker: keyed accumulation of timing events.
//!
//! Events are folded into one `LocationRun` per location key in file
//! order. The report is produced afterwards by a stable sort on runtime,
//! so locations with equal runtimes keep the order they were first seen.

use super::location_run::LocationRun;
use crate::parser::{match_line, TimingEvent};
use crate::utils::error::AnalysisError;
use chrono::TimeDelta;
use log::{debug, info};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// All runs seen in one log, keyed by location
#[derive(Debug, Clone, Default)]
pub struct RunTracker {
    /// Runs in first-seen order
    runs: Vec<(String, LocationRun)>,

    /// Location key -> position in `runs`
    index: HashMap<String, usize>,
}

/// One row of the final report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub location_key: String,
    pub run: LocationRun,
}

impl ReportEntry {
    /// Runtime used for ordering and display
    pub fn runtime(&self) -> TimeDelta {
        self.run.runtime()
    }
}

impl RunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct locations tracked
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Look up the run for a location key
    pub fn get(&self, location_key: &str) -> Option<&LocationRun> {
        self.index.get(location_key).map(|&i| &self.runs[i].1)
    }

    /// Fold a single event into the collection
    ///
    /// **Public** - core accumulation step
    ///
    /// A location is created only by a start or end event. Events of any
    /// other kind update nothing, not even an existing location.
    pub fn apply_event(&mut self, event: &TimingEvent) {
        if !event.kind.is_tracked() {
            debug!("Ignoring '{:?}' event for {}", event.kind, event.location_key);
            return;
        }

        let position = match self.index.get(&event.location_key) {
            Some(&i) => i,
            None => {
                debug!("New location: {}", event.location_key);
                self.runs.push((event.location_key.clone(), LocationRun::new()));
                self.index.insert(event.location_key.clone(), self.runs.len() - 1);
                self.runs.len() - 1
            }
        };

        let run = &mut self.runs[position].1;
        *run = run.apply(event);

        debug!(
            "{:?} {} at {} (runtime now {})",
            event.kind,
            event.location_key,
            event.timestamp,
            run.runtime()
        );
    }

    /// Match one line and apply every event it carries
    ///
    /// **Public** - used when streaming a log
    ///
    /// # Arguments
    /// * `line_number` - 1-based line number, reported on parse failure
    /// * `line` - raw line text
    ///
    /// # Returns
    /// Number of pattern matches on the line
    ///
    /// # Errors
    /// * `AnalysisError::Timestamp` - a match carried an unparseable timestamp
    pub fn ingest_line(&mut self, line_number: usize, line: &str) -> Result<usize, AnalysisError> {
        let matches = match_line(line);

        for timing in &matches {
            let event = timing.to_event(line_number)?;
            self.apply_event(&event);
        }

        Ok(matches.len())
    }

    /// Consume a reader line by line
    ///
    /// # Arguments
    /// * `reader` - buffered log source
    /// * `source` - path reported if reading fails
    ///
    /// # Errors
    /// * `AnalysisError::Io` - a line could not be read
    /// * `AnalysisError::Timestamp` - a match carried an unparseable timestamp
    pub fn ingest_reader<R: BufRead>(
        &mut self,
        reader: R,
        source: &Path,
    ) -> Result<(), AnalysisError> {
        let mut total_lines = 0;
        let mut total_matches = 0;

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source_err| AnalysisError::Io {
                path: source.to_path_buf(),
                source: source_err,
            })?;

            total_matches += self.ingest_line(i + 1, &line)?;
            total_lines += 1;
        }

        info!(
            "Scanned {} lines, {} timing matches, {} locations",
            total_lines,
            total_matches,
            self.len()
        );

        Ok(())
    }

    /// Build the report: one entry per location, ascending by runtime
    ///
    /// **Public** - final step of the tracker
    ///
    /// Incomplete runs sort as 23:59:59. Ties keep first-seen order.
    pub fn report(&self) -> Vec<ReportEntry> {
        let mut entries: Vec<ReportEntry> = self
            .runs
            .iter()
            .map(|(key, run)| ReportEntry {
                location_key: key.clone(),
                run: *run,
            })
            .collect();

        // sort_by_key is stable
        entries.sort_by_key(ReportEntry::runtime);
        entries
    }
}

/// Open a log file and accumulate every run in it
///
/// **Public** - main entry point for file input
///
/// # Errors
/// * `AnalysisError::Io` - file missing or unreadable
/// * `AnalysisError::Timestamp` - malformed timestamp in a matched line
pub fn load_runs(log_file: impl AsRef<Path>) -> Result<RunTracker, AnalysisError> {
    let log_file = log_file.as_ref();

    info!("Reading log file: {}", log_file.display());

    let file = File::open(log_file).map_err(|source| AnalysisError::Io {
        path: log_file.to_path_buf(),
        source,
    })?;

    let mut tracker = RunTracker::new();
    tracker.ingest_reader(BufReader::new(file), log_file)?;

    Ok(tracker)
}
