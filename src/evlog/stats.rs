//! Whole-log statistics.
//!
//! Decodes an entire log without any timing to summarise it: how many
//! frames it holds, how long the recording runs, and how many fingers were
//! down at once.

use std::io::{BufRead, Seek};

use serde::Serialize;

use super::cursor::LineCursor;
use super::error::LogError;
use super::types::{EventKind, RawEvent};
use crate::decoder::{active_contacts, EventDecoder};

/// Summary of a decoded event log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogStats {
    /// Number of lines in the log
    pub lines: usize,
    /// Number of `SYN_REPORT` frame commits
    pub commits: usize,
    /// Timestamp of the first commit (epoch ms)
    pub first_commit_ms: Option<i64>,
    /// Timestamp of the last commit (epoch ms)
    pub last_commit_ms: Option<i64>,
    /// Slots allocated by the end of the log
    pub slots_allocated: usize,
    /// Largest number of simultaneous contacts at any commit
    pub peak_contacts: usize,
    /// Records the decoder does not understand
    pub unhandled_records: usize,
}

impl LogStats {
    /// Decode every remaining line of `cursor`.
    ///
    /// # Errors
    ///
    /// Returns `LogError::MalformedRecord` with the offending line number, or
    /// `LogError::Io` if reading fails.
    pub fn collect<R: BufRead + Seek>(cursor: &mut LineCursor<R>) -> Result<Self, LogError> {
        let mut decoder = EventDecoder::new();
        let mut stats = LogStats {
            lines: cursor.total_lines(),
            ..Default::default()
        };

        while let Some(line) = cursor.read_line()? {
            let line_number = cursor.next_line_index();
            let event = RawEvent::parse_line(&line).map_err(|e| e.at_line(line_number))?;

            match decoder.apply(&event) {
                EventKind::UnhandledAbs { .. } | EventKind::Unhandled { .. } => {
                    stats.unhandled_records += 1;
                }
                _ => {}
            }

            if let Some(timestamp) = decoder.consume_ready() {
                stats.commits += 1;
                stats.first_commit_ms.get_or_insert(timestamp);
                stats.last_commit_ms = Some(timestamp);
                stats.peak_contacts = stats.peak_contacts.max(active_contacts(decoder.slots()));
            }
        }

        stats.slots_allocated = decoder.slots().len();
        Ok(stats)
    }

    /// Recorded span between first and last commit in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        match (self.first_commit_ms, self.last_commit_ms) {
            (Some(first), Some(last)) => last - first,
            _ => 0,
        }
    }

    /// Human-readable multi-line summary.
    pub fn summary(&self) -> String {
        format!(
            "Lines: {}\nFrames: {}\nDuration: {}\nSlots: {}\nPeak contacts: {}\nUnhandled records: {}",
            self.lines,
            self.commits,
            format_millis(self.duration_ms()),
            self.slots_allocated,
            self.peak_contacts,
            self.unhandled_records
        )
    }
}

/// Format milliseconds as `MM:SS.mmm`.
pub fn format_millis(millis: i64) -> String {
    let millis = millis.max(0);
    let total_secs = millis / 1000;
    format!(
        "{:02}:{:02}.{:03}",
        total_secs / 60,
        total_secs % 60,
        millis % 1000
    )
}
