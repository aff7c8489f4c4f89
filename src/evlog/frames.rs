//! Untimed frame listing.
//!
//! Decodes a log as fast as it can be read and records the touching
//! contacts at every frame commit.

use std::fmt;
use std::io::{BufRead, Seek};

use super::cursor::LineCursor;
use super::error::LogError;
use crate::decoder::{Contact, EventDecoder};

/// Contacts at one frame commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    /// Milliseconds since the first commit of the listing
    pub elapsed_ms: i64,
    /// Active contacts by slot, in slot order
    pub contacts: Vec<(u32, Contact)>,
}

impl fmt::Display for FrameRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.contacts.len();
        write!(
            f,
            "+{}ms  {} {}",
            self.elapsed_ms,
            n,
            if n == 1 { "contact" } else { "contacts" }
        )?;
        for (slot, contact) in &self.contacts {
            write!(
                f,
                "  slot {} id {} ({}, {})",
                slot, contact.tracking_id, contact.x, contact.y
            )?;
        }
        Ok(())
    }
}

/// Decode the remaining lines of `cursor`, one row per frame commit.
///
/// Stops after `limit` rows when given.
pub fn collect_frames<R: BufRead + Seek>(
    cursor: &mut LineCursor<R>,
    limit: Option<usize>,
) -> Result<Vec<FrameRow>, LogError> {
    let mut decoder = EventDecoder::new();
    let mut rows = Vec::new();
    let mut first_commit = None;

    while limit.map_or(true, |max| rows.len() < max) {
        let Some(line) = cursor.read_line()? else {
            break;
        };
        let line_number = cursor.next_line_index();
        decoder
            .decode(&line)
            .map_err(|e| e.at_line(line_number))?;

        if let Some(timestamp) = decoder.consume_ready() {
            let first = *first_commit.get_or_insert(timestamp);
            let contacts = decoder
                .slots()
                .iter()
                .filter_map(|(slot, state)| state.contact().map(|c| (*slot, c)))
                .collect();
            rows.push(FrameRow {
                elapsed_ms: timestamp - first,
                contacts,
            });
        }
    }
    Ok(rows)
}
