//! Frame-to-frame slot diffing.
//!
//! Each rendered frame compares the decoder's slot table with the snapshot
//! taken at the previous rendered frame and turns the difference into trail
//! directives for the renderer. Coordinates stay in device units; scaling to
//! the drawing surface is the renderer's job.

use tracing::warn;

use crate::decoder::{Contact, SlotStatus, SlotTable};

/// A position in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl From<Contact> for Point {
    fn from(contact: Contact) -> Self {
        Point {
            x: contact.x,
            y: contact.y,
        }
    }
}

/// Drawing instruction emitted by the scheduler for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailDirective {
    /// A fading segment (or dot, when `start` is `None`) stamped at `timestamp`.
    AddTrail {
        start: Option<Point>,
        end: Point,
        timestamp: i64,
    },
    /// Replace the persistent marker for `slot`.
    AddPersistentTrail {
        start: Option<Point>,
        end: Point,
        slot: u32,
    },
    /// Drop the persistent marker for `slot` (all slots when `None`); with a
    /// timestamp the marker lives on as a fading trail.
    FadePersistentTrail {
        slot: Option<u32>,
        timestamp: Option<i64>,
    },
}

/// The contact in `slot_id`, or `None` if the slot is absent, empty, or bogus.
///
/// A bogus slot (tracking id without both coordinates) is logged.
pub fn active_slot(slots: &SlotTable, slot_id: u32) -> Option<Contact> {
    match slots.get(&slot_id)?.status() {
        SlotStatus::Active(contact) => Some(contact),
        SlotStatus::Empty => None,
        SlotStatus::Bogus { tracking_id } => {
            warn!(
                slot = slot_id,
                tracking_id = tracking_id,
                "Bogus slot: tracking id without coordinates"
            );
            None
        }
    }
}

/// Diff `current` against `previous`, appending directives to `out`.
///
/// Slot tables only grow, so walking the current table's keys covers every
/// slot the previous snapshot knew about.
pub fn diff_slots(
    current: &SlotTable,
    previous: &SlotTable,
    timestamp: i64,
    out: &mut Vec<TrailDirective>,
) {
    debug_assert!(previous.len() <= current.len());

    for &slot_id in current.keys() {
        let now = active_slot(current, slot_id);
        let before = active_slot(previous, slot_id);

        match (now, before) {
            (None, None) => {}
            (None, Some(_)) => out.push(TrailDirective::FadePersistentTrail {
                slot: Some(slot_id),
                timestamp: Some(timestamp),
            }),
            (Some(contact), before) => {
                match before {
                    Some(prev) if prev.tracking_id == contact.tracking_id => {
                        out.push(TrailDirective::AddTrail {
                            start: Some(prev.into()),
                            end: contact.into(),
                            timestamp,
                        });
                    }
                    Some(_) => out.push(TrailDirective::FadePersistentTrail {
                        slot: Some(slot_id),
                        timestamp: Some(timestamp),
                    }),
                    None => {}
                }
                out.push(TrailDirective::AddPersistentTrail {
                    start: None,
                    end: contact.into(),
                    slot: slot_id,
                });
            }
        }
    }
}
