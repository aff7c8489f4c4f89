//! Multi-touch protocol (type B) decoder.
//!
//! Consumes event log lines one at a time and maintains the table of touch
//! slots. A `SYN_REPORT` marks the slot table as a complete frame; the frame
//! timestamp is handed out once through [`EventDecoder::consume_ready`].
//!
//! # Example
//!
//! ```
//! use mtreplay::decoder::EventDecoder;
//!
//! let mut decoder = EventDecoder::new();
//! decoder.decode("2024/01/01 00:00:00.000000 3 39 5")?;
//! decoder.decode("2024/01/01 00:00:00.000000 3 35 64")?;
//! decoder.decode("2024/01/01 00:00:00.000000 3 36 c8")?;
//! decoder.decode("2024/01/01 00:00:00.000000 0 0 0")?;
//!
//! assert!(decoder.consume_ready().is_some());
//! assert_eq!(decoder.slots()[&0].x, Some(100));
//! # Ok::<(), mtreplay::evlog::LogError>(())
//! ```

mod slot;

pub use slot::{active_contacts, Contact, Slot, SlotStatus, SlotTable};

use tracing::warn;

use crate::evlog::{EventKind, LogError, RawEvent, TRACKING_ID_RELEASED};

/// Stateful decoder from raw events to a slot table.
#[derive(Debug, Default)]
pub struct EventDecoder {
    active_slot: u32,
    slots: SlotTable,
    /// Timestamp of the last `SYN_REPORT` not yet consumed.
    ready: Option<i64>,
}

impl EventDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and apply one log line.
    ///
    /// # Errors
    ///
    /// Returns `LogError::MalformedRecord` if the line cannot be parsed. The
    /// decoder state is left untouched in that case.
    pub fn decode(&mut self, line: &str) -> Result<(), LogError> {
        let event = RawEvent::parse_line(line)?;
        self.apply(&event);
        Ok(())
    }

    /// Apply an already-parsed event.
    ///
    /// Returns the event's kind so callers can keep statistics.
    pub fn apply(&mut self, event: &RawEvent) -> EventKind {
        let kind = event.kind();
        match kind {
            EventKind::SlotSelect(slot) => self.active_slot = slot,
            EventKind::TrackingId(value) => self.set_tracking_id(value),
            EventKind::PositionX(x) => self.slot_mut(self.active_slot).x = Some(x),
            EventKind::PositionY(y) => self.slot_mut(self.active_slot).y = Some(y),
            EventKind::SynReport => self.mark_ready(event.timestamp),
            EventKind::TouchButton => {}
            EventKind::UnhandledAbs { code, value } => {
                warn!(code = code, value = value, "Unhandled EV_ABS code");
            }
            EventKind::Unhandled {
                event_type,
                code,
                value,
            } => {
                warn!(
                    event_type = event_type,
                    code = code,
                    value = value,
                    "Unhandled event"
                );
            }
        }
        kind
    }

    /// Live view of the slot table.
    #[inline]
    pub fn slots(&self) -> &SlotTable {
        &self.slots
    }

    /// Slot index that position and tracking updates currently apply to.
    #[inline]
    pub fn active_slot(&self) -> u32 {
        self.active_slot
    }

    /// Take the pending frame timestamp, if any. A second call returns `None`
    /// until another `SYN_REPORT` is decoded.
    pub fn consume_ready(&mut self) -> Option<i64> {
        self.ready.take()
    }

    /// Whether a frame commit is pending.
    pub fn is_ready(&self) -> bool {
        self.ready.is_some()
    }

    fn set_tracking_id(&mut self, value: u32) {
        let slot_id = self.active_slot;
        let slot = self.slot_mut(slot_id);
        if slot.tracking_id == Some(value) {
            return;
        }
        *slot = Slot::default();
        if value != TRACKING_ID_RELEASED {
            slot.tracking_id = Some(value);
        }
    }

    fn mark_ready(&mut self, timestamp: i64) {
        if let Some(previous) = self.ready {
            warn!(
                previous = previous,
                timestamp = timestamp,
                "Unread SYN_REPORT overwritten"
            );
        }
        self.ready = Some(timestamp);
    }

    fn slot_mut(&mut self, slot_id: u32) -> &mut Slot {
        self.slots.entry(slot_id).or_default()
    }
}
