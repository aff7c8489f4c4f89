//! Touch slots and the slot table.

use std::collections::BTreeMap;

/// State of one multi-touch slot.
///
/// A freshly (re)initialised slot has every field unset. `tracking_id == None`
/// means no finger is in the slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slot {
    pub tracking_id: Option<u32>,
    pub x: Option<u32>,
    pub y: Option<u32>,
}

/// A slot whose contact is fully known: tracking id and both coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub tracking_id: u32,
    pub x: u32,
    pub y: u32,
}

/// Result of checking whether a slot holds a usable contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// No finger in the slot
    Empty,
    /// Tracking id set but a coordinate has not arrived yet
    Bogus { tracking_id: u32 },
    /// Usable contact
    Active(Contact),
}

impl Slot {
    pub fn status(&self) -> SlotStatus {
        match (self.tracking_id, self.x, self.y) {
            (None, _, _) => SlotStatus::Empty,
            (Some(tracking_id), Some(x), Some(y)) => SlotStatus::Active(Contact {
                tracking_id,
                x,
                y,
            }),
            (Some(tracking_id), _, _) => SlotStatus::Bogus { tracking_id },
        }
    }

    /// The contact if the slot is fully populated.
    pub fn contact(&self) -> Option<Contact> {
        match self.status() {
            SlotStatus::Active(contact) => Some(contact),
            _ => None,
        }
    }
}

/// Slot index to slot state. Slots are created on first use and never removed.
pub type SlotTable = BTreeMap<u32, Slot>;

/// Number of slots currently holding an active contact.
pub fn active_contacts(slots: &SlotTable) -> usize {
    slots.values().filter(|s| s.contact().is_some()).count()
}
