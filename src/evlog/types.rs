//! Type definitions for recorded input event logs.
//!
//! A log is a plain-text dump of Linux input events, one event per line:
//!
//! ```text
//! 2024/01/01 12:00:00.000000 0003 002f 00000000    <- ABS_MT_SLOT 0
//! 2024/01/01 12:00:00.000000 0003 0039 00000005    <- ABS_MT_TRACKING_ID 5
//! 2024/01/01 12:00:00.000000 0003 0035 00000064    <- ABS_MT_POSITION_X 100
//! 2024/01/01 12:00:00.000000 0003 0036 000000c8    <- ABS_MT_POSITION_Y 200
//! 2024/01/01 12:00:00.000000 0000 0000 00000000    <- SYN_REPORT
//! ```
//!
//! The type, code and value columns are hexadecimal without a `0x` prefix.

// ============================================================================
// Event type and code constants
// ============================================================================

/// Synchronisation events (`SYN_REPORT` lives here with code 0).
pub const EV_SYN: u16 = 0x0000;
/// Key and button state changes.
pub const EV_KEY: u16 = 0x0001;
/// Absolute axis updates.
pub const EV_ABS: u16 = 0x0003;

/// Touch contact button, reported alongside the MT protocol and ignored here.
pub const BTN_TOUCH: u16 = 0x014a;

/// Selects the slot that subsequent MT updates apply to.
pub const ABS_MT_SLOT: u16 = 0x002f;
/// Horizontal contact position.
pub const ABS_MT_POSITION_X: u16 = 0x0035;
/// Vertical contact position.
pub const ABS_MT_POSITION_Y: u16 = 0x0036;
/// Contact identifier; [`TRACKING_ID_RELEASED`] marks the slot as empty.
pub const ABS_MT_TRACKING_ID: u16 = 0x0039;

/// Tracking id value signalling that the contact in the active slot lifted.
pub const TRACKING_ID_RELEASED: u32 = 0xffff_ffff;

// ============================================================================
// Records
// ============================================================================

/// One decoded line of an event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    /// Milliseconds since the Unix epoch, interpreted in local time.
    pub timestamp: i64,
    /// Event type (`EV_SYN`, `EV_KEY`, `EV_ABS`, ...).
    pub event_type: u16,
    /// Event code within the type.
    pub code: u16,
    /// Raw 32-bit event value.
    pub value: u32,
}

impl RawEvent {
    pub fn new(timestamp: i64, event_type: u16, code: u16, value: u32) -> Self {
        Self {
            timestamp,
            event_type,
            code,
            value,
        }
    }

    /// Classify this record into the closed set of kinds the decoder handles.
    pub fn kind(&self) -> EventKind {
        EventKind::classify(self)
    }
}

/// What a record means to the slot decoder.
///
/// Every `(type, code)` pair falls into exactly one variant; the two
/// `Unhandled*` variants are the explicit default branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `ABS_MT_SLOT`: switch the active slot
    SlotSelect(u32),
    /// `ABS_MT_TRACKING_ID`: new contact or release in the active slot
    TrackingId(u32),
    /// `ABS_MT_POSITION_X`
    PositionX(u32),
    /// `ABS_MT_POSITION_Y`
    PositionY(u32),
    /// Frame commit marker
    SynReport,
    /// `(EV_KEY, BTN_TOUCH)`, deliberately ignored
    TouchButton,
    /// `EV_ABS` with a code the decoder does not track
    UnhandledAbs { code: u16, value: u32 },
    /// Anything else
    Unhandled {
        event_type: u16,
        code: u16,
        value: u32,
    },
}

impl EventKind {
    pub fn classify(event: &RawEvent) -> Self {
        match (event.event_type, event.code) {
            (EV_ABS, ABS_MT_SLOT) => EventKind::SlotSelect(event.value),
            (EV_ABS, ABS_MT_TRACKING_ID) => EventKind::TrackingId(event.value),
            (EV_ABS, ABS_MT_POSITION_X) => EventKind::PositionX(event.value),
            (EV_ABS, ABS_MT_POSITION_Y) => EventKind::PositionY(event.value),
            (EV_ABS, code) => EventKind::UnhandledAbs {
                code,
                value: event.value,
            },
            (EV_SYN, _) => EventKind::SynReport,
            (EV_KEY, BTN_TOUCH) => EventKind::TouchButton,
            (event_type, code) => EventKind::Unhandled {
                event_type,
                code,
                value: event.value,
            },
        }
    }
}
