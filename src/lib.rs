//! Multitouch Replay (mtreplay) Library
//!
//! Replays text logs of Linux multitouch input events (`ABS_MT_*`, type B
//! slot protocol) at their recorded pace.
//!
//! - `evlog`: log line format, seekable line cursor, statistics
//! - `decoder`: slot table reconstruction from raw events
//! - `player`: real-time scheduler and the terminal player

pub mod config;
pub mod decoder;
pub mod evlog;
pub mod logging;
pub mod player;

pub use config::Config;
pub use decoder::{EventDecoder, Slot, SlotTable};
pub use evlog::{LineCursor, LogError, LogStats, RawEvent};
pub use player::{play_session, PlaybackScheduler};
