//! Recorded input event logs
//!
//! This module covers the on-disk side of replay: the line format, a
//! line-indexed seekable cursor, and whole-log statistics.
//!
//! # Structure
//!
//! - `types` - Raw events, event type/code constants and classification
//! - `reader` - Parsing a single log line
//! - `cursor` - Line-indexed reading and rewind-based seeking
//! - `stats` - Summary of a complete log
//! - `frames` - Untimed per-frame listing

mod cursor;
mod error;
mod frames;
mod reader;
mod stats;
mod types;

pub use cursor::LineCursor;
pub use error::LogError;
pub use frames::{collect_frames, FrameRow};
pub use reader::{parse_timestamp, TIMESTAMP_FORMAT};
pub use stats::{format_millis, LogStats};
pub use types::*;
