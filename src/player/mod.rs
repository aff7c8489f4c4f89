//! Touch log player module
//!
//! Replays a recorded event log against wall-clock time:
//!
//! - `scheduler`: paces decoding and emits trail directives
//! - `driver`: per-frame processing quota for the host loop
//! - `trails`, `render`, `input`: the terminal front end
//! - `native`: the full-screen player tying them together
//!
//! # Usage
//!
//! ```no_run
//! use mtreplay::player::{play_session, PlayOptions, PlaybackResult};
//! use mtreplay::Config;
//! use std::path::Path;
//!
//! let config = Config::default();
//! let result = play_session(Path::new("touch.log"), &config, &PlayOptions::default()).unwrap();
//! match result {
//!     PlaybackResult::Success(name) => println!("Finished: {}", name),
//!     PlaybackResult::Interrupted => println!("Stopped by user"),
//! }
//! ```

pub mod clock;
pub mod command;
pub mod diff;
pub mod driver;
pub mod input;
mod native;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod trails;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use command::ControlCommand;
pub use diff::{Point, TrailDirective};
pub use driver::{FrameQuota, FrameStatus};
pub use native::{play_session, PlayOptions, PlaybackResult};
pub use scheduler::{PlaybackScheduler, Tick};
pub use state::PlaybackState;
pub use trails::TrailBoard;
