//! Playback control commands.
//!
//! Input widgets never touch playback state directly. They produce a
//! [`ControlCommand`] which the scheduler applies in
//! [`PlaybackScheduler::apply`](super::PlaybackScheduler::apply).

use std::fmt;

/// A request from the UI layer to change playback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    /// Pause (`true`) or resume (`false`)
    Paused(bool),
    /// Jump to the end of the current wait
    SkipWaiting,
    /// Discard the next N log lines, then skip waiting
    SkipEvents(usize),
    /// Replace the speed divisor (1 = real time)
    SetPlaybackSpeedMultiplier(u32),
    /// Seek to a fraction of the log's lines, in `[0, 1]`
    SetFilePosition(f64),
}

impl ControlCommand {
    /// Wire name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            ControlCommand::Paused(_) => "paused",
            ControlCommand::SkipWaiting => "skip_waiting",
            ControlCommand::SkipEvents(_) => "skip_events",
            ControlCommand::SetPlaybackSpeedMultiplier(_) => "set_playback_speed_multiplier",
            ControlCommand::SetFilePosition(_) => "set_file_position",
        }
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlCommand::Paused(paused) => write!(f, "{} {}", self.name(), paused),
            ControlCommand::SkipWaiting => write!(f, "{}", self.name()),
            ControlCommand::SkipEvents(n) => write!(f, "{} {}", self.name(), n),
            ControlCommand::SetPlaybackSpeedMultiplier(m) => write!(f, "{} {}", self.name(), m),
            ControlCommand::SetFilePosition(pos) => write!(f, "{} {:.3}", self.name(), pos),
        }
    }
}
