//! Player state management
//!
//! Contains the `PlaybackState` struct that holds the scheduler's timing
//! state between ticks: the pending wait window, the last rendered slot
//! snapshot, the speed divisor and the one-shot control flags.

use crate::decoder::SlotTable;

/// Timing state of a playback session.
///
/// Created when a log is loaded, mutated by every tick and control command.
/// The wait window and flags are private with explicit transitions so the
/// scheduler cannot, for example, leave a zero speed divisor behind.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    // === Wait window (guarded) ===
    /// Wall-clock time the current wait started
    waiting_start: i64,
    /// Wall-clock deadline of the current wait; `None` while idle
    waiting_target: Option<i64>,
    /// Overshoot of the last expired wait, subtracted from the next one
    waiting_time_offset: i64,

    // === Pacing (guarded) ===
    /// Recorded time is divided by this (1 = real time)
    speed_divisor: u32,
    /// Timestamp of the last decoded commit
    previous_commit: Option<i64>,

    // === One-shot flags (guarded) ===
    skip_wait_flag: bool,
    skip_time_offset_flag: bool,

    // === Public ===
    /// Whether the host should stop ticking
    pub paused: bool,
    /// Slot table as of the last rendered frame (an owned copy)
    pub previous_slots: SlotTable,
    /// Raw text of the last processed line
    pub current_line: String,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            waiting_start: 0,
            waiting_target: None,
            waiting_time_offset: 0,
            speed_divisor: 1,
            previous_commit: None,
            skip_wait_flag: false,
            skip_time_offset_flag: false,
            paused: false,
            previous_slots: SlotTable::new(),
            current_line: String::new(),
        }
    }

    // === Wait window ===

    /// Open a wait window from `now` until `target`.
    pub fn begin_wait(&mut self, now: i64, target: i64) {
        self.waiting_start = now;
        self.waiting_target = Some(target);
    }

    /// Collapse the wait so it expires on the next check.
    pub fn collapse_wait(&mut self, now: i64) {
        self.waiting_start = now;
        self.waiting_target = Some(now);
    }

    /// Close the wait window, remembering how far `now` overshot it.
    pub fn finish_wait(&mut self, now: i64) {
        if let Some(target) = self.waiting_target.take() {
            self.waiting_time_offset = target - now;
        }
    }

    #[inline]
    pub fn waiting_target(&self) -> Option<i64> {
        self.waiting_target
    }

    #[inline]
    pub fn waiting_start(&self) -> i64 {
        self.waiting_start
    }

    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.waiting_target.is_some()
    }

    /// Progress through the current wait window in `[0, 1]`.
    ///
    /// A zero-width window, or no window at all, counts as complete.
    pub fn wait_fraction(&self, now: i64) -> f64 {
        match self.waiting_target {
            Some(target) if target != self.waiting_start => {
                let fraction =
                    (now - self.waiting_start) as f64 / (target - self.waiting_start) as f64;
                fraction.clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    #[inline]
    pub fn waiting_time_offset(&self) -> i64 {
        self.waiting_time_offset
    }

    /// Hand out the carried overshoot and reset it.
    pub fn take_waiting_time_offset(&mut self) -> i64 {
        std::mem::take(&mut self.waiting_time_offset)
    }

    pub fn clear_waiting_time_offset(&mut self) {
        self.waiting_time_offset = 0;
    }

    // === Pacing ===

    #[inline]
    pub fn speed_divisor(&self) -> u32 {
        self.speed_divisor
    }

    /// Set the speed divisor, clamped to >= 1.
    pub fn set_speed_divisor(&mut self, divisor: u32) {
        self.speed_divisor = divisor.max(1);
    }

    /// Wall-clock length of a recorded interval at the current speed.
    pub fn scaled_interval(&self, recorded_ms: i64) -> i64 {
        (recorded_ms as f64 / self.speed_divisor as f64).round() as i64
    }

    #[inline]
    pub fn previous_commit(&self) -> Option<i64> {
        self.previous_commit
    }

    pub fn set_previous_commit(&mut self, timestamp: Option<i64>) {
        self.previous_commit = timestamp;
    }

    // === One-shot flags ===

    pub fn request_skip_wait(&mut self) {
        self.skip_wait_flag = true;
    }

    pub fn request_skip_time_offset(&mut self) {
        self.skip_time_offset_flag = true;
    }

    /// Returns true once per `request_skip_wait`.
    pub fn take_skip_wait(&mut self) -> bool {
        std::mem::take(&mut self.skip_wait_flag)
    }

    /// Returns true once per `request_skip_time_offset`.
    pub fn take_skip_time_offset(&mut self) -> bool {
        std::mem::take(&mut self.skip_time_offset_flag)
    }

    #[inline]
    pub fn skip_wait_pending(&self) -> bool {
        self.skip_wait_flag
    }
}
