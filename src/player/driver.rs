//! Per-frame work quota for the host loop.
//!
//! A burst of commits with no recorded gap between them would otherwise let
//! the scheduler run for as long as the log lasts, starving input handling
//! and redraw. Each frame instead gets a slice of wall-clock time sized from
//! how long the previous frame sat idle, and ticks stop once the slice is used.

use std::io::{BufRead, Seek};

use super::clock::Clock;
use super::scheduler::PlaybackScheduler;
use crate::evlog::LogError;

/// What happened during one frame's processing slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStatus {
    /// The log ran out; playback is over
    pub end_of_log: bool,
    /// Number of scheduler ticks run
    pub ticks: usize,
    /// Wait progress reported by the last tick, if any ran
    pub wait_fraction: Option<f64>,
    /// Clock value when processing finished
    pub processed_at: i64,
}

/// Adaptive processing quota carried from frame to frame.
#[derive(Debug, Clone)]
pub struct FrameQuota {
    quota_ms: i64,
    /// Idle time banked minus processing time spent
    time_buffer: i64,
    last_frame_end: i64,
}

impl FrameQuota {
    pub fn new(initial_quota_ms: i64, now: i64) -> Self {
        Self {
            quota_ms: initial_quota_ms.max(1),
            time_buffer: 0,
            last_frame_end: now,
        }
    }

    #[inline]
    pub fn quota_ms(&self) -> i64 {
        self.quota_ms
    }

    #[inline]
    pub fn time_buffer(&self) -> i64 {
        self.time_buffer
    }

    /// Run scheduler ticks for one frame.
    ///
    /// Does nothing while the scheduler is paused. Otherwise the quota is
    /// re-estimated from the idle time since the last [`end_frame`](Self::end_frame),
    /// and ticks run until the quota elapses, the log ends, or the scheduler
    /// is waiting for a deadline past this frame's slice.
    pub fn run_frame<R, C>(
        &mut self,
        scheduler: &mut PlaybackScheduler<R>,
        clock: &C,
    ) -> Result<FrameStatus, LogError>
    where
        R: BufRead + Seek,
        C: Clock,
    {
        let frame_start = clock.now_ms();
        let mut status = FrameStatus {
            end_of_log: false,
            ticks: 0,
            wait_fraction: None,
            processed_at: frame_start,
        };

        if scheduler.is_paused() {
            return Ok(status);
        }

        let idle = frame_start - self.last_frame_end;
        if idle > 0 {
            self.quota_ms = idle;
        }

        if self.time_buffer > 0 {
            let deadline = frame_start + self.quota_ms;
            loop {
                let now = clock.now_ms();
                if now >= deadline {
                    break;
                }
                match scheduler.tick(now)? {
                    Some(tick) => {
                        status.ticks += 1;
                        status.wait_fraction = Some(tick.wait_fraction);
                    }
                    None => {
                        status.end_of_log = true;
                        break;
                    }
                }
                // Nothing more can happen before the slice runs out
                if matches!(scheduler.state().waiting_target(), Some(t) if t >= deadline) {
                    break;
                }
            }
        }

        let finish = clock.now_ms();
        self.time_buffer += idle - (finish - frame_start);
        status.processed_at = finish;
        Ok(status)
    }

    /// Mark the end of a frame (after drawing and pacing).
    pub fn end_frame(&mut self, now: i64) {
        self.last_frame_end = now;
    }
}
