//! Real-time playback scheduler.
//!
//! Reads one log line per [`tick`](PlaybackScheduler::tick), feeds it to the
//! decoder, and when a frame commit arrives opens a wait window as long as
//! the recorded gap to the previous commit (divided by the speed divisor).
//! While the window is open, ticks only report progress. When it closes, the
//! slot table is diffed against the last rendered snapshot and the resulting
//! trail directives are queued for the renderer.
//!
//! The scheduler never blocks: the host calls `tick` on its own cadence and
//! passes the current clock value in.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use tracing::{debug, trace};

use super::command::ControlCommand;
use super::diff::{diff_slots, TrailDirective};
use super::state::PlaybackState;
use crate::decoder::{EventDecoder, SlotTable};
use crate::evlog::{LineCursor, LogError};

/// Outcome of a tick that did not hit the end of the log.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Progress through the current wait window; 1 when a line was processed
    pub wait_fraction: f64,
    /// Raw text of the last processed line
    pub line: String,
}

/// Paces decoding of an event log against wall-clock time.
#[derive(Debug)]
pub struct PlaybackScheduler<R> {
    cursor: LineCursor<R>,
    decoder: EventDecoder,
    state: PlaybackState,
    directives: Vec<TrailDirective>,
}

impl PlaybackScheduler<BufReader<File>> {
    /// Open and load a log file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        Ok(Self::new(LineCursor::open(path)?))
    }
}

impl<R: BufRead + Seek> PlaybackScheduler<R> {
    /// Start a session over an already-loaded cursor.
    pub fn new(cursor: LineCursor<R>) -> Self {
        Self {
            cursor,
            decoder: EventDecoder::new(),
            state: PlaybackState::new(),
            directives: Vec::new(),
        }
    }

    /// Load a stream positioned at its first line.
    pub fn load(reader: R) -> Result<Self, LogError> {
        Ok(Self::new(LineCursor::load(reader)?))
    }

    /// Advance playback by at most one log line.
    ///
    /// Returns `Ok(None)` at end of log. While a wait window is open, returns
    /// its progress without reading input.
    ///
    /// # Errors
    ///
    /// Returns `LogError::MalformedRecord` (with its line number) if the line
    /// read cannot be decoded, or `LogError::Io` on read failure.
    pub fn tick(&mut self, now: i64) -> Result<Option<Tick>, LogError> {
        if self.state.take_skip_wait() {
            self.state.collapse_wait(now);
            self.state.set_previous_commit(None);
        }

        if let Some(target) = self.state.waiting_target() {
            if now < target {
                return Ok(Some(Tick {
                    wait_fraction: self.state.wait_fraction(now),
                    line: self.state.current_line.clone(),
                }));
            }
            self.state.finish_wait(now);
            self.render_frame(now);
        }

        if self.state.take_skip_time_offset() {
            self.state.clear_waiting_time_offset();
        }

        let Some(line) = self.cursor.read_line()? else {
            return Ok(None);
        };
        let line_number = self.cursor.next_line_index();
        self.decoder
            .decode(&line)
            .map_err(|e| e.at_line(line_number))?;
        self.state.current_line = line;

        if let Some(timestamp) = self.decoder.consume_ready() {
            match self.state.previous_commit() {
                Some(previous) => {
                    let interval = self.state.scaled_interval(timestamp - previous);
                    let offset = self.state.take_waiting_time_offset();
                    trace!(
                        recorded_ms = timestamp - previous,
                        interval_ms = interval,
                        offset_ms = offset,
                        "Waiting for next frame"
                    );
                    self.state.begin_wait(now, now + interval + offset);
                }
                None => self.render_frame(now),
            }
            self.state.set_previous_commit(Some(timestamp));
        }

        Ok(Some(Tick {
            wait_fraction: 1.0,
            line: self.state.current_line.clone(),
        }))
    }

    /// Snapshot the live slot table and queue the diff against the last one.
    fn render_frame(&mut self, now: i64) {
        diff_slots(
            self.decoder.slots(),
            &self.state.previous_slots,
            now,
            &mut self.directives,
        );
        self.state.previous_slots = self.decoder.slots().clone();
    }

    // === Controls ===

    /// Pause or resume. Time spent paused is not borrowed from the next wait.
    pub fn pause(&mut self, paused: bool) {
        debug!(paused = paused, "Pause state changed");
        self.state.paused = paused;
        self.state.request_skip_time_offset();
    }

    /// Collapse the current wait on the next tick.
    pub fn skip_waiting(&mut self) {
        self.state.request_skip_wait();
    }

    /// Discard `count` lines without decoding them, then skip waiting.
    ///
    /// Returns how many lines were actually discarded.
    pub fn skip_events(&mut self, count: usize) -> Result<usize, LogError> {
        let skipped = self.cursor.skip_lines(count)?;
        debug!(requested = count, skipped = skipped, "Skipped events");
        self.skip_waiting();
        Ok(skipped)
    }

    /// Change playback speed; applies from the next computed wait.
    pub fn set_speed_divisor(&mut self, divisor: u32) {
        debug!(divisor = divisor, "Speed divisor changed");
        self.state.set_speed_divisor(divisor);
    }

    /// Seek to `fraction` of the log's lines and clear persistent trails.
    ///
    /// The cleared trails keep fading from `now`, which is the host's clock
    /// value and keeps moving while playback is paused.
    pub fn seek_to_fraction(&mut self, fraction: f64, now: i64) -> Result<(), LogError> {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let index = (self.cursor.total_lines() as f64 * fraction).round() as usize;
        debug!(fraction = fraction, line = index, "Seeking");

        self.cursor.goto_line(index)?;
        self.directives.push(TrailDirective::FadePersistentTrail {
            slot: None,
            timestamp: Some(now),
        });
        self.skip_waiting();
        Ok(())
    }

    /// Apply a command from the UI layer at clock value `now`.
    pub fn apply(&mut self, command: ControlCommand, now: i64) -> Result<(), LogError> {
        match command {
            ControlCommand::Paused(paused) => self.pause(paused),
            ControlCommand::SkipWaiting => self.skip_waiting(),
            ControlCommand::SkipEvents(count) => {
                self.skip_events(count)?;
            }
            ControlCommand::SetPlaybackSpeedMultiplier(divisor) => self.set_speed_divisor(divisor),
            ControlCommand::SetFilePosition(fraction) => self.seek_to_fraction(fraction, now)?,
        }
        Ok(())
    }

    // === Accessors ===

    /// Drain the trail directives queued since the last call.
    pub fn take_directives(&mut self) -> Vec<TrailDirective> {
        std::mem::take(&mut self.directives)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    #[inline]
    pub fn speed_divisor(&self) -> u32 {
        self.state.speed_divisor()
    }

    #[inline]
    pub fn next_line_index(&self) -> usize {
        self.cursor.next_line_index()
    }

    #[inline]
    pub fn total_lines(&self) -> usize {
        self.cursor.total_lines()
    }

    /// Fraction of the log consumed.
    pub fn progress(&self) -> f64 {
        self.cursor.progress()
    }

    /// Last processed line without its line terminator.
    pub fn current_line(&self) -> &str {
        self.state.current_line.trim_end()
    }

    /// Live slot table of the decoder.
    pub fn slots(&self) -> &SlotTable {
        self.decoder.slots()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }
}
