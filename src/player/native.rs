//! Native multitouch replay player
//!
//! Full-screen terminal player with:
//! - Trail canvas scaled from device coordinates
//! - Main progress bar (click to seek) and wait progress bar
//! - Pause, skip, fast-forward and speed controls
//! - Help overlay

use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, info};

use super::clock::{Clock, MonotonicClock};
use super::driver::FrameQuota;
use super::input::{handle_event, InputResult, PlayerInput, Toolbar};
use super::render::{render_frame, render_help, FrameView, Layout, Scale};
use super::scheduler::PlaybackScheduler;
use super::trails::TrailBoard;
use crate::config::Config;

/// Result of a playback operation
#[derive(Debug, Clone)]
pub enum PlaybackResult {
    /// Playback reached the end of the log
    Success(String),
    /// Playback was interrupted (e.g., user pressed q)
    Interrupted,
}

impl PlaybackResult {
    /// Get a human-readable message for this result
    pub fn message(&self) -> String {
        match self {
            PlaybackResult::Success(name) => format!("Played: {}", name),
            PlaybackResult::Interrupted => "Playback interrupted".to_string(),
        }
    }
}

/// Per-invocation playback options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayOptions {
    /// Initial speed divisor
    pub speed: u32,
    /// Initial position as a fraction of the log's lines
    pub start: f64,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            speed: 1,
            start: 0.0,
        }
    }
}

/// Replay a touch log in the terminal.
///
/// Controls:
/// - q/Esc: Quit
/// - Space: Pause/resume
/// - s/Tab: Skip the current wait
/// - f: Fast forward
/// - x/+: Cycle speed
/// - Left/Right, Home/End, click on the main bar: Seek
/// - ?: Show help
pub fn play_session(path: &Path, config: &Config, options: &PlayOptions) -> Result<PlaybackResult> {
    let mut scheduler = PlaybackScheduler::open(path)
        .with_context(|| format!("Failed to open log: {}", path.display()))?;
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let playback = &config.playback;
    let toolbar = Toolbar::new(
        options.speed,
        playback.max_speed_multiplier,
        playback.fast_forward_events,
    );
    scheduler.set_speed_divisor(toolbar.speed());
    if options.start > 0.0 {
        scheduler.seek_to_fraction(options.start, 0)?;
    }
    info!(
        file = %path.display(),
        lines = scheduler.total_lines(),
        speed = toolbar.speed(),
        "Starting playback"
    );

    let (term_cols, term_rows) = crossterm::terminal::size()?;
    let mut input = PlayerInput::new(toolbar, Layout::new(term_cols, term_rows));
    let mut board = TrailBoard::new(i64::from(config.display.trail_fade_ms));
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(playback.frame_rate.max(1)));

    // Setup terminal
    let mut stdout = io::stdout();
    crossterm::terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = (|| -> Result<PlaybackResult> {
        let clock = MonotonicClock::new();
        let mut quota = FrameQuota::new(i64::from(playback.initial_quota_ms), clock.now_ms());
        let mut wait_fraction = 0.0;
        let mut help_drawn = false;

        loop {
            let frame_started = Instant::now();

            // Handle input
            while event::poll(Duration::ZERO)? {
                match handle_event(event::read()?, &mut input) {
                    InputResult::Quit => return Ok(PlaybackResult::Interrupted),
                    InputResult::Command(command) => {
                        debug!(command = %command, "Control command");
                        scheduler.apply(command, clock.now_ms())?;
                    }
                    InputResult::Continue => {}
                }
            }

            let status = quota.run_frame(&mut scheduler, &clock)?;
            if let Some(fraction) = status.wait_fraction {
                wait_fraction = fraction;
            }
            board.apply_all(scheduler.take_directives());
            input.progress = scheduler.progress();

            // Render
            if input.show_help {
                if !help_drawn {
                    render_help(&mut stdout, input.layout.cols, input.layout.rows)?;
                    help_drawn = true;
                }
            } else {
                if help_drawn {
                    execute!(stdout, Clear(ClearType::All))?;
                    help_drawn = false;
                }
                let layout = input.layout;
                let scale = Scale::new(
                    config.device.x_resolution,
                    config.device.y_resolution,
                    layout.cols,
                    layout.canvas_height(),
                );
                let view = FrameView {
                    progress: scheduler.progress(),
                    next_line: scheduler.next_line_index(),
                    total_lines: scheduler.total_lines(),
                    current_line: scheduler.current_line(),
                    wait_fraction,
                };
                render_frame(
                    &mut stdout,
                    &layout,
                    &mut board,
                    &scale,
                    status.processed_at,
                    &view,
                    &input.toolbar,
                )?;
            }

            stdout.flush()?;

            if status.end_of_log {
                info!("End of log reached");
                std::thread::sleep(Duration::from_millis(500));
                return Ok(PlaybackResult::Success(name.clone()));
            }

            quota.end_frame(clock.now_ms());
            if let Some(rest) = frame_time.checked_sub(frame_started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    })();

    // Cleanup
    execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;

    result
}
