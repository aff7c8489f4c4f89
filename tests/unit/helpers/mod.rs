//! Test helper utilities

#![allow(dead_code)]

use std::cell::Cell;
use std::fs;
use std::io::Cursor;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use mtreplay::evlog::LineCursor;
use mtreplay::player::Clock;
use mtreplay::PlaybackScheduler;
use tracing_subscriber::fmt::MakeWriter;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Cursor over in-memory log text
pub fn memory_cursor(text: &str) -> LineCursor<Cursor<Vec<u8>>> {
    LineCursor::load(Cursor::new(text.as_bytes().to_vec())).expect("Failed to load log")
}

/// Scheduler over in-memory log text
pub fn memory_scheduler(text: &str) -> PlaybackScheduler<Cursor<Vec<u8>>> {
    PlaybackScheduler::load(Cursor::new(text.as_bytes().to_vec())).expect("Failed to load log")
}

/// A log line at `2024/01/01 00:00:<seconds>` with hex fields
pub fn line(seconds: f64, event_type: u16, code: u16, value: u32) -> String {
    format!(
        "2024/01/01 00:00:{:09.6} {:x} {:x} {:x}",
        seconds, event_type, code, value
    )
}

/// Join lines into log text with a trailing newline
pub fn log(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// `n` empty frame commits spaced `gap_ms` apart
pub fn empty_frames(n: usize, gap_ms: u32) -> String {
    let lines: Vec<String> = (0..n)
        .map(|i| line(f64::from(gap_ms) * i as f64 / 1000.0, 0, 0, 0))
        .collect();
    log(&lines)
}

/// Clock that moves forward 1ms every time it is read, so busy loops
/// driven by a quota always make progress.
#[derive(Debug, Default)]
pub struct SteppingClock {
    now: Cell<i64>,
}

impl SteppingClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn peek(&self) -> i64 {
        self.now.get()
    }
}

impl Clock for SteppingClock {
    fn now_ms(&self) -> i64 {
        let now = self.now.get();
        self.now.set(now + 1);
        now
    }
}

/// Shared in-memory sink for formatted log output
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber and return everything it logged.
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}
