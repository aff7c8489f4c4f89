//! Shared helpers for integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::process::Command;

use mtreplay::player::Clock;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a fixture as a string argument
pub fn fixture_arg(name: &str) -> String {
    fixtures_dir().join(name).to_string_lossy().to_string()
}

/// Run the mtreplay binary with `home` as the home directory.
///
/// Returns (stdout, stderr, exit code).
pub fn run_mtreplay(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_mtreplay"))
        .args(args)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute mtreplay");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Clock that moves forward 1ms every time it is read.
#[derive(Debug, Default)]
pub struct SteppingClock {
    now: Cell<i64>,
}

impl SteppingClock {
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
