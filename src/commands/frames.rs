//! Frames command handler

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use mtreplay::evlog::{collect_frames, FrameRow};

use super::open_log;

/// Print one row per decoded frame.
pub fn handle(file: &Path, limit: Option<usize>) -> Result<()> {
    let rows = load_rows(file, limit)?;
    let mut stdout = io::stdout().lock();
    for row in rows {
        writeln!(stdout, "{}", row)?;
    }
    Ok(())
}

fn load_rows(file: &Path, limit: Option<usize>) -> Result<Vec<FrameRow>> {
    let mut cursor = open_log(file)?;
    collect_frames(&mut cursor, limit)
        .with_context(|| format!("Failed to decode {}", file.display()))
}
