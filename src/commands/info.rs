//! Info command handler

use anyhow::{Context, Result};
use std::path::Path;

use mtreplay::evlog::LogStats;

use super::open_log;

/// Print statistics for a log, as text or JSON.
pub fn handle(file: &Path, json: bool) -> Result<()> {
    let stats = collect(file)?;
    if json {
        println!("{}", render_json(&stats)?);
    } else {
        println!("File: {}", file.display());
        println!("{}", stats.summary());
    }
    Ok(())
}

fn collect(file: &Path) -> Result<LogStats> {
    let mut cursor = open_log(file)?;
    LogStats::collect(&mut cursor).with_context(|| format!("Failed to decode {}", file.display()))
}

/// Stats as pretty JSON, with the derived duration included.
fn render_json(stats: &LogStats) -> Result<String> {
    let mut value = serde_json::to_value(stats).context("Failed to serialize stats")?;
    if let Some(map) = value.as_object_mut() {
        map.insert("duration_ms".to_string(), stats.duration_ms().into());
    }
    Ok(serde_json::to_string_pretty(&value)?)
}
