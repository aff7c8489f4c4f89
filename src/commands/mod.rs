//! Command handlers for the mtreplay CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod frames;
pub mod info;
pub mod play;

use anyhow::{bail, Result};
use std::path::Path;

use mtreplay::evlog::LineCursor;

/// Open a log for reading, with a readable error for missing files.
pub fn open_log(path: &Path) -> Result<LineCursor<std::io::BufReader<std::fs::File>>> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    if path.is_dir() {
        bail!("Not a file: {}", path.display());
    }
    Ok(LineCursor::open(path)?)
}
