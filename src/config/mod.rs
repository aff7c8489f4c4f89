//! Configuration management for mtreplay

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/mtreplay/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/mtreplay)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Serialize to pretty TOML (as written in the config file)
    pub fn to_toml(&self) -> Result<String> {
        io::to_toml(self)
    }

    /// Apply command-line overrides for the device resolution.
    pub fn with_resolution(mut self, x: Option<u32>, y: Option<u32>) -> Result<Self> {
        if let Some(x) = x {
            self.device.x_resolution = x;
        }
        if let Some(y) = y {
            self.device.y_resolution = y;
        }
        self.validate()
            .map_err(|e| anyhow::anyhow!("Invalid option: {}", e))?;
        Ok(self)
    }
}
