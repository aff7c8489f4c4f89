//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Touch device that produced the logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Range of ABS_MT_POSITION_X values
    #[serde(default = "default_x_resolution")]
    pub x_resolution: u32,
    /// Range of ABS_MT_POSITION_Y values
    #[serde(default = "default_y_resolution")]
    pub y_resolution: u32,
}

pub fn default_x_resolution() -> u32 {
    1080 * 16
}

pub fn default_y_resolution() -> u32 {
    2400 * 16
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            x_resolution: default_x_resolution(),
            y_resolution: default_y_resolution(),
        }
    }
}

/// Host loop and control settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Frames per second of the host loop
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Processing quota for the first frame, before it adapts
    #[serde(default = "default_initial_quota_ms")]
    pub initial_quota_ms: u32,
    /// Lines discarded by one fast-forward
    #[serde(default = "default_fast_forward_events")]
    pub fast_forward_events: usize,
    /// Highest speed the speed button cycles to
    #[serde(default = "default_max_speed_multiplier")]
    pub max_speed_multiplier: u32,
}

pub fn default_frame_rate() -> u32 {
    120
}

pub fn default_initial_quota_ms() -> u32 {
    8
}

pub fn default_fast_forward_events() -> usize {
    20
}

pub fn default_max_speed_multiplier() -> u32 {
    10
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            initial_quota_ms: default_initial_quota_ms(),
            fast_forward_events: default_fast_forward_events(),
            max_speed_multiplier: default_max_speed_multiplier(),
        }
    }
}

/// Drawing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How long a trail takes to fade out
    #[serde(default = "default_trail_fade_ms")]
    pub trail_fade_ms: u32,
}

pub fn default_trail_fade_ms() -> u32 {
    1000
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            trail_fade_ms: default_trail_fade_ms(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns `Ok(())` if all values are within acceptable bounds,
    /// or an error describing the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        if self.device.x_resolution < 2 {
            return Err(format!(
                "device.x_resolution {} is below minimum (2)",
                self.device.x_resolution
            ));
        }
        if self.device.y_resolution < 2 {
            return Err(format!(
                "device.y_resolution {} is below minimum (2)",
                self.device.y_resolution
            ));
        }
        if self.playback.frame_rate == 0 {
            return Err("playback.frame_rate must be > 0".to_string());
        }
        if self.playback.max_speed_multiplier == 0 {
            return Err("playback.max_speed_multiplier must be > 0".to_string());
        }
        if self.display.trail_fade_ms == 0 {
            return Err("display.trail_fade_ms must be > 0".to_string());
        }
        Ok(())
    }
}
