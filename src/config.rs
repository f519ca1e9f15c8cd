// TOML face configuration loaded at startup

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::ColorPalette;
use crate::mood::Mood;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid face config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything the host needs to bring up a face: panel wiring, eye shape,
/// involuntary behavior timing and the starting expression. Every field has
/// a default, so a partial file (or none at all) works.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FaceConfig {
    pub panel: PanelConfig,
    pub eyes: EyesConfig,
    pub blink: TimerConfig,
    pub idle: TimerConfig,
    pub mood: Mood,
    pub palette: ColorPalette,
    pub cyclops: bool,
    pub curious: bool,
}

/// LED matrix wiring. Defaults match two chained 64x32 HUB75 panels on an
/// Adafruit HAT.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub rows: u32,
    pub cols: u32,
    pub chain: u32,
    pub hardware_mapping: String,
    pub max_fps: u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 64,
            chain: 2,
            hardware_mapping: "adafruit-hat".to_string(),
            max_fps: 30,
        }
    }
}

impl PanelConfig {
    pub fn screen_width(&self) -> i32 {
        (self.cols * self.chain) as i32
    }

    pub fn screen_height(&self) -> i32 {
        self.rows as i32
    }
}

/// Rest shape of both eyes. Defaults are sized for a 32 pixel tall matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EyesConfig {
    pub width: i32,
    pub height: i32,
    pub radius: i32,
    pub spacing: i32,
}

impl Default for EyesConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            radius: 4,
            spacing: 12,
        }
    }
}

/// Timing for one involuntary behavior (autoblink or idle wander).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub enabled: bool,
    pub interval_s: u32,
    pub variation_s: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_s: 3,
            variation_s: 2,
        }
    }
}

impl FaceConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
