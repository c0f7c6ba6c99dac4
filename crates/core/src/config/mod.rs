use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{audio::MIDI_MAX, Result, SortVizError};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub audio: AudioConfig,
    pub playback: PlaybackConfig,
    pub render: RenderConfig,
}

impl AppConfig {
    /// Loads and validates a JSON configuration file. Missing sections and
    /// fields fall back to their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(?path, "loaded configuration");
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.audio.validate()?;
        self.render.validate()
    }
}

/// Configuration specific to note playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// MIDI note of the lowest array value.
    pub base_note: u8,
    pub regular_velocity: u8,
    pub emphasized_velocity: u8,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            base_note: 60,
            regular_velocity: 60,
            emphasized_velocity: 120,
        }
    }
}

impl AudioConfig {
    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("base_note", self.base_note),
            ("regular_velocity", self.regular_velocity),
            ("emphasized_velocity", self.emphasized_velocity),
        ] {
            if value > MIDI_MAX {
                return Err(SortVizError::InvalidConfig(format!(
                    "audio.{name} must be at most {MIDI_MAX}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Size of the shuffled array and the pace of the replay loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub array_size: usize,
    pub step_delay_ms: u64,
    /// Fixed shuffle seed; a random one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            array_size: 16,
            step_delay_ms: 50,
            seed: None,
        }
    }
}

/// Terminal area used by the bar chart, in character cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 16,
        }
    }
}

impl RenderConfig {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SortVizError::InvalidConfig(format!(
                "render area must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
