//! Runner settings
//!
//! Read from a JSON file by the native binary. Missing fields fall back to
//! their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::sim::PointerTarget;

/// Headless runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Serve RNG seed (`None` seeds from entropy)
    pub seed: Option<u64>,
    /// Frames to simulate
    pub frames: u32,
    /// Seconds per simulated frame
    pub frame_dt: f32,
    /// What the scripted pointer steers
    pub pointer_target: PointerTarget,

    // === Scripted pointer ===
    /// Whether the runner sweeps a pointer up and down the screen
    pub pointer: bool,
    /// Screen size the pointer is expressed in (pixels)
    pub screen_width: f32,
    pub screen_height: f32,
    /// Full up-and-down sweeps per second
    pub sweep_hz: f32,

    /// Print the final match state as JSON
    pub snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frames: 60 * 60,
            frame_dt: 1.0 / 60.0,
            pointer_target: PointerTarget::Ball,

            pointer: true,
            screen_width: 480.0,
            screen_height: 320.0,
            sweep_hz: 0.25,

            snapshot: false,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if !(self.frame_dt.is_finite() && self.frame_dt >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "frame_dt",
                reason: format!("must be a non-negative number, got {}", self.frame_dt),
            });
        }
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "screen_width/screen_height",
                reason: "screen size must be positive".to_string(),
            });
        }
        Ok(())
    }
}
