//! Session settings
//!
//! Loaded from an optional JSON file by the native runner. Missing keys fall
//! back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Size;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Difficulty-independent knobs for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Visible area in screen units
    pub width: i32,
    pub height: i32,

    /// Seed for every random draw in the session
    pub seed: u64,

    /// Distance beyond the visible area at which entities are discarded
    pub despawn_margin: i32,

    // === Background ===
    /// Stars in the nearest parallax layer
    pub star_count: usize,
    /// Scroll speed of the farthest layer
    pub star_speed: i32,

    /// Lives the player starts each run with
    pub player_lives: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            seed: 0x4a41_4449_43,
            despawn_margin: DESPAWN_MARGIN,
            star_count: STAR_COUNT,
            star_speed: STAR_BASE_SPEED,
            player_lives: PLAYER_LIVES,
        }
    }
}

impl Settings {
    pub fn resolution(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a JSON settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject configurations the simulation cannot run with
    ///
    /// The player's movement box is inset from the screen edges and enemies
    /// spawn away from the top and bottom, so the screen must leave room for
    /// both. Upper limits keep every derived coordinate inside `i32`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let min_width = 2 * PLAYER_BOX_INSET + 2 * PLAYER_SIZE;
        check_range("width", self.width, min_width, MAX_SCREEN_SIZE)?;
        let min_height = 2 * ENEMY_SPAWN_MARGIN + 1;
        check_range("height", self.height, min_height, MAX_SCREEN_SIZE)?;
        check_range("despawn_margin", self.despawn_margin, 0, MAX_DESPAWN_MARGIN)?;
        check_range("star_speed", self.star_speed, 0, MAX_STAR_SPEED)?;
        if self.star_count > MAX_STAR_COUNT {
            return Err(SettingsError::Invalid(format!(
                "star_count {} is above {}",
                self.star_count, MAX_STAR_COUNT
            )));
        }
        if self.player_lives < 1 {
            return Err(SettingsError::Invalid("player_lives must be at least 1".into()));
        }
        Ok(())
    }
}

fn check_range(name: &str, value: i32, min: i32, max: i32) -> Result<(), SettingsError> {
    if value < min {
        return Err(SettingsError::Invalid(format!("{name} {value} is below {min}")));
    }
    if value > max {
        return Err(SettingsError::Invalid(format!("{name} {value} is above {max}")));
    }
    Ok(())
}
