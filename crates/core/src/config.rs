//! Game configuration
//!
//! Every field has a default matching the classic 10x20 setup, so an empty
//! TOML document is a valid config:
//!
//! ```toml
//! width = 10
//! height = 20
//! gravity_ms = 500
//! points_per_line = 100
//! # spawn_x defaults to width / 2 - 2
//! spawn_y = 0
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_MS, MASK_SIZE, POINTS_PER_LINE};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board width in cells
    pub width: u16,
    /// Board height in cells
    pub height: u16,
    /// Milliseconds between gravity ticks
    pub gravity_ms: u64,
    /// Score added for each cleared row
    pub points_per_line: u32,
    /// Spawn column of the piece box; `None` centers it
    pub spawn_x: Option<i32>,
    /// Spawn row of the piece box; never above row 0
    pub spawn_y: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            gravity_ms: GRAVITY_MS,
            points_per_line: POINTS_PER_LINE,
            spawn_x: None,
            spawn_y: 0,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Reject configs that cannot hold a piece box or never tick
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = MASK_SIZE as u16;
        if self.width < min || self.height < min {
            return Err(ConfigError::Invalid(format!(
                "board must be at least {min}x{min}, got {}x{}",
                self.width, self.height
            )));
        }
        if self.gravity_ms == 0 {
            return Err(ConfigError::Invalid("gravity_ms must be positive".into()));
        }

        let spawn_x = self.spawn_x();
        let max_x = self.width as i32 - MASK_SIZE as i32;
        if !(0..=max_x).contains(&spawn_x) {
            return Err(ConfigError::Invalid(format!(
                "spawn_x {spawn_x} puts the piece box outside columns 0..{}",
                self.width
            )));
        }
        let max_y = self.height as i32 - MASK_SIZE as i32;
        // Pieces only move down, so a spawn row of 0 or more keeps every
        // locked cell on the board.
        if !(0..=max_y).contains(&self.spawn_y) {
            return Err(ConfigError::Invalid(format!(
                "spawn_y {} must be in 0..={max_y}",
                self.spawn_y
            )));
        }
        Ok(())
    }

    /// Resolved spawn column
    pub fn spawn_x(&self) -> i32 {
        self.spawn_x
            .unwrap_or(self.width as i32 / 2 - MASK_SIZE as i32 / 2)
    }

    pub fn gravity_delay(&self) -> Duration {
        Duration::from_millis(self.gravity_ms)
    }
}
