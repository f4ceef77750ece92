//! Game configuration
//!
//! Built once at startup and passed by reference to the simulation and the
//! renderer. Nothing in here changes while the game runs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::platform::Color;
use crate::sim::{Item, ItemEffect};

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Size of the 2D coordinate space all entities live in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Named colors used by the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub ball: Color,
    pub floor: Color,
    pub brick: Color,
    pub available: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            text: Color::WHITE,
            ball: Color::RED,
            floor: Color::GREEN,
            brick: Color::BLUE,
            available: Color::GREEN,
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window/terminal title
    pub caption: String,
    pub playfield: Playfield,
    /// Frame rate cap (ticks per second)
    pub target_fps: u32,
    /// Ball speed on level 1
    pub base_speed: f32,
    pub palette: Palette,
    /// Shop catalog, in key order (first item is bought with `1`)
    pub shop_items: Vec<Item>,
    /// Fixed RNG seed; a time-derived seed is used when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            caption: "Bouncing Ball Game".to_string(),
            playfield: Playfield::default(),
            target_fps: TARGET_FPS,
            base_speed: BASE_SPEED,
            palette: Palette::default(),
            shop_items: default_shop_items(),
            seed: None,
        }
    }
}

/// The stock shop catalog
pub fn default_shop_items() -> Vec<Item> {
    vec![
        Item::new("Speed Boost", 50, ItemEffect::SpeedBoost),
        Item::new("Jump Height Boost", 30, ItemEffect::JumpBoost),
    ]
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Playfield { width, height } = self.playfield;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "playfield must be positive, got {width}x{height}"
            )));
        }
        if width < FLOOR_WIDTH || width < 2.0 * BALL_RADIUS || height < 2.0 * BALL_RADIUS {
            return Err(ConfigError::Invalid(format!(
                "playfield {width}x{height} too small for the ball and floor"
            )));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be non-zero".into()));
        }
        if !(self.base_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "base_speed must be positive, got {}",
                self.base_speed
            )));
        }
        if let Some(item) = self.shop_items.iter().find(|i| i.name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "shop item with cost {} has an empty name",
                item.cost
            )));
        }
        Ok(())
    }
}
