//! Brick Bounce - A bouncing ball brick breaker with an upgrade shop
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, modes, shop)
//! - `config`: Immutable game configuration (playfield, palette, shop catalog)
//! - `platform`: Rendering/input/timing collaborator traits
//! - `renderer`: Scene drawing and vertex batching
//! - `term`: Terminal front-end (crossterm)
//! - `game`: Outer frame loop

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod term;

pub use config::{ConfigError, GameConfig, Palette, Playfield};
pub use game::run;

/// Game configuration constants
pub mod consts {
    /// Ball radius (pixels)
    pub const BALL_RADIUS: f32 = 20.0;
    /// Starting ball speed (pixels per tick, per axis)
    pub const BASE_SPEED: f32 = 5.0;
    /// Speed added to the next ball for every cleared level
    pub const SPEED_PER_LEVEL: f32 = 1.0;

    /// Floor (player platform) defaults
    pub const FLOOR_WIDTH: f32 = 100.0;
    pub const FLOOR_HEIGHT: f32 = 20.0;
    pub const FLOOR_SPEED: f32 = 5.0;
    /// Gap between the floor and the bottom of the playfield
    pub const FLOOR_BOTTOM_MARGIN: f32 = 10.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_ROWS: u32 = 4;
    /// Columns on level 1 are BRICK_BASE_COLUMNS + 1
    pub const BRICK_BASE_COLUMNS: u32 = 5;
    pub const BRICK_COLUMN_SPACING: f32 = 120.0;
    pub const BRICK_ROW_SPACING: f32 = 30.0;
    pub const BRICK_ORIGIN: f32 = 50.0;

    /// Score awarded per destroyed brick
    pub const BRICK_REWARD: u64 = 10;
    /// Score units per shop coin shown in the HUD
    pub const SCORE_PER_COIN: u64 = 10;

    /// Default frame rate cap
    pub const TARGET_FPS: u32 = 60;
}
