//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod shop;
pub mod state;
pub mod tick;

pub use collision::{is_level_complete, is_lost, resolve_bricks, resolve_floor};
pub use level::{LevelError, brick_grid, create_bricks};
pub use rect::Rect;
pub use shop::{Item, ItemEffect, MAX_SHOP_SLOTS, purchase_pass};
pub use state::{Ball, Brick, Floor, GameMode, GameState};
pub use tick::{TickInput, TickOutcome, tick};
