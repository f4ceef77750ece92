//! Level factory: brick layout per level

use std::num::NonZeroU32;

use thiserror::Error;

use super::state::Brick;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level must be at least 1, got {0}")]
    InvalidLevel(u32),
}

/// Build the brick batch for `level`, rejecting level 0
pub fn create_bricks(level: u32) -> Result<Vec<Brick>, LevelError> {
    let level = NonZeroU32::new(level).ok_or(LevelError::InvalidLevel(level))?;
    Ok(brick_grid(level))
}

/// Grid of `(5 + level)` columns by 4 rows, column-major.
///
/// Positions are fixed-spacing and not clamped to the playfield, so later
/// levels run off the right edge.
pub fn brick_grid(level: NonZeroU32) -> Vec<Brick> {
    let columns = BRICK_BASE_COLUMNS.saturating_add(level.get());
    let mut bricks = Vec::with_capacity((columns * BRICK_ROWS) as usize);

    for i in 0..columns {
        for j in 0..BRICK_ROWS {
            let x = i as f32 * BRICK_COLUMN_SPACING + BRICK_ORIGIN;
            let y = j as f32 * BRICK_ROW_SPACING + BRICK_ORIGIN;
            bricks.push(Brick::new(x, y));
        }
    }

    bricks
}
