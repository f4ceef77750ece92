//! Collision detection and response
//!
//! Deliberately coarse: each test checks a single point of the ball against
//! an axis-aligned rectangle with strict bounds. The floor test uses the
//! ball's center x and bottom edge; the brick test uses center x and top
//! edge. Both are gameplay contracts, not approximations waiting for a fix.

use super::state::{Ball, Brick, Floor};
use crate::config::Playfield;

/// Bounce the ball off the floor.
///
/// On contact the ball is snapped to rest on top of the floor so it cannot
/// sink into it on the following tick. Returns true on contact.
pub fn resolve_floor(ball: &mut Ball, floor: &Floor) -> bool {
    let rect = floor.rect();
    if rect.spans_x(ball.pos.x) && rect.spans_y(ball.bottom()) {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = floor.y - ball.radius;
        return true;
    }
    false
}

/// Break every unhit brick the ball's top edge is inside.
///
/// Does not stop at the first hit: overlapping bricks all break on the same
/// tick and each one flips the vertical velocity. Returns the number of
/// bricks destroyed.
pub fn resolve_bricks(ball: &mut Ball, bricks: &mut [Brick]) -> u32 {
    let mut destroyed = 0;

    for brick in bricks.iter_mut().filter(|b| !b.hit) {
        if brick.rect.spans_x(ball.pos.x) && brick.rect.spans_y(ball.top()) {
            brick.hit = true;
            ball.vel.y = -ball.vel.y;
            destroyed += 1;
        }
    }

    destroyed
}

/// The ball has fallen entirely below the playfield
pub fn is_lost(ball: &Ball, playfield: &Playfield) -> bool {
    ball.top() > playfield.height
}

/// Every brick in the batch is destroyed
pub fn is_level_complete(bricks: &[Brick]) -> bool {
    bricks.iter().all(|b| b.hit)
}
