//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`].

use std::num::NonZeroU32;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::brick_grid;
use super::rect::Rect;
use super::shop::Item;
use crate::config::{GameConfig, Playfield};
use crate::consts::*;

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Active gameplay
    Playing,
    /// Ball fell off the bottom; waiting for the shop key
    GameOver,
    /// Spending score between runs. `balance` starts at the score the run
    /// ended with and shrinks with every purchase.
    Shop { balance: u64 },
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
        }
    }

    /// Spawn a ball somewhere in the upper half of the playfield, heading in a
    /// random diagonal direction at `speed` on each axis.
    pub fn spawn<R: Rng>(rng: &mut R, speed: f32, playfield: &Playfield) -> Self {
        let r = BALL_RADIUS as i32;
        let max_x = ((playfield.width - BALL_RADIUS) as i32).max(r);
        let max_y = (playfield.height as i32 / 2).max(r);

        let x = rng.random_range(r..=max_x) as f32;
        let y = rng.random_range(r..=max_y) as f32;
        let vx = if rng.random_bool(0.5) { speed } else { -speed };
        let vy = if rng.random_bool(0.5) { speed } else { -speed };

        Self::new(Vec2::new(x, y), Vec2::new(vx, vy))
    }

    /// Move one tick and bounce off the side and top walls.
    ///
    /// The wall test runs after the move on every call, so a ball that sits
    /// on a wall after moving flips again on the next call.
    pub fn advance(&mut self, playfield: &Playfield) {
        self.pos += self.vel;

        if self.pos.x <= self.radius || self.pos.x >= playfield.width - self.radius {
            self.vel.x = -self.vel.x;
        }
        // Only the top wall bounces; the bottom is open
        if self.pos.y <= self.radius {
            self.vel.y = -self.vel.y;
        }
    }

    /// Y of the top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    /// Y of the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The player's platform at the bottom of the playfield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Floor {
    /// Center the floor horizontally, just above the bottom edge
    pub fn new(playfield: &Playfield) -> Self {
        Self {
            x: (playfield.width / 2.0).floor() - (FLOOR_WIDTH / 2.0).floor(),
            y: playfield.height - FLOOR_HEIGHT - FLOOR_BOTTOM_MARGIN,
            width: FLOOR_WIDTH,
            height: FLOOR_HEIGHT,
            speed: FLOOR_SPEED,
        }
    }

    /// Apply one tick of held direction keys. Holding both cancels out.
    pub fn advance(&mut self, left: bool, right: bool, playfield: &Playfield) {
        let max_x = (playfield.width - self.width).max(0.0);

        if left && self.x > 0.0 {
            self.x -= self.speed;
        }
        if right && self.x < max_x {
            self.x += self.speed;
        }
        self.x = self.x.clamp(0.0, max_x);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A single brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Destroyed bricks stay in the batch until the level is replaced
    pub hit: bool,
}

impl Brick {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            hit: false,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub playfield: Playfield,
    /// Ball speed a fresh run starts with
    pub base_speed: f32,
    pub mode: GameMode,
    /// Current level (1-based)
    pub level: NonZeroU32,
    /// Speed of the next spawned ball
    pub speed: f32,
    pub score: u64,
    pub ball: Ball,
    pub floor: Floor,
    /// Current level batch
    pub bricks: Vec<Brick>,
    /// Shop catalog, kept across restarts
    pub items: Vec<Item>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let playfield = config.playfield;
        let ball = Ball::spawn(&mut rng, config.base_speed, &playfield);

        Self {
            seed,
            rng,
            playfield,
            base_speed: config.base_speed,
            mode: GameMode::Playing,
            level: NonZeroU32::MIN,
            speed: config.base_speed,
            score: 0,
            ball,
            floor: Floor::new(&playfield),
            bricks: brick_grid(NonZeroU32::MIN),
            items: config.shop_items.clone(),
            time_ticks: 0,
        }
    }

    /// Shop currency shown in the HUD
    pub fn coins(&self) -> u64 {
        self.score / SCORE_PER_COIN
    }

    /// Replace the ball with a fresh one at the current speed
    pub fn spawn_ball(&mut self) {
        self.ball = Ball::spawn(&mut self.rng, self.speed, &self.playfield);
    }

    /// Move on to the next level: faster ball, bigger batch
    pub fn advance_level(&mut self) {
        self.level = self.level.saturating_add(1);
        self.speed += SPEED_PER_LEVEL;
        self.spawn_ball();
        self.bricks = brick_grid(self.level);
        log::info!(
            "Level {} ({} bricks, speed {})",
            self.level,
            self.bricks.len(),
            self.speed
        );
    }

    /// Start a fresh run. The floor and the shop catalog carry over.
    pub fn restart(&mut self) {
        self.mode = GameMode::Playing;
        self.score = 0;
        self.level = NonZeroU32::MIN;
        self.speed = self.base_speed;
        self.spawn_ball();
        self.bricks = brick_grid(self.level);
        log::info!("Restarted at level 1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn playfield() -> Playfield {
        Playfield::default()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(&GameConfig::default(), 42);
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.level.get(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 5.0);
        assert_eq!(state.bricks.len(), 24);
        assert_eq!(state.floor.x, 350.0);
        assert_eq!(state.floor.y, 570.0);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_same_seed_same_ball() {
        let a = GameState::new(&GameConfig::default(), 99999);
        let b = GameState::new(&GameConfig::default(), 99999);
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let ball = Ball::spawn(&mut rng, 6.0, &playfield());
            assert!(ball.pos.x >= 20.0 && ball.pos.x <= 780.0);
            assert!(ball.pos.y >= 20.0 && ball.pos.y <= 300.0);
            assert_eq!(ball.pos.x.fract(), 0.0);
            assert_eq!(ball.vel.x.abs(), 6.0);
            assert_eq!(ball.vel.y.abs(), 6.0);
            assert_eq!(ball.radius, 20.0);
        }
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(5.0, -5.0));
        ball.advance(&playfield());
        assert_eq!(ball.pos, Vec2::new(405.0, 295.0));
        assert_eq!(ball.vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_ball_top_wall_bounce() {
        let mut ball = Ball::new(Vec2::new(400.0, 24.0), Vec2::new(5.0, -5.0));
        ball.advance(&playfield());
        assert_eq!(ball.vel.y, 5.0);
    }

    #[test]
    fn test_ball_no_bottom_bounce() {
        let mut ball = Ball::new(Vec2::new(400.0, 590.0), Vec2::new(5.0, 5.0));
        ball.advance(&playfield());
        ball.advance(&playfield());
        assert_eq!(ball.vel.y, 5.0);
        assert_eq!(ball.pos.y, 600.0);
    }

    #[test]
    fn test_ball_stuck_on_wall_flips_every_call() {
        // Slow enough that one step never carries it clear of the wall
        let mut ball = Ball::new(Vec2::new(17.0, 300.0), Vec2::new(3.0, 0.0));
        ball.advance(&playfield()); // x = 20 -> flip to -3
        assert_eq!(ball.vel.x, -3.0);
        ball.advance(&playfield()); // x = 17 -> flip to 3
        assert_eq!(ball.vel.x, 3.0);
        ball.advance(&playfield()); // x = 20 -> flip again
        assert_eq!(ball.vel.x, -3.0);
    }

    #[test]
    fn test_floor_both_keys_cancel() {
        let mut floor = Floor::new(&playfield());
        floor.advance(true, true, &playfield());
        assert_eq!(floor.x, 350.0);
    }

    #[test]
    fn test_floor_stops_at_edges() {
        let mut floor = Floor::new(&playfield());
        for _ in 0..200 {
            floor.advance(true, false, &playfield());
        }
        assert_eq!(floor.x, 0.0);
        for _ in 0..200 {
            floor.advance(false, true, &playfield());
        }
        assert_eq!(floor.x, 700.0);
        assert_eq!(floor.y, 570.0);
    }

    #[test]
    fn test_restart_keeps_catalog() {
        let mut state = GameState::new(&GameConfig::default(), 1);
        state.score = 120;
        state.advance_level();
        state.advance_level();
        state.mode = GameMode::Shop { balance: 70 };
        state.restart();
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.level.get(), 1);
        assert_eq!(state.speed, 5.0);
        assert_eq!(state.ball.vel.x.abs(), 5.0);
        assert_eq!(state.bricks.len(), 24);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_advance_level() {
        let mut state = GameState::new(&GameConfig::default(), 3);
        state.advance_level();
        assert_eq!(state.level.get(), 2);
        assert_eq!(state.speed, 6.0);
        assert_eq!(state.ball.vel.y.abs(), 6.0);
        assert_eq!(state.bricks.len(), 28);
        assert!(state.bricks.iter().all(|b| !b.hit));
    }

    #[test]
    fn test_coins() {
        let mut state = GameState::new(&GameConfig::default(), 3);
        state.score = 95;
        assert_eq!(state.coins(), 9);
    }

    proptest! {
        #[test]
        fn prop_floor_stays_in_bounds(keys in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..400)) {
            let field = playfield();
            let mut floor = Floor::new(&field);
            for (left, right) in keys {
                floor.advance(left, right, &field);
                prop_assert!(floor.x >= 0.0 && floor.x <= field.width - floor.width);
            }
        }

        #[test]
        fn prop_wall_contact_flips_once_per_call(
            x in prop_oneof![0.0f32..19.0, 781.0f32..800.0],
            y in 100.0f32..500.0,
            vx in -8.0f32..8.0,
        ) {
            // Start one step back so the post-move position is `x`
            let mut ball = Ball::new(Vec2::new(x - vx, y), Vec2::new(vx, 0.0));
            ball.advance(&playfield());
            prop_assert_eq!(ball.vel.x, -vx);
        }
    }
}
