//! Fixed-rate simulation tick
//!
//! One call per frame. Dispatches on the current mode; drawing happens
//! separately after the tick.

use super::collision::{is_level_complete, is_lost, resolve_bricks, resolve_floor};
use super::shop::{MAX_SHOP_SLOTS, purchase_pass};
use super::state::{GameMode, GameState};
use crate::consts::BRICK_REWARD;

/// Snapshot of held keys for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Leave the shop
    pub escape: bool,
    /// Open the shop from the game over screen
    pub space: bool,
    /// Digit keys `1`..=`9`, index 0 is `1`
    pub buy: [bool; MAX_SHOP_SLOTS],
    /// Window close / Ctrl-C
    pub quit: bool,
}

impl TickInput {
    pub fn buy_held(&self, slot: usize) -> bool {
        self.buy.get(slot).copied().unwrap_or(false)
    }
}

/// What the frame loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    if input.quit {
        log::info!("Quit requested at tick {}", state.time_ticks);
        return TickOutcome::Quit;
    }

    state.time_ticks += 1;

    match state.mode {
        GameMode::Playing => tick_playing(state, input),

        GameMode::GameOver => {
            if input.space {
                log::info!("Entering shop with {} to spend", state.score);
                state.mode = GameMode::Shop {
                    balance: state.score,
                };
            }
        }

        GameMode::Shop { mut balance } => {
            purchase_pass(
                &mut balance,
                &state.items,
                |slot| input.buy_held(slot),
                &mut state.ball,
            );
            state.mode = GameMode::Shop { balance };

            // Leaving the shop always starts a fresh run
            if input.escape {
                log::info!("Leaving shop with {} unspent", balance);
                state.restart();
            }
        }
    }

    TickOutcome::Continue
}

fn tick_playing(state: &mut GameState, input: &TickInput) {
    let playfield = state.playfield;

    state.ball.advance(&playfield);
    state.floor.advance(input.left, input.right, &playfield);

    resolve_floor(&mut state.ball, &state.floor);

    // The rest of the tick still runs on the losing frame
    if is_lost(&state.ball, &playfield) {
        log::info!(
            "Game over at level {} with score {}",
            state.level,
            state.score
        );
        state.mode = GameMode::GameOver;
    }

    let destroyed = resolve_bricks(&mut state.ball, &mut state.bricks);
    if destroyed > 0 {
        state.score += u64::from(destroyed) * BRICK_REWARD;
        log::debug!("{} brick(s) destroyed, score {}", destroyed, state.score);
    }

    if is_level_complete(&state.bricks) {
        state.advance_level();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::{Ball, Brick};
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(&GameConfig::default(), 12345)
    }

    fn held(f: impl FnOnce(&mut TickInput)) -> TickInput {
        let mut input = TickInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_quit_in_every_mode() {
        let quit = held(|i| i.quit = true);
        for mode in [
            GameMode::Playing,
            GameMode::GameOver,
            GameMode::Shop { balance: 40 },
        ] {
            let mut state = state();
            state.mode = mode;
            let ball = state.ball.clone();
            assert_eq!(tick(&mut state, &quit), TickOutcome::Quit);
            assert_eq!(state.mode, mode);
            assert_eq!(state.ball, ball);
            assert_eq!(state.time_ticks, 0);
        }
    }

    #[test]
    fn test_playing_moves_ball_and_floor() {
        let mut state = state();
        state.ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(5.0, 5.0));
        let input = held(|i| i.left = true);
        assert_eq!(tick(&mut state, &input), TickOutcome::Continue);
        assert_eq!(state.ball.pos, Vec2::new(405.0, 305.0));
        assert_eq!(state.floor.x, 345.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_brick_hit_scores() {
        let mut state = state();
        // A second brick keeps the level from completing
        state.bricks = vec![Brick::new(50.0, 50.0), Brick::new(500.0, 50.0)];
        state.ball = Ball::new(Vec2::new(80.0, 89.0), Vec2::new(0.0, -5.0));
        tick(&mut state, &TickInput::default());
        assert!(state.bricks[0].hit);
        assert!(!state.bricks[1].hit);
        assert_eq!(state.score, 10);
        assert_eq!(state.ball.vel.y, 5.0);
        assert_eq!(state.level.get(), 1);
    }

    #[test]
    fn test_last_brick_advances_level() {
        let mut state = state();
        state.bricks = vec![Brick::new(50.0, 50.0)];
        state.ball = Ball::new(Vec2::new(80.0, 89.0), Vec2::new(0.0, -5.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 10);
        assert_eq!(state.level.get(), 2);
        assert_eq!(state.speed, 6.0);
        assert_eq!(state.bricks.len(), 28);
        assert!(state.bricks.iter().all(|b| !b.hit));
        assert_eq!(state.ball.vel.x.abs(), 6.0);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_fall_is_game_over() {
        let mut state = state();
        state.ball = Ball::new(Vec2::new(100.0, 618.0), Vec2::new(0.0, 5.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, GameMode::GameOver);

        // Game over freezes the ball and ignores movement keys
        let pos = state.ball.pos;
        let floor_x = state.floor.x;
        tick(&mut state, &held(|i| i.right = true));
        assert_eq!(state.ball.pos, pos);
        assert_eq!(state.floor.x, floor_x);
        assert_eq!(state.mode, GameMode::GameOver);
    }

    #[test]
    fn test_floor_catches_ball() {
        let mut state = state();
        state.ball = Ball::new(Vec2::new(400.0, 550.0), Vec2::new(0.0, 5.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.y, -5.0);
        assert_eq!(state.ball.pos.y, 550.0);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_shop_cycle() {
        let mut state = state();
        state.mode = GameMode::GameOver;
        state.score = 100;

        // Only space opens the shop
        tick(&mut state, &held(|i| i.escape = true));
        assert_eq!(state.mode, GameMode::GameOver);
        tick(&mut state, &held(|i| i.space = true));
        assert_eq!(state.mode, GameMode::Shop { balance: 100 });

        state.ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(5.0, 5.0));
        tick(&mut state, &held(|i| i.buy[0] = true));
        assert_eq!(state.mode, GameMode::Shop { balance: 50 });
        assert_eq!(state.ball.vel, Vec2::new(7.5, 7.5));
        // Score is untouched while shopping
        assert_eq!(state.score, 100);

        // Still held: buys again on the next tick
        tick(&mut state, &held(|i| i.buy[0] = true));
        assert_eq!(state.mode, GameMode::Shop { balance: 0 });
        assert_eq!(state.ball.vel, Vec2::new(11.25, 11.25));

        // Broke: nothing more to buy
        tick(&mut state, &held(|i| i.buy[0] = true));
        assert_eq!(state.mode, GameMode::Shop { balance: 0 });

        tick(&mut state, &held(|i| i.escape = true));
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.level.get(), 1);
        assert_eq!(state.speed, 5.0);
        assert_eq!(state.ball.vel.x.abs(), 5.0);
        assert_eq!(state.bricks.len(), 24);
    }

    #[test]
    fn test_purchase_then_escape_same_tick() {
        let mut state = state();
        state.mode = GameMode::Shop { balance: 30 };
        let input = held(|i| {
            i.buy[1] = true;
            i.escape = true;
        });
        tick(&mut state, &input);
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.items.len(), 2);
    }
}
