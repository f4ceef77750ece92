//! Brick Bounce entry point
//!
//! Runs the game in the terminal. An optional first argument names a JSON
//! config file; `RUST_LOG` controls logging.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use brick_bounce::sim::GameState;
use brick_bounce::term::{SleepClock, TerminalInput, TerminalRenderer};
use brick_bounce::{GameConfig, run};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Brick Bounce starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            GameConfig::load(&path).with_context(|| format!("failed to load config {path}"))?
        }
        None => GameConfig::default(),
    };

    let seed = config.seed.unwrap_or_else(time_seed);
    let mut state = GameState::new(&config, seed);
    log::info!("Game initialized with seed: {}", seed);

    let mut term = TerminalRenderer::new(config.playfield);
    let release_events = term
        .enter(&config.caption)
        .context("failed to set up terminal")?;
    let mut input = TerminalInput::new(release_events);
    let mut clock = SleepClock::new();

    let result = run(&config, &mut state, &mut term, &mut input, &mut clock);

    // Always try to restore terminal state.
    let _ = term.exit();
    result.context("game loop failed")?;

    println!("Final score: {} (level {})", state.score, state.level);
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
