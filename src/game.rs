//! Outer frame loop
//!
//! Poll input, tick, draw, present, wait. Repeats until a tick reports quit.

use crate::config::GameConfig;
use crate::platform::{FrameClock, InputSource, PlatformError, Renderer};
use crate::renderer::draw_frame;
use crate::sim::{GameState, TickOutcome, tick};

/// Run the game until quit. Returns the number of frames drawn.
pub fn run<R, I, C>(
    config: &GameConfig,
    state: &mut GameState,
    renderer: &mut R,
    input: &mut I,
    clock: &mut C,
) -> Result<u64, PlatformError>
where
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
    C: FrameClock + ?Sized,
{
    log::info!(
        "{} running at {} fps (seed {})",
        config.caption,
        config.target_fps,
        state.seed
    );

    let mut frames = 0;
    loop {
        input.poll()?;
        let snapshot = input.snapshot();

        if tick(state, &snapshot) == TickOutcome::Quit {
            break;
        }

        draw_frame(state, config, renderer)?;
        frames += 1;

        clock.delay_to_maintain_rate(config.target_fps);
    }

    log::info!("Stopped after {} frames, final score {}", frames, state.score);
    Ok(frames)
}
