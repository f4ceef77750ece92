//! Scene drawing for each game mode
//!
//! Layout follows the classic screens: HUD in the top-left, titles centered.

use crate::config::GameConfig;
use crate::platform::{PlatformError, Renderer, TextAnchor, TextSize};
use crate::sim::{GameMode, GameState, MAX_SHOP_SLOTS};

/// Draw and present one frame for the current mode
pub fn draw_frame<R: Renderer + ?Sized>(
    state: &GameState,
    config: &GameConfig,
    renderer: &mut R,
) -> Result<(), PlatformError> {
    match state.mode {
        GameMode::Playing => draw_playing(state, config, renderer),
        GameMode::GameOver => draw_game_over(config, renderer),
        GameMode::Shop { balance } => draw_shop(state, balance, config, renderer),
    }
    renderer.present()
}

fn draw_playing<R: Renderer + ?Sized>(state: &GameState, config: &GameConfig, renderer: &mut R) {
    let palette = &config.palette;
    renderer.clear(palette.background);

    let ball = &state.ball;
    renderer.draw_circle(palette.ball, ball.pos.x, ball.pos.y, ball.radius);

    let floor = &state.floor;
    renderer.draw_rect(palette.floor, floor.x, floor.y, floor.width, floor.height);

    for brick in state.bricks.iter().filter(|b| !b.hit) {
        let r = brick.rect;
        renderer.draw_rect(palette.brick, r.x, r.y, r.width, r.height);
    }

    renderer.draw_text(
        &format!("Score: {}", state.score),
        TextAnchor::TopLeft(10.0, 10.0),
        TextSize::Normal,
        palette.text,
    );
    renderer.draw_text(
        &format!("Coins: {}", state.coins()),
        TextAnchor::TopLeft(10.0, 40.0),
        TextSize::Normal,
        palette.text,
    );
}

fn draw_game_over<R: Renderer + ?Sized>(config: &GameConfig, renderer: &mut R) {
    let palette = &config.palette;
    let cx = config.playfield.width / 2.0;
    let cy = config.playfield.height / 2.0;

    renderer.clear(palette.background);
    renderer.draw_text(
        "Game Over!",
        TextAnchor::Center(cx, cy - 30.0),
        TextSize::Large,
        palette.text,
    );
    renderer.draw_text(
        "Press SPACE to go to shop",
        TextAnchor::Center(cx, cy + 30.0),
        TextSize::Large,
        palette.text,
    );
}

fn draw_shop<R: Renderer + ?Sized>(
    state: &GameState,
    balance: u64,
    config: &GameConfig,
    renderer: &mut R,
) {
    let palette = &config.palette;
    let field = config.playfield;

    renderer.clear(palette.background);
    renderer.draw_text(
        "Shop",
        TextAnchor::Center(field.width / 2.0, field.height / 2.0 - 100.0),
        TextSize::Large,
        palette.text,
    );
    renderer.draw_text(
        &format!("Current Coins: {balance}"),
        TextAnchor::TopLeft(10.0, 10.0),
        TextSize::Normal,
        palette.text,
    );

    for (slot, item) in state.items.iter().enumerate().take(MAX_SHOP_SLOTS) {
        let y = 70.0 + slot as f32 * 30.0;
        renderer.draw_text(
            &format!("{} ({} coins)", item.name, item.cost),
            TextAnchor::TopLeft(10.0, y),
            TextSize::Normal,
            palette.text,
        );
        if item.affordable(balance) {
            renderer.draw_text(
                "Available",
                TextAnchor::TopLeft(300.0, y),
                TextSize::Normal,
                palette.available,
            );
        }
    }

    renderer.draw_text(
        "Press ESC to go back",
        TextAnchor::TopLeft(10.0, field.height - 50.0),
        TextSize::Normal,
        palette.text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Color;
    use crate::renderer::VertexBatch;

    fn setup() -> (GameState, GameConfig, VertexBatch) {
        let config = GameConfig::default();
        (GameState::new(&config, 5), config, VertexBatch::new())
    }

    #[test]
    fn test_playing_frame() {
        let (mut state, config, mut batch) = setup();
        state.score = 130;
        state.bricks[0].hit = true;
        state.bricks[5].hit = true;
        draw_frame(&state, &config, &mut batch).unwrap();

        let frame = batch.frame();
        assert_eq!(frame.clear_color, Some(Color::BLACK));
        // Hit bricks are not drawn
        assert_eq!(frame.vertices_in(Color::BLUE), 22 * 6);
        assert_eq!(frame.vertices_in(Color::RED), 24 * 3);
        // Floor and "Available" share green; only the floor is geometry
        assert_eq!(frame.vertices_in(Color::GREEN), 6);
        assert!(frame.has_text("Score: 130"));
        assert!(frame.has_text("Coins: 13"));
    }

    #[test]
    fn test_game_over_frame() {
        let (mut state, config, mut batch) = setup();
        state.mode = GameMode::GameOver;
        draw_frame(&state, &config, &mut batch).unwrap();

        let frame = batch.frame();
        assert!(frame.vertices.is_empty());
        assert!(frame.has_text("Game Over!"));
        assert!(frame.has_text("Press SPACE to go to shop"));
        assert_eq!(frame.labels[0].anchor, TextAnchor::Center(400.0, 270.0));
    }

    #[test]
    fn test_shop_frame_marks_affordable() {
        let (mut state, config, mut batch) = setup();
        state.mode = GameMode::Shop { balance: 40 };
        draw_frame(&state, &config, &mut batch).unwrap();

        let frame = batch.frame();
        assert!(frame.has_text("Current Coins: 40"));
        assert!(frame.has_text("Speed Boost (50 coins)"));
        assert!(frame.has_text("Jump Height Boost (30 coins)"));
        assert!(frame.has_text("Press ESC to go back"));

        // Only the 30-cost item is affordable, on its own row
        let available: Vec<_> = frame
            .labels
            .iter()
            .filter(|l| l.text == "Available")
            .collect();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].anchor, TextAnchor::TopLeft(300.0, 100.0));
        assert_eq!(available[0].color, Color::GREEN);
    }
}
