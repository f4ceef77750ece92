//! Platform abstraction layer
//!
//! The simulation never touches a window, a terminal or a clock directly.
//! Front-ends implement these traits:
//! - `Renderer`: immediate-mode drawing in playfield pixels
//! - `InputSource`: held-key snapshot polled once per frame
//! - `FrameClock`: frame rate cap

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{MAX_SHOP_SLOTS, TickInput};

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for vertex data
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Text sizes used by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Titles ("Game Over!", "Shop")
    Large,
    /// HUD and menu lines
    Normal,
}

impl TextSize {
    /// Nominal line height in playfield pixels
    pub fn line_height(self) -> f32 {
        match self {
            TextSize::Large => 74.0,
            TextSize::Normal => 36.0,
        }
    }
}

/// Where a text string is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    /// Top-left corner at (x, y)
    TopLeft(f32, f32),
    /// Centered on (x, y)
    Center(f32, f32),
}

/// Keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Escape,
    Space,
    /// Digit `1 + slot`
    Buy(usize),
}

/// Drawing collaborator. Coordinates are playfield pixels, y down.
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn draw_rect(&mut self, color: Color, x: f32, y: f32, w: f32, h: f32);
    fn draw_circle(&mut self, color: Color, x: f32, y: f32, r: f32);
    fn draw_text(&mut self, text: &str, anchor: TextAnchor, size: TextSize, color: Color);
    /// Show everything drawn since the last `clear`
    fn present(&mut self) -> Result<(), PlatformError>;
}

/// Input collaborator
pub trait InputSource {
    /// Pump pending platform events. Call once per frame before reading keys.
    fn poll(&mut self) -> Result<(), PlatformError>;
    fn is_key_held(&self, key: Key) -> bool;
    fn quit_requested(&self) -> bool;

    /// Held-key snapshot for one tick
    fn snapshot(&self) -> TickInput {
        let mut buy = [false; MAX_SHOP_SLOTS];
        for (slot, held) in buy.iter_mut().enumerate() {
            *held = self.is_key_held(Key::Buy(slot));
        }
        TickInput {
            left: self.is_key_held(Key::Left),
            right: self.is_key_held(Key::Right),
            escape: self.is_key_held(Key::Escape),
            space: self.is_key_held(Key::Space),
            buy,
            quit: self.quit_requested(),
        }
    }
}

/// Timing collaborator
pub trait FrameClock {
    /// Sleep as long as needed to hold the loop at `fps` frames per second
    fn delay_to_maintain_rate(&mut self, fps: u32);
}
