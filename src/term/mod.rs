//! Terminal front-end
//!
//! crossterm-backed implementations of the platform traits, so the game is
//! playable without a window system.

pub mod canvas;
pub mod clock;
pub mod input;
pub mod renderer;

pub use canvas::{Canvas, Cell};
pub use clock::SleepClock;
pub use input::TerminalInput;
pub use renderer::TerminalRenderer;
