//! TerminalRenderer: draws frames on a real terminal.
//!
//! Every `present` redraws the whole canvas, batching runs of same-styled
//! cells into one style change.

use std::io::{self, Write};

use crossterm::{
    QueueableCommand, cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal,
};

use super::canvas::{Canvas, Cell};
use crate::config::Playfield;
use crate::platform::{Color, PlatformError, Renderer, TextAnchor, TextSize};

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    canvas: Canvas,
    playfield: Playfield,
    /// Whether keyboard enhancement was pushed and must be popped on exit
    enhanced: bool,
}

impl TerminalRenderer {
    pub fn new(playfield: Playfield) -> Self {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        Self {
            stdout: io::stdout(),
            canvas: Canvas::new(cols, rows, &playfield),
            playfield,
            enhanced: false,
        }
    }

    /// Switch the terminal into game mode.
    ///
    /// Returns true when the terminal will report key releases.
    pub fn enter(&mut self, title: &str) -> Result<bool, PlatformError> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(terminal::SetTitle(title))?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            self.stdout.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
            self.enhanced = true;
        }
        self.stdout.flush()?;

        log::debug!("Terminal entered (key release events: {})", self.enhanced);
        Ok(self.enhanced)
    }

    /// Restore the terminal
    pub fn exit(&mut self) -> Result<(), PlatformError> {
        if self.enhanced {
            self.stdout.queue(PopKeyboardEnhancementFlags)?;
            self.enhanced = false;
        }
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn redraw(&mut self) -> io::Result<()> {
        let Self { stdout, canvas, .. } = self;
        let mut style: Option<(Color, Color, bool)> = None;

        for (y, row) in canvas.rows_iter().enumerate() {
            stdout.queue(cursor::MoveTo(0, y as u16))?;
            for cell in row {
                let cell_style = (cell.fg, cell.bg, cell.bold);
                if style != Some(cell_style) {
                    apply_style(stdout, cell)?;
                    style = Some(cell_style);
                }
                stdout.queue(Print(cell.ch))?;
            }
        }

        stdout.queue(ResetColor)?;
        stdout.flush()
    }
}

fn apply_style(out: &mut io::Stdout, cell: &Cell) -> io::Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(term_color(cell.fg)))?;
    out.queue(SetBackgroundColor(term_color(cell.bg)))?;
    if cell.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

impl Renderer for TerminalRenderer {
    fn clear(&mut self, color: Color) {
        let (cols, rows) = terminal::size().unwrap_or((self.canvas.cols(), self.canvas.rows()));
        self.canvas.resize(cols, rows, &self.playfield);
        self.canvas.clear(color);
    }

    fn draw_rect(&mut self, color: Color, x: f32, y: f32, w: f32, h: f32) {
        self.canvas.fill_rect(color, x, y, w, h);
    }

    fn draw_circle(&mut self, color: Color, x: f32, y: f32, r: f32) {
        self.canvas.fill_circle(color, x, y, r);
    }

    fn draw_text(&mut self, text: &str, anchor: TextAnchor, size: TextSize, color: Color) {
        self.canvas.put_text(text, anchor, size, color);
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        self.redraw()?;
        Ok(())
    }
}
