//! Character-cell canvas
//!
//! Rasterizes playfield-pixel primitives onto a grid of terminal cells. A
//! cell is filled when its center lies inside the shape.

use crate::config::Playfield;
use crate::platform::{Color, TextAnchor, TextSize};

/// A single terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Cell {
    pub const fn blank(bg: Color) -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg,
            bold: false,
        }
    }
}

/// Grid of cells mapped onto the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    /// Playfield pixels per cell, horizontally and vertically
    scale: (f32, f32),
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16, playfield: &Playfield) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale: (
                playfield.width / cols as f32,
                playfield.height / rows as f32,
            ),
            cells: vec![Cell::blank(Color::BLACK); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Rebuild for a new terminal size. No-op if the size is unchanged.
    pub fn resize(&mut self, cols: u16, rows: u16, playfield: &Playfield) {
        if (cols.max(1), rows.max(1)) != (self.cols, self.rows) {
            *self = Self::new(cols, rows, playfield);
        }
    }

    #[inline]
    fn idx(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Cell> {
        self.idx(col as i32, row as i32).map(|i| self.cells[i])
    }

    /// Iterate rows of cells, top to bottom
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols as usize)
    }

    pub fn clear(&mut self, color: Color) {
        self.cells.fill(Cell::blank(color));
    }

    /// Center of a cell in playfield pixels
    fn cell_center(&self, col: i32, row: i32) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.scale.0,
            (row as f32 + 0.5) * self.scale.1,
        )
    }

    /// Cell range covering a pixel span, clamped to the grid
    fn cell_span(&self, from: f32, to: f32, scale: f32, limit: u16) -> std::ops::Range<i32> {
        let start = ((from / scale).floor() as i32).max(0);
        let end = ((to / scale).ceil() as i32).min(limit as i32);
        start..end.max(start)
    }

    fn paint(&mut self, col: i32, row: i32, color: Color) {
        if let Some(i) = self.idx(col, row) {
            self.cells[i] = Cell::blank(color);
        }
    }

    pub fn fill_rect(&mut self, color: Color, x: f32, y: f32, w: f32, h: f32) {
        for row in self.cell_span(y, y + h, self.scale.1, self.rows) {
            for col in self.cell_span(x, x + w, self.scale.0, self.cols) {
                let (cx, cy) = self.cell_center(col, row);
                if cx >= x && cx < x + w && cy >= y && cy < y + h {
                    self.paint(col, row, color);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, color: Color, x: f32, y: f32, r: f32) {
        let r2 = r * r;
        for row in self.cell_span(y - r, y + r, self.scale.1, self.rows) {
            for col in self.cell_span(x - r, x + r, self.scale.0, self.cols) {
                let (cx, cy) = self.cell_center(col, row);
                let (dx, dy) = (cx - x, cy - y);
                if dx * dx + dy * dy <= r2 {
                    self.paint(col, row, color);
                }
            }
        }
        // Small balls on coarse grids still show up as one cell
        let (col, row) = (
            (x / self.scale.0).floor() as i32,
            (y / self.scale.1).floor() as i32,
        );
        self.paint(col, row, color);
    }

    /// Write text over existing cells, keeping their background
    pub fn put_text(&mut self, text: &str, anchor: TextAnchor, size: TextSize, color: Color) {
        let len = text.chars().count() as i32;
        let (col, row) = match anchor {
            TextAnchor::TopLeft(x, y) => (
                (x / self.scale.0).floor() as i32,
                (y / self.scale.1).floor() as i32,
            ),
            TextAnchor::Center(x, y) => (
                (x / self.scale.0).floor() as i32 - len / 2,
                (y / self.scale.1).floor() as i32,
            ),
        };

        for (i, ch) in text.chars().enumerate() {
            if let Some(idx) = self.idx(col + i as i32, row) {
                let cell = &mut self.cells[idx];
                cell.ch = ch;
                cell.fg = color;
                cell.bold = size == TextSize::Large;
            }
        }
    }
}
