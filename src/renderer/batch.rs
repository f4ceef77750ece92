//! Vertex batch renderer
//!
//! Records a frame as triangle-list vertices plus text labels. The vertex
//! data is `Pod`, so a GPU back-end can upload [`VertexBatch::vertex_bytes`]
//! as-is; tests use the batch to inspect what a frame drew.

use glam::Vec2;

use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::Vertex;
use crate::platform::{Color, PlatformError, Renderer, TextAnchor, TextSize};

/// A text string queued for the font back-end
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub anchor: TextAnchor,
    pub size: TextSize,
    pub color: Color,
}

/// Geometry for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub clear_color: Option<Color>,
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl Frame {
    /// Whether any label contains `needle`
    pub fn has_text(&self, needle: &str) -> bool {
        self.labels.iter().any(|l| l.text.contains(needle))
    }

    /// Number of vertices drawn in `color`
    pub fn vertices_in(&self, color: Color) -> usize {
        let rgba = color.to_rgba();
        self.vertices.iter().filter(|v| v.color == rgba).count()
    }
}

/// Renderer that batches draws into vertex buffers
#[derive(Debug, Default)]
pub struct VertexBatch {
    pending: Frame,
    presented: Frame,
    frames_presented: u64,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently presented frame
    pub fn frame(&self) -> &Frame {
        &self.presented
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Raw bytes of the presented frame's vertices, ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.presented.vertices)
    }
}

impl Renderer for VertexBatch {
    fn clear(&mut self, color: Color) {
        self.pending.vertices.clear();
        self.pending.labels.clear();
        self.pending.clear_color = Some(color);
    }

    fn draw_rect(&mut self, color: Color, x: f32, y: f32, w: f32, h: f32) {
        self.pending.vertices.extend_from_slice(&shapes::rect(
            Vec2::new(x, y),
            Vec2::new(w, h),
            color.to_rgba(),
        ));
    }

    fn draw_circle(&mut self, color: Color, x: f32, y: f32, r: f32) {
        self.pending.vertices.extend(shapes::circle(
            Vec2::new(x, y),
            r,
            color.to_rgba(),
            CIRCLE_SEGMENTS,
        ));
    }

    fn draw_text(&mut self, text: &str, anchor: TextAnchor, size: TextSize, color: Color) {
        self.pending.labels.push(TextLabel {
            text: text.to_string(),
            anchor,
            size,
            color,
        });
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        self.presented = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
        Ok(())
    }
}
