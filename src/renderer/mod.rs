//! Rendering module
//!
//! `scene` decides what to draw for each mode; `batch` turns those draws
//! into vertex data.

pub mod batch;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use batch::{Frame, TextLabel, VertexBatch};
pub use scene::draw_frame;
pub use vertex::Vertex;
