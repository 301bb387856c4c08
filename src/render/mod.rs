//! Grid rendering onto abstract and image-backed drawing surfaces

/// Drawing surface trait and its implementations
pub mod canvas;
/// Boundary detection and draw-call emission
pub mod renderer;

pub use canvas::{Canvas, ImageCanvas, RecordingCanvas};
pub use renderer::{GridRenderer, RenderStyle};
