use crate::color::Rgba;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("element {index} is not bound")]
    MissingElement { index: usize },
    #[error("backend rejected update for element {index}: {reason}")]
    Backend { index: usize, reason: String },
}

/// The visual elements the effect moves around.
///
/// Implementations own `len()` elements; the effect sizes its position store
/// from that count once and never asks for an index outside it.
pub trait RenderTarget {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Top-left position in viewport pixels plus opacity in [0, 1].
    fn place(&mut self, index: usize, position: Vec2, opacity: f32) -> Result<(), RenderError>;

    fn fill(&mut self, index: usize, color: Rgba) -> Result<(), RenderError>;
}
