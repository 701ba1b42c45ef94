//! Plain state shared by the pointer tracker, the integrator and the
//! front-ends: viewport size, pointer sample, per-element positions.

use glam::Vec2;

/// Live viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Non-finite or negative dimensions are read as zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

#[inline]
fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Last known pointer location and whether it is still moving.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub moving: bool,
}

/// Current position and opacity of every tracked element.
///
/// The element count is fixed at construction; [`PositionStore::reset`]
/// re-centers without resizing.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionStore {
    positions: Vec<Vec2>,
    opacities: Vec<f32>,
}

impl PositionStore {
    pub fn new(len: usize, center: Vec2) -> Self {
        Self {
            positions: vec![center; len],
            opacities: vec![1.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn opacities(&self) -> &[f32] {
        &self.opacities
    }

    /// Both columns at once, for the integrator.
    pub fn columns_mut(&mut self) -> (&mut [Vec2], &mut [f32]) {
        (&mut self.positions, &mut self.opacities)
    }

    pub fn reset(&mut self, center: Vec2) {
        self.positions.fill(center);
    }

    pub fn show_all(&mut self) {
        self.opacities.fill(1.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.opacities.iter().copied())
    }
}
