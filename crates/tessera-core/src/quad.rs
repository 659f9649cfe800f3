//! Composed quad primitive.

use crate::geom::RectF;

/// One quad of composed geometry: a screen-space rectangle in pixels, the
/// atlas rectangle it samples in pixels, and a blend color whose alpha
/// selects how strongly the color replaces the sampled RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub pos: RectF,
    pub tex: RectF,
    pub color: [f32; 4],
}

impl Quad {
    /// Transparent blend color: the quad shows its sampled texels untinted.
    pub const NO_BLEND: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

    #[inline]
    pub const fn new(pos: RectF, tex: RectF, color: [f32; 4]) -> Self {
        Self { pos, tex, color }
    }
}
