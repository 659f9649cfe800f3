//! Autotile pattern data.
//!
//! These tables are the 48-pattern corner/edge encoding inherited from the
//! legacy map format. Each entry is a source sub-rectangle in **half-tile
//! units** relative to the autotile's block in the atlas; the decoder scales
//! them by the tile size. The encoding is a historical convention with no
//! closed form; the tables are data and are reproduced verbatim.

use crate::geom::{Point, RectF};

const fn r(x: f32, y: f32, width: f32, height: f32) -> RectF {
    RectF::new(x, y, width, height)
}

/// Regular 4-corner family: 48 patterns, four half-tile pieces each
/// (left-top, right-top, left-bottom, right-bottom).
pub const AUTOTILE_SRC_REGULAR: [[RectF; 4]; 48] = [
    [r(1.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(1.5, 2.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(1.5, 2.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(0.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(0.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(0.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(0.0, 2.5, 0.5, 0.5), r(1.5, 2.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(1.5, 2.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(0.0, 2.5, 0.5, 0.5), r(1.5, 2.5, 0.5, 0.5)],
    [r(0.0, 0.0, 0.5, 0.5), r(0.5, 0.0, 0.5, 0.5),
     r(0.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.5, 0.5)],
];

/// Table/elevated family: 48 patterns of six pieces each, the four corners
/// plus two leg pieces. Zero-extent leg entries mark patterns whose legs
/// are absent.
pub const AUTOTILE_SRC_TABLE: [[RectF; 6]; 48] = [
    [r(1.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(0.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(0.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(1.5, 0.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(0.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.0, 0.0)],
    [r(1.0, 2.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(1.5, 2.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(1.5, 2.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(0.5, 2.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.0, 0.0), r(0.5, 0.5, 0.0, 0.0)],
    [r(0.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5),
     r(0.0, 2.5, 0.5, 0.5), r(0.5, 2.5, 0.5, 0.5)],
    [r(0.0, 2.0, 0.5, 0.5), r(1.5, 2.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(0.0, 2.5, 0.5, 0.5), r(1.5, 2.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(1.0, 2.5, 0.5, 0.5), r(1.5, 2.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(0.0, 2.5, 0.5, 0.5), r(1.5, 2.5, 0.5, 0.5)],
    [r(0.0, 0.0, 0.5, 0.5), r(0.5, 0.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5),
     r(0.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.5, 0.5)],
];

/// Wall family: 16 patterns, four half-tile pieces each. Wall autotiles
/// never receive pattern ids at or above 0x10.
pub const AUTOTILE_SRC_WALL: [[RectF; 4]; 16] = [
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(0.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 0.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.5, 0.5)],
    [r(0.0, 0.0, 0.5, 0.5), r(0.5, 0.0, 0.5, 0.5),
     r(0.0, 0.5, 0.5, 0.5), r(0.5, 0.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(0.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(0.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(0.0, 0.5, 0.5, 0.5), r(1.5, 0.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(0.5, 1.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(0.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(0.0, 0.0, 0.5, 0.5), r(0.5, 0.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(0.5, 1.5, 0.5, 0.5)],
    [r(1.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
    [r(0.0, 1.0, 0.5, 0.5), r(1.5, 1.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
    [r(1.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(1.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
    [r(0.0, 0.0, 0.5, 0.5), r(1.5, 0.0, 0.5, 0.5),
     r(0.0, 1.5, 0.5, 0.5), r(1.5, 1.5, 0.5, 0.5)],
];

/// Waterfall family: 4 patterns (left/right edge combinations), two
/// half-tile-wide, full-tile-tall pieces each.
pub const AUTOTILE_SRC_WATERFALL: [[RectF; 2]; 4] = [
    [r(1.0, 0.0, 0.5, 1.0), r(0.5, 0.0, 0.5, 1.0)],
    [r(0.0, 0.0, 0.5, 1.0), r(0.5, 0.0, 0.5, 1.0)],
    [r(1.0, 0.0, 0.5, 1.0), r(1.5, 0.0, 0.5, 1.0)],
    [r(0.0, 0.0, 0.5, 1.0), r(1.5, 0.0, 0.5, 1.0)],
];

/// Atlas block offsets (tile units) for the 16 A1 autotile slots. `None`
/// marks the six slots that substitute the waterfall family; their
/// destinations come from [`A1_WATERFALL_OFFSETS`] indexed by
/// `(slot - 5) / 2`.
pub const A1_SLOT_OFFSETS: [Option<Point>; 16] = [
    Some(Point::new(0, 0)),
    Some(Point::new(0, 3)),
    Some(Point::new(12, 0)),
    Some(Point::new(12, 3)),
    Some(Point::new(6, 0)),
    None,
    Some(Point::new(6, 3)),
    None,
    Some(Point::new(0, 6)),
    None,
    Some(Point::new(0, 9)),
    None,
    Some(Point::new(6, 6)),
    None,
    Some(Point::new(6, 9)),
    None,
];

/// Atlas block offsets (tile units) for the six A1 waterfall slots.
pub const A1_WATERFALL_OFFSETS: [Point; 6] = [
    Point::new(14, 0),
    Point::new(14, 3),
    Point::new(12, 6),
    Point::new(12, 9),
    Point::new(14, 6),
    Point::new(14, 9),
];

/// Per-band vertical atlas offsets (tile units) for the A4 sheet: regular
/// bands are three tiles tall, wall bands two, alternating.
pub const A4_BAND_OFFSETS: [i32; 6] = [0, 3, 5, 8, 10, 13];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_pieces_are_half_tiles() {
        for pattern in AUTOTILE_SRC_REGULAR.iter() {
            for piece in pattern {
                assert_eq!(piece.width, 0.5);
                assert_eq!(piece.height, 0.5);
                assert!(piece.x >= 0.0 && piece.x <= 1.5);
                assert!(piece.y >= 0.0 && piece.y <= 2.5);
            }
        }
    }

    #[test]
    fn table_leg_entries_are_zero_or_half() {
        for pattern in AUTOTILE_SRC_TABLE.iter() {
            // Corner pieces are always present.
            for piece in &pattern[..4] {
                assert_eq!(piece.width, 0.5);
                assert_eq!(piece.height, 0.5);
            }
            // Leg pieces are present or fully absent.
            for piece in &pattern[4..] {
                assert_eq!(piece.width, piece.height);
                assert!(piece.width == 0.0 || piece.width == 0.5);
            }
        }
    }

    #[test]
    fn wall_pieces_are_half_tiles() {
        for pattern in AUTOTILE_SRC_WALL.iter() {
            for piece in pattern {
                assert_eq!(piece.width, 0.5);
                assert_eq!(piece.height, 0.5);
            }
        }
    }

    #[test]
    fn waterfall_pieces_are_full_height() {
        for pattern in AUTOTILE_SRC_WATERFALL.iter() {
            for piece in pattern {
                assert_eq!(piece.width, 0.5);
                assert_eq!(piece.height, 1.0);
            }
        }
    }

    #[test]
    fn fully_surrounded_pattern_uses_block_center() {
        // Pattern 0 is the all-neighbors case: all four pieces sample the
        // seamless center region of the 2x3 autotile block.
        let p0 = AUTOTILE_SRC_REGULAR[0];
        assert_eq!(p0[0], RectF::new(1.0, 2.0, 0.5, 0.5));
        assert_eq!(p0[1], RectF::new(0.5, 2.0, 0.5, 0.5));
        assert_eq!(p0[2], RectF::new(1.0, 1.5, 0.5, 0.5));
        assert_eq!(p0[3], RectF::new(0.5, 1.5, 0.5, 0.5));
    }

    #[test]
    fn isolated_pattern_uses_block_corner_tile() {
        // Pattern 47 is the no-neighbors case: the demo tile at the block's
        // top-left corner.
        let p47 = AUTOTILE_SRC_REGULAR[47];
        assert_eq!(p47[0], RectF::new(0.0, 0.0, 0.5, 0.5));
        assert_eq!(p47[1], RectF::new(0.5, 0.0, 0.5, 0.5));
        assert_eq!(p47[2], RectF::new(0.0, 0.5, 0.5, 0.5));
        assert_eq!(p47[3], RectF::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn a1_waterfall_slots_are_odd_from_five() {
        for (slot, offset) in A1_SLOT_OFFSETS.iter().enumerate() {
            let waterfall = slot >= 5 && slot % 2 == 1;
            assert_eq!(offset.is_none(), waterfall, "slot {slot}");
        }
    }
}
