//! Packed atlas layout.
//!
//! The compositor packs the nine tilesheets into one 64x32-tile atlas so a
//! frame can be drawn from a single texture. The placement is fixed: each
//! tilesheet contributes one or more rectangular blocks at hard-coded tile
//! coordinates, and one extra strip holds the generated shadow cells.

use crate::geom::{Point, Rect};

/// Atlas extent in tile units.
pub const ATLAS_TILES: Point = Point::new(64, 32);

/// Tilesheet slots recognized by the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtlasSlot {
    A1,
    A2,
    A3,
    A4,
    A5,
    B,
    C,
    D,
    E,
}

impl AtlasSlot {
    /// Number of slots.
    pub const COUNT: usize = 9;

    /// All slots in atlas order.
    pub const ALL: [AtlasSlot; Self::COUNT] = [
        AtlasSlot::A1,
        AtlasSlot::A2,
        AtlasSlot::A3,
        AtlasSlot::A4,
        AtlasSlot::A5,
        AtlasSlot::B,
        AtlasSlot::C,
        AtlasSlot::D,
        AtlasSlot::E,
    ];

    /// Stable index for slot-keyed storage.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            AtlasSlot::A1 => 0,
            AtlasSlot::A2 => 1,
            AtlasSlot::A3 => 2,
            AtlasSlot::A4 => 3,
            AtlasSlot::A5 => 4,
            AtlasSlot::B => 5,
            AtlasSlot::C => 6,
            AtlasSlot::D => 7,
            AtlasSlot::E => 8,
        }
    }
}

impl std::fmt::Display for AtlasSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AtlasSlot::A1 => "A1",
            AtlasSlot::A2 => "A2",
            AtlasSlot::A3 => "A3",
            AtlasSlot::A4 => "A4",
            AtlasSlot::A5 => "A5",
            AtlasSlot::B => "B",
            AtlasSlot::C => "C",
            AtlasSlot::D => "D",
            AtlasSlot::E => "E",
        };
        f.write_str(name)
    }
}

/// One block transfer in the packed layout: `src` is a rectangle on the
/// source tilesheet, `dst` its top-left in the atlas, both in tile units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasBlock {
    pub slot: AtlasSlot,
    pub src: Rect,
    pub dst: Point,
}

const fn block(slot: AtlasSlot, sx: i32, sy: i32, w: i32, h: i32, dx: i32, dy: i32) -> AtlasBlock {
    AtlasBlock {
        slot,
        src: Rect::new(sx, sy, w, h),
        dst: Point::new(dx, dy),
    }
}

/// The packed layout. A1 is split so its animated columns land in the
/// animation-stepped region of the atlas; A5 is split to stack its two
/// halves; the remaining sheets move as single blocks.
pub const ATLAS_LAYOUT: [AtlasBlock; 15] = [
    block(AtlasSlot::A1, 0, 0, 6, 6, 0, 0),
    block(AtlasSlot::A1, 8, 0, 6, 6, 6, 0),
    block(AtlasSlot::A1, 0, 6, 6, 6, 0, 6),
    block(AtlasSlot::A1, 8, 6, 6, 6, 6, 6),
    block(AtlasSlot::A1, 6, 0, 2, 12, 12, 0),
    block(AtlasSlot::A1, 14, 0, 2, 12, 14, 0),
    block(AtlasSlot::A2, 0, 0, 16, 12, 16, 0),
    block(AtlasSlot::A3, 0, 0, 16, 8, 0, 12),
    block(AtlasSlot::A4, 0, 0, 16, 15, 16, 12),
    block(AtlasSlot::A5, 0, 0, 8, 8, 0, 20),
    block(AtlasSlot::A5, 0, 8, 8, 8, 8, 20),
    block(AtlasSlot::B, 0, 0, 16, 16, 32, 0),
    block(AtlasSlot::C, 0, 0, 16, 16, 48, 0),
    block(AtlasSlot::D, 0, 0, 16, 16, 32, 16),
    block(AtlasSlot::E, 0, 0, 16, 16, 48, 16),
];

/// Atlas strip holding the sixteen generated shadow cells, in tile units.
pub const SHADOW_AREA: Rect = Rect::new(16, 27, 16, 1);

/// Atlas extent in pixels for a given tile size.
#[inline]
pub const fn atlas_size_px(tile_size: i32) -> Point {
    Point::new(ATLAS_TILES.x * tile_size, ATLAS_TILES.y * tile_size)
}

/// One pixel-space copy produced by [`copy_plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasCopy {
    pub slot: AtlasSlot,
    /// Source rectangle on the tilesheet, clamped to its actual extent.
    pub src: Rect,
    /// Destination top-left in the atlas.
    pub dst: Point,
}

/// Plans the block copies for one atlas rebuild.
///
/// `sheet_sizes` gives the pixel extent of each assigned tilesheet, indexed
/// by [`AtlasSlot::index`]; `None` slots are skipped. Each block's source
/// rectangle is scaled to pixels and intersected with the sheet extent, so
/// undersized sheets contribute what they have and the rest of the block
/// stays at the atlas clear color. Copies that clamp to nothing are dropped.
pub fn copy_plan(tile_size: i32, sheet_sizes: &[Option<Point>; AtlasSlot::COUNT]) -> Vec<AtlasCopy> {
    let mut plan = Vec::new();
    for block in ATLAS_LAYOUT.iter() {
        let Some(size) = sheet_sizes[block.slot.index()] else {
            continue;
        };
        let bounds = Rect::new(0, 0, size.x, size.y);
        let src = block.src.scale(tile_size).intersect(bounds);
        if src.is_empty() {
            continue;
        }
        plan.push(AtlasCopy {
            slot: block.slot,
            src,
            dst: block.dst * tile_size,
        });
    }
    plan
}

/// Opaque-black shadow pixel at half intensity.
const SHADOW_RGBA: [u8; 4] = [0, 0, 0, 128];

/// Renders the sixteen shadow cells as one RGBA strip of `16 * tile_size`
/// by `tile_size` pixels, matching [`SHADOW_AREA`].
///
/// Cell `i` darkens the quadrants named by its low four bits: bit 0 the
/// left-top, bit 1 the right-top, bit 2 the left-bottom, bit 3 the
/// right-bottom quarter-tile.
pub fn shadow_strip_pixels(tile_size: i32) -> Vec<u8> {
    let ts = tile_size.max(0) as usize;
    let half = ts / 2;
    let width = 16 * ts;
    let mut pixels = vec![0u8; width * ts * 4];
    for cell in 0..16usize {
        for quadrant in 0..4usize {
            if cell & (1 << quadrant) == 0 {
                continue;
            }
            let x0 = cell * ts + (quadrant % 2) * half;
            let y0 = (quadrant / 2) * half;
            for y in y0..y0 + half {
                for x in x0..x0 + half {
                    let at = (y * width + x) * 4;
                    pixels[at..at + 4].copy_from_slice(&SHADOW_RGBA);
                }
            }
        }
    }
    pixels
}
