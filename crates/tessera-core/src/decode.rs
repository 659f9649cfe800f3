//! Tile decoders.
//!
//! Each decoder turns one tile reference into the quads that draw it,
//! sampling the packed atlas. Autotile families expand to multiple
//! quarter-tile pieces; static families emit a single quad. Positions are
//! relative to the visible window, in pixels; callers feed window-local
//! cell coordinates.
//!
//! All sample rectangles are inset by half a pixel and shrunk by one so
//! linear filtering at tile seams never bleeds a neighboring atlas cell.

use crate::atlas::SHADOW_AREA;
use crate::autotile::{
    A1_SLOT_OFFSETS, A1_WATERFALL_OFFSETS, A4_BAND_OFFSETS, AUTOTILE_SRC_REGULAR,
    AUTOTILE_SRC_TABLE, AUTOTILE_SRC_WALL, AUTOTILE_SRC_WATERFALL,
};
use crate::geom::{Point, RectF};
use crate::quad::Quad;

/// Nudges a piece rectangle into its slot within the tile: 0..=3 are the
/// quarter corners, 4..=5 the table legs at three-quarter height.
fn place_piece(pos: &mut RectF, index: usize, tile_size: f32) {
    let half = tile_size / 2.0;
    match index {
        1 => pos.x += half,
        2 => pos.y += half,
        3 => {
            pos.x += half;
            pos.y += half;
        }
        4 => pos.y += tile_size * 0.75,
        5 => {
            pos.x += half;
            pos.y += tile_size * 0.75;
        }
        _ => {}
    }
}

/// Scales a pattern-table rectangle to pixels at an atlas block offset
/// given in tile units, applying the seam inset.
fn sample_rect(src: RectF, offset: Point, tile_size: f32) -> RectF {
    RectF::new(
        (src.x + offset.x as f32) * tile_size + 0.5,
        (src.y + offset.y as f32) * tile_size + 0.5,
        src.width * tile_size - 1.0,
        src.height * tile_size - 1.0,
    )
}

/// Four-piece expansion shared by the regular and wall families.
fn corner_pieces(
    pieces: &[[RectF; 4]],
    pattern: i32,
    offset: Point,
    x: i32,
    y: i32,
    color: [f32; 4],
    tile_size: i32,
    out: &mut Vec<Quad>,
) {
    let ts = tile_size as f32;
    let half = ts / 2.0;
    for (i, src) in pieces[pattern as usize].iter().enumerate() {
        let tex = sample_rect(*src, offset, ts);
        let mut pos = RectF::new(x as f32 * ts, y as f32 * ts, half, half);
        place_piece(&mut pos, i, ts);
        out.push(Quad::new(pos, tex, color));
    }
}

/// Six-piece expansion for elevated tables. When `occlusion` is set the
/// two leg pieces lose their bottom quarter tile, so legs never overdraw
/// an A4 wall top standing directly below the table.
fn table_pieces(
    pattern: i32,
    offset: Point,
    occlusion: bool,
    x: i32,
    y: i32,
    color: [f32; 4],
    tile_size: i32,
    out: &mut Vec<Quad>,
) {
    let ts = tile_size as f32;
    for (i, src) in AUTOTILE_SRC_TABLE[pattern as usize].iter().enumerate() {
        let mut tex = sample_rect(*src, offset, ts);
        // Absent legs are zero-size; keep them degenerate instead of -1 wide.
        tex.width = tex.width.max(0.0);
        tex.height = tex.height.max(0.0);

        let mut pos = RectF::new(x as f32 * ts, y as f32 * ts, src.width * ts, src.height * ts);
        place_piece(&mut pos, i, ts);

        if occlusion && i >= 4 {
            let leg = ts * 0.25;
            tex.height -= leg;
            pos.height -= leg;
        }

        out.push(Quad::new(pos, tex, color));
    }
}

/// Two-piece, full-height expansion for waterfalls. Waterfall autotiles
/// only encode the four left/right edge patterns; anything else is a hole
/// in the id space and draws nothing.
fn waterfall_pieces(
    pattern: i32,
    offset: Point,
    x: i32,
    y: i32,
    color: [f32; 4],
    tile_size: i32,
    out: &mut Vec<Quad>,
) {
    if pattern > 0x3 {
        return;
    }

    let ts = tile_size as f32;
    let half = ts / 2.0;
    for (i, src) in AUTOTILE_SRC_WATERFALL[pattern as usize].iter().enumerate() {
        let tex = sample_rect(*src, offset, ts);
        let pos = RectF::new(x as f32 * ts + i as f32 * half, y as f32 * ts, half, ts);
        out.push(Quad::new(pos, tex, color));
    }
}

/// A1 autotile: animated ground (regular patterns) or waterfall, decided
/// by the slot.
pub fn a1(
    autotile: i32,
    pattern: i32,
    x: i32,
    y: i32,
    color: [f32; 4],
    tile_size: i32,
    out: &mut Vec<Quad>,
) {
    match A1_SLOT_OFFSETS[autotile as usize] {
        Some(offset) => {
            corner_pieces(&AUTOTILE_SRC_REGULAR, pattern, offset, x, y, color, tile_size, out)
        }
        None => {
            let offset = A1_WATERFALL_OFFSETS[((autotile - 5) / 2) as usize];
            waterfall_pieces(pattern, offset, x, y, color, tile_size, out)
        }
    }
}

/// A2 autotile: ground, or an elevated table when the tile's table mode
/// is set.
pub fn a2(
    autotile: i32,
    pattern: i32,
    table: bool,
    occlusion: bool,
    x: i32,
    y: i32,
    color: [f32; 4],
    tile_size: i32,
    out: &mut Vec<Quad>,
) {
    let offset = Point::new(16 + (autotile % 8) * 2, (autotile / 8) * 3);
    if table {
        table_pieces(pattern, offset, occlusion, x, y, color, tile_size, out);
    } else {
        corner_pieces(&AUTOTILE_SRC_REGULAR, pattern, offset, x, y, color, tile_size, out);
    }
}

/// A3 autotile: building walls, 16-pattern family only.
pub fn a3(
    autotile: i32,
    pattern: i32,
    x: i32,
    y: i32,
    color: [f32; 4],
    tile_size: i32,
    out: &mut Vec<Quad>,
) {
    if pattern >= 0x10 {
        return;
    }

    let offset = Point::new((autotile % 8) * 2, (autotile / 8) * 2 + 12);
    corner_pieces(&AUTOTILE_SRC_WALL, pattern, offset, x, y, color, tile_size, out);
}

/// A4 autotile: alternating bands of wall tops (regular patterns) and
/// wall faces (wall patterns).
pub fn a4(
    autotile: i32,
    pattern: i32,
    x: i32,
    y: i32,
    color: [f32; 4],
    tile_size: i32,
    out: &mut Vec<Quad>,
) {
    let band = (autotile / 8) as usize;
    let offset = Point::new(16 + (autotile % 8) * 2, 12 + A4_BAND_OFFSETS[band]);

    if band % 2 == 0 {
        corner_pieces(&AUTOTILE_SRC_REGULAR, pattern, offset, x, y, color, tile_size, out);
    } else {
        if pattern >= 0x10 {
            return;
        }
        corner_pieces(&AUTOTILE_SRC_WALL, pattern, offset, x, y, color, tile_size, out);
    }
}

/// A5 static tile: one quad from the stacked A5 block.
pub fn a5(index: i32, x: i32, y: i32, color: [f32; 4], tile_size: i32, out: &mut Vec<Quad>) {
    let mut ox = index % 8;
    let mut oy = index / 8;
    if oy >= 8 {
        oy -= 8;
        ox += 8;
    }

    let ts = tile_size as f32;
    let tex = RectF::new(
        ox as f32 * ts + 0.5,
        (20 + oy) as f32 * ts + 0.5,
        ts - 1.0,
        ts - 1.0,
    );
    let pos = RectF::new(x as f32 * ts, y as f32 * ts, ts, ts);
    out.push(Quad::new(pos, tex, color));
}

/// B-E static tile: one quad, bank bits folded into the four 16x16-tile
/// quadrants on the atlas' right half.
pub fn bcde(id: i32, x: i32, y: i32, color: [f32; 4], tile_size: i32, out: &mut Vec<Quad>) {
    let mut ox = id % 8;
    let mut oy = (id / 8) % 16;
    let bank = id / 128;

    ox += (bank % 2) * 8;
    oy += (bank / 2) * 16;

    if oy >= 48 {
        // E quadrant
        oy -= 32;
        ox += 16;
    } else if oy >= 32 {
        // D quadrant
        oy -= 16;
    } else if oy >= 16 {
        // C quadrant
        oy -= 16;
        ox += 16;
    }

    let ts = tile_size as f32;
    let tex = RectF::new(
        (32 + ox) as f32 * ts + 0.5,
        oy as f32 * ts + 0.5,
        ts - 1.0,
        ts - 1.0,
    );
    let pos = RectF::new(x as f32 * ts, y as f32 * ts, ts, ts);
    out.push(Quad::new(pos, tex, color));
}

/// Shadow cell: one untinted quad from the generated shadow strip. Only
/// the low four bits select a cell; cell zero is fully transparent and
/// draws nothing.
pub fn shadow(code: i16, x: i32, y: i32, tile_size: i32, out: &mut Vec<Quad>) {
    let cell = (code & 0xF) as i32;
    if cell == 0 {
        return;
    }

    let ts = tile_size as f32;
    let tex = RectF::new(
        (SHADOW_AREA.x + cell) as f32 * ts + 0.5,
        SHADOW_AREA.y as f32 * ts + 0.5,
        ts - 1.0,
        ts - 1.0,
    );
    let pos = RectF::new(x as f32 * ts, y as f32 * ts, ts, ts);
    out.push(Quad::new(pos, tex, Quad::NO_BLEND));
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: i32 = 32;
    const PLAIN: [f32; 4] = Quad::NO_BLEND;

    #[test]
    fn a1_ground_expands_to_four_quarters() {
        let mut out = Vec::new();
        a1(0, 0, 1, 1, PLAIN, TS, &mut out);
        assert_eq!(out.len(), 4);

        // Pieces tile the cell: left-top, right-top, left-bottom, right-bottom.
        assert_eq!(out[0].pos, RectF::new(32.0, 32.0, 16.0, 16.0));
        assert_eq!(out[1].pos, RectF::new(48.0, 32.0, 16.0, 16.0));
        assert_eq!(out[2].pos, RectF::new(32.0, 48.0, 16.0, 16.0));
        assert_eq!(out[3].pos, RectF::new(48.0, 48.0, 16.0, 16.0));

        // Pattern 0 samples the seamless center of slot 0's block.
        assert_eq!(out[0].tex, RectF::new(32.5, 64.5, 15.0, 15.0));
        assert_eq!(out[1].tex, RectF::new(16.5, 64.5, 15.0, 15.0));
        assert_eq!(out[2].tex, RectF::new(32.5, 48.5, 15.0, 15.0));
        assert_eq!(out[3].tex, RectF::new(16.5, 48.5, 15.0, 15.0));
    }

    #[test]
    fn a1_waterfall_slot_expands_to_two_columns() {
        let mut out = Vec::new();
        a1(5, 0, 0, 0, PLAIN, TS, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].pos, RectF::new(0.0, 0.0, 16.0, 32.0));
        assert_eq!(out[1].pos, RectF::new(16.0, 0.0, 16.0, 32.0));
        // Slot 5 is the first waterfall block at column 14.
        assert_eq!(out[0].tex, RectF::new((14.0 + 1.0) * 32.0 + 0.5, 0.5, 15.0, 31.0));
    }

    #[test]
    fn waterfall_ignores_patterns_above_three() {
        let mut out = Vec::new();
        a1(5, 4, 0, 0, PLAIN, TS, &mut out);
        a1(7, 0x2f, 0, 0, PLAIN, TS, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn a2_ground_uses_regular_family_at_block_sixteen() {
        let mut out = Vec::new();
        a2(0, 47, false, false, 0, 0, PLAIN, TS, &mut out);
        assert_eq!(out.len(), 4);
        // Pattern 47 samples the demo tile at the block's top-left.
        assert_eq!(out[0].tex, RectF::new(16.0 * 32.0 + 0.5, 0.5, 15.0, 15.0));
    }

    #[test]
    fn a2_table_expands_to_six_pieces() {
        let mut out = Vec::new();
        a2(0, 12, true, false, 0, 0, PLAIN, TS, &mut out);
        assert_eq!(out.len(), 6);
        // Legs sit at three-quarter height, half a tile tall.
        assert_eq!(out[4].pos, RectF::new(0.0, 24.0, 16.0, 16.0));
        assert_eq!(out[5].pos, RectF::new(16.0, 24.0, 16.0, 16.0));
    }

    #[test]
    fn occlusion_shortens_table_legs_by_a_quarter_tile() {
        let mut plain = Vec::new();
        let mut occluded = Vec::new();
        a2(0, 12, true, false, 0, 0, PLAIN, TS, &mut plain);
        a2(0, 12, true, true, 0, 0, PLAIN, TS, &mut occluded);

        for i in 0..4 {
            assert_eq!(plain[i], occluded[i]);
        }
        for i in 4..6 {
            assert_eq!(occluded[i].pos.height, plain[i].pos.height - 8.0);
            assert_eq!(occluded[i].tex.height, plain[i].tex.height - 8.0);
        }
    }

    #[test]
    fn absent_table_legs_stay_degenerate() {
        // Pattern 0 has no legs: the leg entries are zero-size.
        let mut out = Vec::new();
        a2(0, 0, true, false, 0, 0, PLAIN, TS, &mut out);
        assert_eq!(out.len(), 6);
        assert_eq!(out[4].tex.width, 0.0);
        assert_eq!(out[4].pos.width, 0.0);
    }

    #[test]
    fn a3_rejects_non_wall_patterns() {
        let mut out = Vec::new();
        a3(0, 0x10, 0, 0, PLAIN, TS, &mut out);
        assert!(out.is_empty());

        a3(0, 0xf, 0, 0, PLAIN, TS, &mut out);
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn a3_blocks_start_below_the_a1_region() {
        let mut out = Vec::new();
        a3(9, 0, 0, 0, PLAIN, TS, &mut out);
        // Slot 9: column (9 % 8) * 2 = 2, row (9 / 8) * 2 + 12 = 14.
        let base = out[0].tex;
        assert_eq!(base, RectF::new((2.0 + 1.0) * 32.0 + 0.5, (14.0 + 1.0) * 32.0 + 0.5, 15.0, 15.0));
    }

    #[test]
    fn a4_alternates_regular_and_wall_bands() {
        // Band 0 (slots 0..8): regular patterns up to 47 draw.
        let mut out = Vec::new();
        a4(0, 47, 0, 0, PLAIN, TS, &mut out);
        assert_eq!(out.len(), 4);

        // Band 1 (slots 8..16): wall family, pattern 0x10+ is a hole.
        out.clear();
        a4(8, 0x10, 0, 0, PLAIN, TS, &mut out);
        assert!(out.is_empty());
        a4(8, 0, 0, 0, PLAIN, TS, &mut out);
        assert_eq!(out.len(), 4);
        // Wall band 1 sits 15 tile rows below the atlas top.
        assert_eq!(out[0].tex.y, (15.0 + 1.0) * 32.0 + 0.5);
    }

    #[test]
    fn a5_maps_both_sheet_halves() {
        let mut out = Vec::new();
        a5(0, 0, 0, PLAIN, TS, &mut out);
        assert_eq!(out[0].tex, RectF::new(0.5, 20.0 * 32.0 + 0.5, 31.0, 31.0));
        assert_eq!(out[0].pos, RectF::new(0.0, 0.0, 32.0, 32.0));

        // Index 64 starts the lower sheet half, folded beside the upper.
        out.clear();
        a5(64, 0, 0, PLAIN, TS, &mut out);
        assert_eq!(out[0].tex.x, 8.0 * 32.0 + 0.5);
        assert_eq!(out[0].tex.y, 20.0 * 32.0 + 0.5);
    }

    #[test]
    fn bcde_banks_map_to_atlas_quadrants() {
        let tex_origin = |id: i32| {
            let mut out = Vec::new();
            bcde(id, 0, 0, PLAIN, TS, &mut out);
            (out[0].tex.x, out[0].tex.y)
        };

        // First tile of each sheet: B, C, D, E quadrants.
        assert_eq!(tex_origin(1), (33.0 * 32.0 + 0.5, 0.5));
        assert_eq!(tex_origin(256), (48.0 * 32.0 + 0.5, 0.5));
        assert_eq!(tex_origin(512), (32.0 * 32.0 + 0.5, 16.0 * 32.0 + 0.5));
        assert_eq!(tex_origin(768), (48.0 * 32.0 + 0.5, 16.0 * 32.0 + 0.5));

        // Second half of a sheet shifts eight columns right.
        assert_eq!(tex_origin(128), (40.0 * 32.0 + 0.5, 0.5));
    }

    #[test]
    fn shadow_cells_sample_the_strip() {
        let mut out = Vec::new();
        shadow(5, 2, 3, TS, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tex, RectF::new(21.0 * 32.0 + 0.5, 27.0 * 32.0 + 0.5, 31.0, 31.0));
        assert_eq!(out[0].pos, RectF::new(64.0, 96.0, 32.0, 32.0));
        assert_eq!(out[0].color, Quad::NO_BLEND);
    }

    #[test]
    fn empty_shadow_draws_nothing() {
        let mut out = Vec::new();
        shadow(0, 0, 0, TS, &mut out);
        shadow(0x10, 0, 0, TS, &mut out);
        assert!(out.is_empty());
    }
}
