//! Map walk and batch assembly.
//!
//! [`build_geometry`] walks the visible window over the map tables and
//! composes two quad batches: `ground` for everything drawn below
//! characters and `above` for overlay tiles. Within a batch, later quads
//! composite over earlier ones, so pass order is layer 0, layer 1, shadows,
//! then layer 2. Rows walk bottom-up inside each layer so wall tops overhang
//! the row beneath them.

use crate::decode;
use crate::geom::Rect;
use crate::quad::Quad;
use crate::table::Table;
use crate::tile::{self, MapConvention, TileClass, FLAG_OVER_PLAYER};

/// Edge behavior per axis: reads past the map either wrap around or
/// resolve to the empty tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Repeat {
    pub x: bool,
    pub y: bool,
}

impl Default for Repeat {
    fn default() -> Self {
        Self { x: true, y: true }
    }
}

/// Everything one rebuild reads. Tables are borrowed; a missing table
/// reads as all zeros.
#[derive(Debug, Clone, Copy)]
pub struct GeometryInput<'a> {
    /// Tile ids, layers z=0..=2 plus the z=3 shadow layer on modern maps.
    pub map_data: Option<&'a Table>,
    /// Per-tile-id flag words, indexed by raw id on the x axis.
    pub flags: Option<&'a Table>,
    /// Per-cell flash colors, nibble-packed 0x0RGB.
    pub flash_data: Option<&'a Table>,
    /// Visible window in tile coordinates.
    pub window: Rect,
    pub repeat: Repeat,
    pub convention: MapConvention,
    pub tile_size: i32,
    /// Current flash blend opacity, 0..=255.
    pub flash_opacity: i32,
}

/// Composed geometry for one window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryBatch {
    pub ground: Vec<Quad>,
    pub above: Vec<Quad>,
    /// Number of flashed cells encountered. Non-zero means the batch bakes
    /// a flash opacity and goes stale on the next clock tick.
    pub flash_count: u32,
}

/// Builds the quad batches for the given window. Pure: equal inputs
/// compose equal batches.
pub fn build_geometry(input: &GeometryInput<'_>) -> GeometryBatch {
    let mut walker = Walker {
        input,
        ground: Vec::new(),
        above: Vec::new(),
        flash_count: 0,
    };

    walker.tile_layer(0);
    walker.tile_layer(1);
    walker.shadow_pass();
    walker.tile_layer(2);

    GeometryBatch {
        ground: walker.ground,
        above: walker.above,
        flash_count: walker.flash_count,
    }
}

fn value_wrap(value: i32, range: i32) -> i32 {
    if range <= 0 {
        return 0;
    }
    let rem = value % range;
    if rem < 0 { rem + range } else { rem }
}

struct Walker<'a> {
    input: &'a GeometryInput<'a>,
    ground: Vec<Quad>,
    above: Vec<Quad>,
    flash_count: u32,
}

impl Walker<'_> {
    /// Table read honoring the repeat axes; out-of-range reads on a
    /// non-repeating axis resolve to zero.
    fn wrapped(&self, table: Option<&Table>, x: i32, y: i32, z: i32) -> i16 {
        let Some(table) = table else { return 0 };
        let repeat = self.input.repeat;

        let tx = if repeat.x { value_wrap(x, table.xsize()) } else { x };
        let ty = if repeat.y { value_wrap(y, table.ysize()) } else { y };

        if !repeat.x && (x < 0 || x >= table.xsize()) {
            return 0;
        }
        if !repeat.y && (y < 0 || y >= table.ysize()) {
            return 0;
        }

        table.get(tx, ty, z)
    }

    fn flag_of(&self, tile_id: i16) -> i16 {
        let Some(flags) = self.input.flags else { return 0 };
        let id = tile_id as i32;
        if id < 0 || id >= flags.xsize() {
            return 0;
        }
        flags.get(id, 0, 0)
    }

    /// One full pass over the window for map layer `z`, bottom row first.
    fn tile_layer(&mut self, z: i32) {
        let window = self.input.window;
        for y in (0..window.height).rev() {
            for x in 0..window.width {
                let tile_id = self.wrapped(self.input.map_data, x + window.x, y + window.y, z);
                if tile_id == 0 {
                    continue;
                }

                // Table legs occlude against whatever stands below on layer 0.
                let under = self.wrapped(self.input.map_data, x + window.x, y + window.y + 1, 0);

                let flash = self.wrapped(self.input.flash_data, x + window.x, y + window.y, 0);
                let mut color = Quad::NO_BLEND;
                if flash != 0 {
                    color = [
                        ((flash >> 8) & 0xF) as f32 / 15.0,
                        ((flash >> 4) & 0xF) as f32 / 15.0,
                        (flash & 0xF) as f32 / 15.0,
                        self.input.flash_opacity as f32 / 255.0,
                    ];
                    self.flash_count += 1;
                }

                self.cell(tile_id, color, x, y, z, under);
            }
        }
    }

    fn cell(&mut self, tile_id: i16, color: [f32; 4], x: i32, y: i32, z: i32, under: i16) {
        let Some(class) = tile::classify(tile_id) else {
            return;
        };

        let flag = self.flag_of(tile_id);
        let above = flag & FLAG_OVER_PLAYER != 0 && z >= 2;
        let ts = self.input.tile_size;
        let out = if above { &mut self.above } else { &mut self.ground };

        match class {
            TileClass::A1 { autotile, pattern } => {
                decode::a1(autotile, pattern, x, y, color, ts, out)
            }
            TileClass::A2 { autotile, pattern } => {
                let table = tile::a2_table_mode(self.input.convention, flag, tile_id);
                let occlusion = tile::in_a4_region(under);
                decode::a2(autotile, pattern, table, occlusion, x, y, color, ts, out)
            }
            TileClass::A3 { autotile, pattern } => {
                decode::a3(autotile, pattern, x, y, color, ts, out)
            }
            TileClass::A4 { autotile, pattern } => {
                decode::a4(autotile, pattern, x, y, color, ts, out)
            }
            TileClass::A5(index) => decode::a5(index, x, y, color, ts, out),
            TileClass::Bcde(id) => decode::bcde(id, x, y, color, ts, out),
        }
    }

    /// Shadow quads always land in the ground batch, after layers 0 and 1.
    ///
    /// Modern maps store shadow codes on layer 3. Legacy maps carry no
    /// shadow data; a fixed left-half shadow is inferred wherever a wall
    /// column continues past a non-wall cell, skipping the map seam.
    fn shadow_pass(&mut self) {
        let window = self.input.window;
        let ts = self.input.tile_size;

        match self.input.convention {
            MapConvention::Modern => {
                for y in 0..window.height {
                    for x in 0..window.width {
                        let code =
                            self.wrapped(self.input.map_data, x + window.x, y + window.y, 3);
                        decode::shadow(code, x, y, ts, &mut self.ground);
                    }
                }
            }
            MapConvention::Legacy => {
                let Some(map) = self.input.map_data else { return };
                if map.xsize() <= 0 || map.ysize() <= 0 {
                    return;
                }

                for y in 0..window.height {
                    for x in 0..window.width {
                        if (x + window.x) % map.xsize() == 0
                            || (y + window.y) % map.ysize() == 0
                        {
                            continue;
                        }

                        let wall_top =
                            self.wrapped(self.input.map_data, x + window.x - 1, y + window.y - 1, 0);
                        let wall_bottom =
                            self.wrapped(self.input.map_data, x + window.x - 1, y + window.y, 0);
                        let current =
                            self.wrapped(self.input.map_data, x + window.x, y + window.y, 0);

                        if tile::in_wall_region(wall_top)
                            && tile::in_wall_region(wall_bottom)
                            && !tile::in_wall_region(current)
                        {
                            decode::shadow(0x05, x, y, ts, &mut self.ground);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::RectF;

    const TS: i32 = 32;

    fn input<'a>(map: &'a Table, window: Rect) -> GeometryInput<'a> {
        GeometryInput {
            map_data: Some(map),
            flags: None,
            flash_data: None,
            window,
            repeat: Repeat::default(),
            convention: MapConvention::Modern,
            tile_size: TS,
            flash_opacity: 0,
        }
    }

    #[test]
    fn single_autotile_end_to_end() {
        let map = Table::new(3, 3, 1);
        map.set(1, 1, 0, 0x0800);

        let batch = build_geometry(&input(&map, Rect::new(0, 0, 3, 3)));
        assert!(batch.above.is_empty());
        assert_eq!(batch.flash_count, 0);
        assert_eq!(batch.ground.len(), 4);

        // Fully isolated A1 slot 0 tile: pattern 0, block at atlas origin.
        assert_eq!(batch.ground[0].pos, RectF::new(32.0, 32.0, 16.0, 16.0));
        assert_eq!(batch.ground[0].tex, RectF::new(32.5, 64.5, 15.0, 15.0));
        assert_eq!(batch.ground[3].pos, RectF::new(48.0, 48.0, 16.0, 16.0));
        assert_eq!(batch.ground[3].tex, RectF::new(16.5, 48.5, 15.0, 15.0));
    }

    #[test]
    fn rebuild_is_idempotent() {
        let map = Table::new(4, 4, 3);
        map.set(0, 0, 0, 0x0800);
        map.set(1, 2, 1, 1);
        map.set(3, 3, 2, 0x0600);

        let params = input(&map, Rect::new(0, 0, 4, 4));
        assert_eq!(build_geometry(&params), build_geometry(&params));
    }

    #[test]
    fn window_shifted_by_map_width_composes_identically() {
        let map = Table::new(4, 3, 1);
        map.set(0, 0, 0, 1);
        map.set(2, 1, 0, 0x0600);

        let home = build_geometry(&input(&map, Rect::new(0, 0, 4, 3)));
        let wrapped = build_geometry(&input(&map, Rect::new(4, 0, 4, 3)));
        assert_eq!(home, wrapped);
    }

    #[test]
    fn non_repeating_axis_reads_empty_outside() {
        let map = Table::new(2, 2, 1);
        map.fill(1);

        let mut params = input(&map, Rect::new(2, 0, 2, 2));
        params.repeat = Repeat { x: false, y: true };
        assert!(build_geometry(&params).ground.is_empty());
    }

    #[test]
    fn rows_compose_bottom_up() {
        let map = Table::new(1, 3, 1);
        map.set(0, 0, 0, 1);
        map.set(0, 1, 0, 1);

        let batch = build_geometry(&input(&map, Rect::new(0, 0, 1, 3)));
        assert_eq!(batch.ground.len(), 2);
        assert_eq!(batch.ground[0].pos.y, 32.0);
        assert_eq!(batch.ground[1].pos.y, 0.0);
    }

    #[test]
    fn overlay_flag_routes_layer_two_above() {
        let map = Table::new(1, 1, 3);
        map.set(0, 0, 2, 1);

        let flags = Table::new(2, 1, 1);
        flags.set(1, 0, 0, FLAG_OVER_PLAYER);

        let mut params = input(&map, Rect::new(0, 0, 1, 1));
        params.flags = Some(&flags);
        let batch = build_geometry(&params);
        assert!(batch.ground.is_empty());
        assert_eq!(batch.above.len(), 1);

        // Same tile on layer 0 stays on the ground despite the flag.
        map.set(0, 0, 2, 0);
        map.set(0, 0, 0, 1);
        let batch = build_geometry(&params);
        assert_eq!(batch.ground.len(), 1);
        assert!(batch.above.is_empty());
    }

    #[test]
    fn table_legs_occlude_against_a4_below() {
        let map = Table::new(3, 3, 1);
        map.set(1, 1, 0, 0x0B00 + 12);
        map.set(1, 2, 0, 0x1700);

        let flags = Table::new(0x0B00 + 13, 1, 1);
        flags.set(0x0B00 + 12, 0, 0, crate::tile::FLAG_TABLE);

        let mut params = input(&map, Rect::new(0, 0, 3, 3));
        params.flags = Some(&flags);
        let batch = build_geometry(&params);

        // Bottom-up: the A4 wall composes first, then the table's six pieces.
        assert_eq!(batch.ground.len(), 10);
        let legs = &batch.ground[8..10];
        assert_eq!(legs[0].pos.height, 8.0);
        assert_eq!(legs[0].tex.height, 7.0);
        assert_eq!(legs[1].pos.height, 8.0);

        // Without the wall below, legs keep their full half tile.
        map.set(1, 2, 0, 0);
        let batch = build_geometry(&params);
        let legs = &batch.ground[4..6];
        assert_eq!(legs[0].pos.height, 16.0);
        assert_eq!(legs[0].tex.height, 15.0);
    }

    #[test]
    fn flash_tints_cells_and_counts_them() {
        let map = Table::new(2, 1, 1);
        map.set(0, 0, 0, 1);
        map.set(1, 0, 0, 1);

        let flash = Table::new(2, 1, 1);
        flash.set(0, 0, 0, 0x0F00);

        let mut params = input(&map, Rect::new(0, 0, 2, 1));
        params.flash_data = Some(&flash);
        params.flash_opacity = 160;
        let batch = build_geometry(&params);

        assert_eq!(batch.flash_count, 1);
        assert_eq!(batch.ground[0].color, [1.0, 0.0, 0.0, 160.0 / 255.0]);
        assert_eq!(batch.ground[1].color, Quad::NO_BLEND);
    }

    #[test]
    fn modern_shadows_come_from_layer_three() {
        let map = Table::new(2, 2, 4);
        map.set(1, 0, 3, 5);

        let batch = build_geometry(&input(&map, Rect::new(0, 0, 2, 2)));
        assert_eq!(batch.ground.len(), 1);
        let quad = &batch.ground[0];
        assert_eq!(quad.pos, RectF::new(32.0, 0.0, 32.0, 32.0));
        assert_eq!(quad.tex.x, 21.0 * 32.0 + 0.5);
        assert_eq!(quad.tex.y, 27.0 * 32.0 + 0.5);
    }

    #[test]
    fn legacy_shadows_follow_wall_columns() {
        let map = Table::new(4, 4, 1);
        map.set(0, 0, 0, 0x1100);
        map.set(0, 1, 0, 0x1100);

        let mut params = input(&map, Rect::new(0, 0, 4, 4));
        params.convention = MapConvention::Legacy;
        let batch = build_geometry(&params);

        // Two wall tiles of four pieces each, then the inferred shadow.
        assert_eq!(batch.ground.len(), 9);
        let shadow = batch.ground.last().unwrap();
        assert_eq!(shadow.pos, RectF::new(32.0, 32.0, 32.0, 32.0));
        assert_eq!(shadow.tex.x, 21.0 * 32.0 + 0.5);
    }

    #[test]
    fn legacy_shadow_pass_tolerates_missing_map() {
        let params = GeometryInput {
            map_data: None,
            flags: None,
            flash_data: None,
            window: Rect::new(0, 0, 4, 4),
            repeat: Repeat::default(),
            convention: MapConvention::Legacy,
            tile_size: TS,
            flash_opacity: 0,
        };
        assert_eq!(build_geometry(&params), GeometryBatch::default());
    }

    #[test]
    fn id_space_holes_compose_nothing() {
        let map = Table::new(3, 1, 1);
        map.set(0, 0, 0, 0x0400);
        map.set(1, 0, 0, 0x0680);
        map.set(2, 0, 0, -5);

        let batch = build_geometry(&input(&map, Rect::new(0, 0, 3, 1)));
        assert!(batch.ground.is_empty());
        assert!(batch.above.is_empty());
    }
}
