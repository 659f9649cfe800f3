//! Tile-id classification.
//!
//! The legacy numbering packs six tile classes into one 16-bit id space.
//! [`classify`] turns a raw id into an explicit [`TileClass`] variant with
//! the autotile/pattern split already applied, replacing the historical
//! chain of bare range checks. Ids outside every class (including 0 and
//! negative values) classify as `None` and draw nothing.
//!
//! | id range          | class | family                          |
//! |-------------------|-------|---------------------------------|
//! | [0x0001, 0x0400)  | B–E   | direct atlas lookup             |
//! | [0x0600, 0x0680)  | A5    | direct atlas lookup             |
//! | [0x0800, 0x0B00)  | A1    | regular or waterfall autotile   |
//! | [0x0B00, 0x1100)  | A2    | regular or table autotile       |
//! | [0x1100, 0x1700)  | A3    | wall autotile                   |
//! | [0x1700, 0x2000)  | A4    | alternating regular/wall bands  |

// ---------------------------------------------------------------------------
// Id space constants
// ---------------------------------------------------------------------------

/// End of the B–E id region (exclusive).
pub const TILE_BCDE_END: i32 = 0x0400;
/// First A5 id.
pub const TILE_A5_BASE: i32 = 0x0600;
/// End of the A5 region (exclusive).
pub const TILE_A5_END: i32 = 0x0680;
/// First A1 id.
pub const TILE_A1_BASE: i32 = 0x0800;
/// First A2 id.
pub const TILE_A2_BASE: i32 = 0x0B00;
/// First A3 id.
pub const TILE_A3_BASE: i32 = 0x1100;
/// First A4 id.
pub const TILE_A4_BASE: i32 = 0x1700;
/// End of the A4 region (exclusive).
pub const TILE_A4_END: i32 = 0x2000;

/// Ids per autotile: 48 patterns.
pub const AUTOTILE_STRIDE: i32 = 0x30;

/// Flag bit: draw above characters (honored on overlay layers only).
pub const FLAG_OVER_PLAYER: i16 = 0x10;
/// Flag bit: elevated "table" autotile (modern numbering).
pub const FLAG_TABLE: i16 = 0x80;

// ---------------------------------------------------------------------------
// Convention
// ---------------------------------------------------------------------------

/// Which numbering convention the map data follows.
///
/// `Legacy` maps carry no explicit table flag or shadow layer: table mode
/// comes from a numeric heuristic and shadows from wall adjacency. `Modern`
/// maps use flag bit [`FLAG_TABLE`] and an explicit z=3 shadow layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapConvention {
    Legacy,
    #[default]
    Modern,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// A classified tile id. Autotile variants carry the slot index within the
/// class and the 0–47 pattern id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileClass {
    /// Static B–E tile, raw id 1..0x400 (bank bits included).
    Bcde(i32),
    /// Static A5 tile, local index 0..0x80.
    A5(i32),
    A1 { autotile: i32, pattern: i32 },
    A2 { autotile: i32, pattern: i32 },
    A3 { autotile: i32, pattern: i32 },
    A4 { autotile: i32, pattern: i32 },
}

/// Classify a raw tile id. Ids outside every class region yield `None`.
pub fn classify(tile_id: i16) -> Option<TileClass> {
    let id = tile_id as i32;
    match id {
        TILE_A1_BASE..TILE_A2_BASE => {
            let rel = id - TILE_A1_BASE;
            Some(TileClass::A1 {
                autotile: rel / AUTOTILE_STRIDE,
                pattern: rel % AUTOTILE_STRIDE,
            })
        }
        TILE_A2_BASE..TILE_A3_BASE => {
            let rel = id - TILE_A2_BASE;
            Some(TileClass::A2 {
                autotile: rel / AUTOTILE_STRIDE,
                pattern: rel % AUTOTILE_STRIDE,
            })
        }
        TILE_A3_BASE..TILE_A4_BASE => {
            let rel = id - TILE_A3_BASE;
            Some(TileClass::A3 {
                autotile: rel / AUTOTILE_STRIDE,
                pattern: rel % AUTOTILE_STRIDE,
            })
        }
        TILE_A4_BASE..TILE_A4_END => {
            let rel = id - TILE_A4_BASE;
            Some(TileClass::A4 {
                autotile: rel / AUTOTILE_STRIDE,
                pattern: rel % AUTOTILE_STRIDE,
            })
        }
        TILE_A5_BASE..TILE_A5_END => Some(TileClass::A5(id - TILE_A5_BASE)),
        1..TILE_BCDE_END => Some(TileClass::Bcde(id)),
        _ => None,
    }
}

/// Whether an id lies in the combined A3/A4 wall region, the reference used
/// by both table-leg occlusion and legacy shadow inference.
#[inline]
pub const fn in_wall_region(tile_id: i16) -> bool {
    let id = tile_id as i32;
    id >= TILE_A3_BASE && id < TILE_A4_END
}

/// Whether an id lies in the A4 region (table-leg occlusion reference).
#[inline]
pub const fn in_a4_region(tile_id: i16) -> bool {
    let id = tile_id as i32;
    id >= TILE_A4_BASE && id < TILE_A4_END
}

/// Resolve elevated ("table") mode for an A2 tile.
///
/// Modern numbering reads the flag bit; legacy numbering marks the last
/// autotile column of each A2 sheet (slot index 7 mod 8) as tables.
#[inline]
pub fn a2_table_mode(convention: MapConvention, flag: i16, tile_id: i16) -> bool {
    match convention {
        MapConvention::Modern => flag & FLAG_TABLE != 0,
        MapConvention::Legacy => {
            (tile_id as i32 - TILE_A2_BASE) % (8 * AUTOTILE_STRIDE) >= 7 * AUTOTILE_STRIDE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_ids_unclassified() {
        assert_eq!(classify(0), None);
        assert_eq!(classify(-1), None);
        assert_eq!(classify(i16::MIN), None);
    }

    #[test]
    fn gaps_between_regions_unclassified() {
        assert_eq!(classify(0x0400), None);
        assert_eq!(classify(0x05FF), None);
        assert_eq!(classify(0x0680), None);
        assert_eq!(classify(0x07FF), None);
        assert_eq!(classify(0x2000), None);
        assert_eq!(classify(0x7FFF), None);
    }

    #[test]
    fn bcde_region() {
        assert_eq!(classify(1), Some(TileClass::Bcde(1)));
        assert_eq!(classify(0x03FF), Some(TileClass::Bcde(0x03FF)));
    }

    #[test]
    fn a5_region() {
        assert_eq!(classify(0x0600), Some(TileClass::A5(0)));
        assert_eq!(classify(0x067F), Some(TileClass::A5(0x7F)));
    }

    #[test]
    fn autotile_split() {
        assert_eq!(
            classify(0x0800),
            Some(TileClass::A1 {
                autotile: 0,
                pattern: 0
            })
        );
        assert_eq!(
            classify(0x0AFF),
            Some(TileClass::A1 {
                autotile: 15,
                pattern: 0x2F
            })
        );
        assert_eq!(
            classify(0x0B00 + 0x30 * 3 + 17),
            Some(TileClass::A2 {
                autotile: 3,
                pattern: 17
            })
        );
        assert_eq!(
            classify(0x1100),
            Some(TileClass::A3 {
                autotile: 0,
                pattern: 0
            })
        );
        assert_eq!(
            classify(0x1FFF),
            Some(TileClass::A4 {
                autotile: 0x8FF / 0x30,
                pattern: 0x8FF % 0x30
            })
        );
    }

    #[test]
    fn wall_region_bounds() {
        assert!(!in_wall_region(0x10FF));
        assert!(in_wall_region(0x1100));
        assert!(in_wall_region(0x1FFF));
        assert!(!in_wall_region(0x2000));
        assert!(!in_a4_region(0x16FF));
        assert!(in_a4_region(0x1700));
    }

    #[test]
    fn table_mode_modern_uses_flag() {
        let id = 0x0B00;
        assert!(a2_table_mode(MapConvention::Modern, FLAG_TABLE, id));
        assert!(!a2_table_mode(MapConvention::Modern, 0, id));
    }

    #[test]
    fn table_mode_legacy_uses_slot_column() {
        // Slot index 7 within each bank of 8 is the table column.
        for slot in 0..16 {
            let id = (0x0B00 + slot * 0x30) as i16;
            let expect = slot % 8 == 7;
            assert_eq!(a2_table_mode(MapConvention::Legacy, 0, id), expect);
        }
    }
}
