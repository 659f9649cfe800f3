//! Visible-window math.
//!
//! The compositor only builds geometry for the tiles a viewport can show.
//! The window is expressed in tile coordinates and deliberately overscans:
//! one extra column for partial tiles on the right, one extra row above and
//! below so scrolling never pops tiles in at the edge.

use crate::geom::{Point, Rect};

/// Tile-space window covering a pixel viewport scrolled to `origin`.
///
/// `origin` is the combined scroll position (tilemap origin plus host
/// viewport origin) in pixels and may be negative; division truncates
/// toward zero on purpose, mirroring how the scroll offset is folded back
/// in by [`render_offset`]. The window starts one row above the origin row
/// because A4 wall tops overhang the tile below them. A nonpositive
/// `tile_size` yields an empty window.
pub fn view_window(origin: Point, viewport_size: Point, tile_size: i32) -> Rect {
    if tile_size <= 0 {
        return Rect::new(0, 0, 0, 0);
    }
    Rect::new(
        origin.x / tile_size,
        origin.y / tile_size - 1,
        viewport_size.x / tile_size + (viewport_size.x % tile_size != 0) as i32 + 1,
        viewport_size.y / tile_size + (viewport_size.y % tile_size != 0) as i32 + 2,
    )
}

/// Pixel offset applied to the whole composed batch so the window's first
/// tile lands at the correct sub-tile scroll position. Includes one tile of
/// upward shift compensating the extra window row. A nonpositive
/// `tile_size` yields a zero offset.
pub fn render_offset(origin: Point, tile_size: i32) -> Point {
    if tile_size <= 0 {
        return Point::ZERO;
    }
    let display = Point::new(origin.x % tile_size, origin.y % tile_size);
    -display - Point::new(0, tile_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_at_rest_overscans_by_slack() {
        // 17x13-tile viewport, origin at zero.
        let window = view_window(Point::ZERO, Point::new(544, 416), 32);
        assert_eq!(window, Rect::new(0, -1, 18, 15));
        assert_eq!(render_offset(Point::ZERO, 32), Point::new(0, -32));
    }

    #[test]
    fn partial_tile_viewport_gains_a_column() {
        let window = view_window(Point::ZERO, Point::new(545, 416), 32);
        assert_eq!(window.width, 19);
        assert_eq!(window.height, 15);
    }

    #[test]
    fn scrolled_origin_shifts_window_and_offset() {
        let window = view_window(Point::new(5, 37), Point::new(544, 416), 32);
        assert_eq!(window.position(), Point::new(0, 0));
        assert_eq!(render_offset(Point::new(5, 37), 32), Point::new(-5, -37));
    }

    #[test]
    fn negative_origin_truncates_toward_zero() {
        let window = view_window(Point::new(-33, -1), Point::new(544, 416), 32);
        assert_eq!(window.position(), Point::new(-1, -1));
        // -33 % 32 == -1, so the offset leans one pixel right.
        assert_eq!(render_offset(Point::new(-33, -1), 32), Point::new(1, -31));
    }

    #[test]
    fn whole_tile_scroll_moves_window_not_offset() {
        let a = render_offset(Point::new(64, 96), 32);
        let b = render_offset(Point::ZERO, 32);
        assert_eq!(a, b);
        let wa = view_window(Point::new(64, 96), Point::new(544, 416), 32);
        assert_eq!(wa.position(), Point::new(2, 2));
    }

    #[test]
    fn nonpositive_tile_size_yields_empty_window() {
        assert!(view_window(Point::new(5, 9), Point::new(544, 416), 0).is_empty());
        assert!(view_window(Point::ZERO, Point::new(544, 416), -4).is_empty());
        assert_eq!(render_offset(Point::new(5, 9), 0), Point::ZERO);
    }
}
