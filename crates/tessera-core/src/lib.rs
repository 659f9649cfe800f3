//! CPU side of a legacy-compatible autotile tilemap compositor.
//!
//! This crate turns legacy 16-bit tile grids into drawable geometry: table
//! containers with change notification, the packed-atlas layout, the
//! 48-pattern autotile decoders, the visible-window walk, and the
//! animation/flash clock. Everything here is renderer-agnostic; the
//! companion `tessera-wgpu` crate uploads the results to the GPU.

pub mod animation;
pub mod atlas;
pub mod autotile;
pub mod decode;
pub mod geom;
pub mod geometry;
pub mod quad;
pub mod table;
pub mod tile;
pub mod viewport;
pub mod watch;

pub use animation::AnimationClock;
pub use atlas::{AtlasCopy, AtlasSlot, ATLAS_LAYOUT, ATLAS_TILES, SHADOW_AREA};
pub use geom::{Point, Rect, RectF};
pub use geometry::{build_geometry, GeometryBatch, GeometryInput, Repeat};
pub use quad::Quad;
pub use table::Table;
pub use tile::{MapConvention, TileClass};
pub use watch::{Signal, Watcher};
