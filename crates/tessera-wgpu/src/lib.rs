//! GPU renderer for the tilemap compositor, built on wgpu.
//!
//! Takes the CPU products of `tessera-core` (the packed-atlas plan and the
//! composed quad batches) and turns them into frames: tilesheet textures,
//! the rebuilt atlas, grown-on-demand vertex/index buffers, and the two
//! indexed draws per tilemap.
//!
//! Uses:
//! - [`wgpu`] for textures, buffers and the render pipeline
//! - [`bytemuck`] for plain-old-data uniform and vertex casts
//!
//! A frame goes: `update()` once per game tick, `before_render(..)` outside
//! the pass to refresh stale caches and the per-frame uniform, then
//! `render_ground(..)` and `render_above(..)` inside the pass, with anything
//! in between drawn by the caller.

mod bitmap;
mod compositor;
mod pipeline;

pub use bitmap::Bitmap;
pub use compositor::{Tilemap, TilemapDesc};
pub use pipeline::{TilemapPipeline, WorldBinding, WorldTransform};

pub use tessera_core::{AtlasSlot, MapConvention, Point, Rect, Repeat, Table};
