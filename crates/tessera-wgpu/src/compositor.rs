//! The tilemap frame controller.
//!
//! [`Tilemap`] owns the two cached products of the CPU side, the packed
//! atlas texture and the composed quad batch, plus the GPU buffers they
//! feed. Each frame runs in two stages: [`before_render`](Tilemap::before_render)
//! outside a render pass refreshes whichever cache went stale and uploads
//! the per-frame uniform, then [`render_ground`](Tilemap::render_ground)
//! and [`render_above`](Tilemap::render_above) issue the two indexed draws
//! from the shared vertex buffer.

use std::rc::Rc;

use wgpu::util::DeviceExt;

use tessera_core::atlas::{self, AtlasSlot};
use tessera_core::geometry::{build_geometry, GeometryBatch, GeometryInput, Repeat};
use tessera_core::viewport;
use tessera_core::{AnimationClock, MapConvention, Point, Quad, Rect, Table, Watcher};

use crate::bitmap::Bitmap;
use crate::pipeline::{FrameParams, TilemapPipeline, Vertex, WorldBinding};

/// Index template for one quad, two triangles over four corners.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Construction parameters for [`Tilemap`].
#[derive(Debug, Clone, Copy)]
pub struct TilemapDesc {
    /// Edge length of one map tile in pixels.
    pub tile_size: i32,
    /// Which numbering era the map data follows; selects the shadow source
    /// and the table-tile test.
    pub convention: MapConvention,
}

impl Default for TilemapDesc {
    fn default() -> Self {
        Self {
            tile_size: 32,
            convention: MapConvention::Modern,
        }
    }
}

// ---------------------------------------------------------------------------
// Tilemap
// ---------------------------------------------------------------------------

struct TableSlot {
    table: Table,
    edits: Watcher,
}

struct BitmapSlot {
    bitmap: Bitmap,
    edits: Watcher,
}

struct AtlasTarget {
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// Scroll, clock and staleness bookkeeping, kept apart from the GPU
/// resources so the invalidation rules can be exercised without a device.
struct CacheState {
    origin: Point,
    repeat: Repeat,
    clock: AnimationClock,
    /// Flashing cells in the last batch; non-zero forces a rebuild per tick
    /// so the baked flash alpha tracks the clock.
    flash_count: u32,
    window: Rect,
    render_offset: Point,
    atlas_dirty: bool,
    map_buffer_dirty: bool,
}

impl CacheState {
    fn new() -> Self {
        Self {
            origin: Point::new(0, 0),
            repeat: Repeat::default(),
            clock: AnimationClock::new(),
            flash_count: 0,
            window: Rect::new(0, 0, 0, 0),
            render_offset: Point::new(0, 0),
            atlas_dirty: false,
            map_buffer_dirty: false,
        }
    }

    /// Advances the clocks by one game tick. A batch that baked a flash
    /// tint goes stale so the next frame re-bakes it at the new opacity.
    fn tick(&mut self) {
        self.clock.tick();
        if self.flash_count > 0 {
            self.map_buffer_dirty = true;
        }
    }

    fn set_repeat(&mut self, repeat: Repeat) {
        self.repeat = repeat;
        self.map_buffer_dirty = true;
    }

    /// Recomputes the visible tile window and the sub-tile render offset.
    /// A moved window stales the batch; a bare offset change does not.
    fn update_window(&mut self, view_rect: Rect, view_origin: Point, tile_size: i32) {
        let scroll = self.origin + view_origin;
        let window = viewport::view_window(scroll, view_rect.size(), tile_size);
        self.render_offset = viewport::render_offset(scroll, tile_size);

        if window != self.window {
            self.window = window;
            self.map_buffer_dirty = true;
        }
    }
}

/// A scrolling, animated tile layer composed from shared tables and
/// tilesheet bitmaps.
///
/// The tilemap watches every table and bitmap it is given and refreshes
/// its caches lazily: bitmap edits invalidate the packed atlas, table
/// edits and window movement invalidate the quad batch. The per-frame
/// scroll and animation offsets ride in a uniform, so steady scrolling
/// within a tile and tile animation cost no geometry rebuild at all.
pub struct Tilemap {
    pipeline: Rc<TilemapPipeline>,
    tile_size: i32,
    convention: MapConvention,

    map_data: Option<TableSlot>,
    flags: Option<TableSlot>,
    flash_data: Option<TableSlot>,
    bitmaps: [Option<BitmapSlot>; AtlasSlot::COUNT],

    visible: bool,
    caches: CacheState,

    atlas: Option<AtlasTarget>,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    /// Quads the index buffer currently covers. Grows, never shrinks.
    index_quads: u32,
    ground_count: u32,
    above_count: u32,

    params_buffer: wgpu::Buffer,
}

impl Tilemap {
    /// Creates an empty tilemap. Nothing draws until map data and at least
    /// one tilesheet are assigned.
    pub fn new(device: &wgpu::Device, pipeline: Rc<TilemapPipeline>, desc: TilemapDesc) -> Self {
        if desc.tile_size < 1 {
            log::warn!("tile size {} clamped to 1", desc.tile_size);
        }

        let params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tilemap params"),
            size: std::mem::size_of::<FrameParams>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            tile_size: desc.tile_size.max(1),
            convention: desc.convention,
            map_data: None,
            flags: None,
            flash_data: None,
            bitmaps: std::array::from_fn(|_| None),
            visible: true,
            caches: CacheState::new(),
            atlas: None,
            vertex_buffer: None,
            index_buffer: None,
            index_quads: 0,
            ground_count: 0,
            above_count: 0,
            params_buffer,
        }
    }

    // -- data assignment ----------------------------------------------------

    /// Assigns the tile-id table (layers on the z axis).
    pub fn set_map_data(&mut self, table: Option<Table>) {
        self.map_data = table.map(|table| TableSlot {
            edits: table.watch(),
            table,
        });
        self.caches.map_buffer_dirty = true;
    }

    pub fn map_data(&self) -> Option<&Table> {
        self.map_data.as_ref().map(|slot| &slot.table)
    }

    /// Assigns the per-tile-id flag table.
    pub fn set_flags(&mut self, table: Option<Table>) {
        self.flags = table.map(|table| TableSlot {
            edits: table.watch(),
            table,
        });
        self.caches.map_buffer_dirty = true;
    }

    pub fn flags(&self) -> Option<&Table> {
        self.flags.as_ref().map(|slot| &slot.table)
    }

    /// Assigns the per-cell flash color table, nibble-packed 0x0RGB.
    pub fn set_flash_data(&mut self, table: Option<Table>) {
        self.flash_data = table.map(|table| TableSlot {
            edits: table.watch(),
            table,
        });
        self.caches.map_buffer_dirty = true;
    }

    pub fn flash_data(&self) -> Option<&Table> {
        self.flash_data.as_ref().map(|slot| &slot.table)
    }

    /// Binds a tilesheet to `slot`, or clears it with `None`.
    pub fn set_bitmap(&mut self, slot: AtlasSlot, bitmap: Option<Bitmap>) {
        self.bitmaps[slot.index()] = bitmap.map(|bitmap| BitmapSlot {
            edits: bitmap.watch(),
            bitmap,
        });
        self.caches.atlas_dirty = true;
    }

    pub fn bitmap(&self, slot: AtlasSlot) -> Option<&Bitmap> {
        self.bitmaps[slot.index()].as_ref().map(|slot| &slot.bitmap)
    }

    // -- scroll state -------------------------------------------------------

    #[inline]
    pub fn origin(&self) -> Point {
        self.caches.origin
    }

    /// Sets the scroll origin in pixels. Sub-tile movement only shifts the
    /// render offset; crossing a tile boundary moves the window and marks
    /// the batch stale on the next frame.
    pub fn set_origin(&mut self, origin: Point) {
        self.caches.origin = origin;
    }

    #[inline]
    pub fn repeat(&self) -> Repeat {
        self.caches.repeat
    }

    /// Sets the per-axis wrap behavior for reads past the map edge.
    pub fn set_repeat(&mut self, repeat: Repeat) {
        self.caches.set_repeat(repeat);
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the tilemap. Hidden tilemaps skip cache maintenance;
    /// the caches catch up on the first visible frame.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    #[inline]
    pub fn convention(&self) -> MapConvention {
        self.convention
    }

    // -- frame protocol -----------------------------------------------------

    /// Advances the animation and flash clocks by one game tick. Call once
    /// per update, not per rendered frame.
    pub fn update(&mut self) {
        self.caches.tick();
    }

    /// Refreshes stale caches and uploads the per-frame uniform. Must run
    /// outside a render pass; the atlas rebuild records texture copies on
    /// `encoder`.
    ///
    /// `view_rect` is the target region in pixels; only its extent enters
    /// the window math, placement is the world transform's concern.
    /// `view_origin` is the containing view's own scroll, added to this
    /// tilemap's origin.
    pub fn before_render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view_rect: Rect,
        view_origin: Point,
    ) {
        if !self.visible {
            return;
        }

        self.poll_watchers();
        self.caches.update_window(view_rect, view_origin, self.tile_size);

        if self.caches.atlas_dirty {
            self.rebuild_atlas(device, queue, encoder);
            self.caches.atlas_dirty = false;
        }

        if self.caches.map_buffer_dirty {
            let batch = self.build_batch();
            self.upload_batch(device, queue, batch);
            self.caches.map_buffer_dirty = false;
        }

        self.upload_params(queue);
    }

    /// Draws the ground run: every quad below the character layer.
    pub fn render_ground(&self, pass: &mut wgpu::RenderPass<'_>, world: &WorldBinding) {
        if !self.visible || self.ground_count == 0 {
            return;
        }
        self.submit_draw(pass, world, 0..self.ground_count * 6);
    }

    /// Draws the above run: overlay tiles composited over characters.
    pub fn render_above(&self, pass: &mut wgpu::RenderPass<'_>, world: &WorldBinding) {
        if !self.visible || self.above_count == 0 {
            return;
        }
        let first = self.ground_count * 6;
        self.submit_draw(pass, world, first..first + self.above_count * 6);
    }

    // -- internals ----------------------------------------------------------

    /// Folds pending edit notifications into the dirty flags.
    fn poll_watchers(&mut self) {
        for slot in self.bitmaps.iter().flatten() {
            if slot.edits.take() {
                self.caches.atlas_dirty = true;
            }
        }

        let tables = [&self.map_data, &self.flags, &self.flash_data];
        for slot in tables.into_iter().flatten() {
            if slot.edits.take() {
                self.caches.map_buffer_dirty = true;
            }
        }
    }

    /// Recreates the atlas texture and repopulates it from the bound
    /// tilesheets plus the generated shadow strip.
    fn rebuild_atlas(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
    ) {
        let size = atlas::atlas_size_px(self.tile_size);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("tilemap atlas"),
            size: wgpu::Extent3d {
                width: size.x as u32,
                height: size.y as u32,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let mut sheet_sizes: [Option<Point>; AtlasSlot::COUNT] = [None; AtlasSlot::COUNT];
        for (sheet, slot) in sheet_sizes.iter_mut().zip(self.bitmaps.iter()) {
            *sheet = slot.as_ref().map(|slot| slot.bitmap.size());
        }

        let plan = atlas::copy_plan(self.tile_size, &sheet_sizes);
        for copy in &plan {
            let Some(slot) = &self.bitmaps[copy.slot.index()] else {
                continue;
            };
            encoder.copy_texture_to_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: slot.bitmap.texture(),
                    mip_level: 0,
                    origin: wgpu::Origin3d {
                        x: copy.src.x as u32,
                        y: copy.src.y as u32,
                        z: 0,
                    },
                    aspect: wgpu::TextureAspect::All,
                },
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d {
                        x: copy.dst.x as u32,
                        y: copy.dst.y as u32,
                        z: 0,
                    },
                    aspect: wgpu::TextureAspect::All,
                },
                wgpu::Extent3d {
                    width: copy.src.width as u32,
                    height: copy.src.height as u32,
                    depth_or_array_layers: 1,
                },
            );
        }

        let shadow_area = atlas::SHADOW_AREA.scale(self.tile_size);
        let shadow_pixels = atlas::shadow_strip_pixels(self.tile_size);
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: shadow_area.x as u32,
                    y: shadow_area.y as u32,
                    z: 0,
                },
                aspect: wgpu::TextureAspect::All,
            },
            &shadow_pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(shadow_area.width as u32 * 4),
                rows_per_image: Some(shadow_area.height as u32),
            },
            wgpu::Extent3d {
                width: shadow_area.width as u32,
                height: shadow_area.height as u32,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = self
            .pipeline
            .create_frame_bind_group(device, &self.params_buffer, &view);

        log::debug!(
            "atlas rebuilt: {}x{} px, {} sheet copies",
            size.x,
            size.y,
            plan.len()
        );
        self.atlas = Some(AtlasTarget {
            texture,
            bind_group,
        });
    }

    fn build_batch(&self) -> GeometryBatch {
        build_geometry(&GeometryInput {
            map_data: self.map_data.as_ref().map(|slot| &slot.table),
            flags: self.flags.as_ref().map(|slot| &slot.table),
            flash_data: self.flash_data.as_ref().map(|slot| &slot.table),
            window: self.caches.window,
            repeat: self.caches.repeat,
            convention: self.convention,
            tile_size: self.tile_size,
            flash_opacity: self.caches.clock.flash_opacity(),
        })
    }

    /// Writes a composed batch into the vertex buffer, ground run first,
    /// growing the vertex and index buffers as needed.
    fn upload_batch(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, batch: GeometryBatch) {
        self.ground_count = batch.ground.len() as u32;
        self.above_count = batch.above.len() as u32;
        self.caches.flash_count = batch.flash_count;

        let quad_count = batch.ground.len() + batch.above.len();
        if quad_count == 0 {
            return;
        }

        let mut vertices = Vec::with_capacity(quad_count * 4);
        for quad in batch.ground.iter().chain(batch.above.iter()) {
            push_quad_vertices(&mut vertices, quad);
        }

        let data: &[u8] = bytemuck::cast_slice(&vertices);
        let grown = match &self.vertex_buffer {
            Some(buffer) => data.len() as u64 > buffer.size(),
            None => true,
        };
        if grown {
            log::debug!("vertex buffer grows to {} quads", quad_count);
            self.vertex_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("tilemap vertices"),
                size: data.len() as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }
        if let Some(buffer) = &self.vertex_buffer {
            queue.write_buffer(buffer, 0, data);
        }

        if quad_count as u32 > self.index_quads {
            let indices = quad_index_list(quad_count as u32);
            self.index_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("tilemap indices"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            }));
            self.index_quads = quad_count as u32;
        }
    }

    /// Uploads the per-frame uniform. Runs every frame regardless of cache
    /// state; scrolling and animation live here.
    fn upload_params(&self, queue: &wgpu::Queue) {
        let atlas_size = match &self.atlas {
            Some(atlas) => Point::new(atlas.texture.width() as i32, atlas.texture.height() as i32),
            None => atlas::atlas_size_px(self.tile_size),
        };
        let anim = self.caches.clock.atlas_offset(self.tile_size);
        let ts = self.tile_size as f32;

        let params = FrameParams {
            offset_and_tex_size: [
                self.caches.render_offset.x as f32,
                self.caches.render_offset.y as f32,
                1.0 / atlas_size.x as f32,
                1.0 / atlas_size.y as f32,
            ],
            animation_and_tile_size: [anim.x as f32, anim.y as f32, ts, ts],
        };
        queue.write_buffer(&self.params_buffer, 0, bytemuck::bytes_of(&params));
    }

    fn submit_draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        world: &WorldBinding,
        indices: std::ops::Range<u32>,
    ) {
        let (Some(atlas), Some(vertices), Some(index_buffer)) =
            (&self.atlas, &self.vertex_buffer, &self.index_buffer)
        else {
            return;
        };

        pass.set_pipeline(&self.pipeline.pipeline);
        pass.set_bind_group(0, world.bind_group(), &[]);
        pass.set_bind_group(1, &atlas.bind_group, &[]);
        pass.set_vertex_buffer(0, vertices.slice(..));
        pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(indices, 0, 0..1);
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Expands one quad into its four corners: left-top, right-top,
/// right-bottom, left-bottom.
fn push_quad_vertices(out: &mut Vec<Vertex>, quad: &Quad) {
    let pos = quad.pos;
    let tex = quad.tex;
    let corners = [
        (pos.x, pos.y, tex.x, tex.y),
        (pos.x + pos.width, pos.y, tex.x + tex.width, tex.y),
        (
            pos.x + pos.width,
            pos.y + pos.height,
            tex.x + tex.width,
            tex.y + tex.height,
        ),
        (pos.x, pos.y + pos.height, tex.x, tex.y + tex.height),
    ];
    for (px, py, tx, ty) in corners {
        out.push(Vertex {
            position: [px, py, 0.0, 1.0],
            texcoord: [tx, ty],
            color: quad.color,
        });
    }
}

/// Index list covering `quads` consecutive quads.
fn quad_index_list(quads: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity(quads as usize * 6);
    for quad in 0..quads {
        for offset in QUAD_INDICES {
            indices.push(quad * 4 + offset);
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::RectF;

    #[test]
    fn quad_corners_wind_clockwise_from_left_top() {
        let quad = Quad::new(
            RectF::new(10.0, 20.0, 32.0, 16.0),
            RectF::new(0.5, 64.5, 31.0, 15.0),
            Quad::NO_BLEND,
        );
        let mut vertices = Vec::new();
        push_quad_vertices(&mut vertices, &quad);

        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[0].position, [10.0, 20.0, 0.0, 1.0]);
        assert_eq!(vertices[1].position, [42.0, 20.0, 0.0, 1.0]);
        assert_eq!(vertices[2].position, [42.0, 36.0, 0.0, 1.0]);
        assert_eq!(vertices[3].position, [10.0, 36.0, 0.0, 1.0]);
        assert_eq!(vertices[0].texcoord, [0.5, 64.5]);
        assert_eq!(vertices[2].texcoord, [31.5, 79.5]);
    }

    #[test]
    fn index_list_tiles_the_template() {
        assert_eq!(quad_index_list(1), vec![0, 1, 2, 2, 3, 0]);
        assert_eq!(quad_index_list(2)[6..], [4, 5, 6, 6, 7, 4]);
        assert_eq!(quad_index_list(3).len(), 18);
    }

    #[test]
    fn flashing_batch_goes_stale_on_tick() {
        let mut caches = CacheState::new();
        caches.tick();
        assert!(!caches.map_buffer_dirty);

        caches.flash_count = 1;
        caches.tick();
        assert!(caches.map_buffer_dirty);
    }

    #[test]
    fn repeat_write_stales_the_batch() {
        let mut caches = CacheState::new();
        caches.set_repeat(Repeat { x: false, y: true });
        assert!(caches.map_buffer_dirty);
        assert_eq!(caches.repeat, Repeat { x: false, y: true });
    }

    #[test]
    fn scroll_stales_the_batch_only_across_tile_boundaries() {
        let view = Rect::new(0, 0, 544, 416);
        let mut caches = CacheState::new();
        caches.update_window(view, Point::ZERO, 32);
        assert!(caches.map_buffer_dirty);

        // Sub-tile scroll: the offset moves, the window holds.
        caches.map_buffer_dirty = false;
        caches.origin = Point::new(5, 0);
        caches.update_window(view, Point::ZERO, 32);
        assert!(!caches.map_buffer_dirty);
        assert_eq!(caches.render_offset, Point::new(-5, -32));

        // Crossing a tile boundary moves the window.
        caches.origin = Point::new(32, 0);
        caches.update_window(view, Point::ZERO, 32);
        assert!(caches.map_buffer_dirty);
    }
}
