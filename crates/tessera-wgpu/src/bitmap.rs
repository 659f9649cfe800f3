//! GPU-resident tilesheet pixels.

use std::rc::Rc;

use tessera_core::{Point, Rect, Signal, Watcher};

struct Inner {
    texture: wgpu::Texture,
    size: Point,
    edits: Signal,
}

/// An RGBA8 texture with an edit signal, the unit a tilesheet slot binds.
///
/// Cloning shares the texture, so one sheet can feed several tilemaps. Any
/// write through [`write_pixels`](Bitmap::write_pixels) raises the signal;
/// a [`Tilemap`](crate::Tilemap) watching the slot rebuilds its atlas on
/// the next frame.
#[derive(Clone)]
pub struct Bitmap {
    inner: Rc<Inner>,
}

impl Bitmap {
    /// Creates an uninitialized bitmap. Extents are clamped to at least one
    /// texel.
    pub fn new(device: &wgpu::Device, size: Point) -> Self {
        let size = Point::new(size.x.max(1), size.y.max(1));
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("tilesheet"),
            size: wgpu::Extent3d {
                width: size.x as u32,
                height: size.y as u32,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_SRC
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        Self {
            inner: Rc::new(Inner {
                texture,
                size,
                edits: Signal::new(),
            }),
        }
    }

    /// Creates a bitmap and uploads `pixels`, tightly packed RGBA rows
    /// covering the full extent.
    pub fn from_pixels(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        size: Point,
        pixels: &[u8],
    ) -> Self {
        let bitmap = Self::new(device, size);
        let full = Rect::new(0, 0, bitmap.inner.size.x, bitmap.inner.size.y);
        bitmap.write_pixels(queue, full, pixels);
        bitmap
    }

    /// Uploads tightly packed RGBA rows into `region` and raises the edit
    /// signal. Writes that leave the bitmap bounds or come up short on
    /// pixel data are ignored, as for table cells.
    pub fn write_pixels(&self, queue: &wgpu::Queue, region: Rect, pixels: &[u8]) {
        let bounds = Rect::new(0, 0, self.inner.size.x, self.inner.size.y);
        if region.is_empty() || region.intersect(bounds) != region {
            return;
        }
        let needed = region.width as usize * region.height as usize * 4;
        if pixels.len() < needed {
            return;
        }

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.inner.texture,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: region.x as u32,
                    y: region.y as u32,
                    z: 0,
                },
                aspect: wgpu::TextureAspect::All,
            },
            &pixels[..needed],
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(region.width as u32 * 4),
                rows_per_image: Some(region.height as u32),
            },
            wgpu::Extent3d {
                width: region.width as u32,
                height: region.height as u32,
                depth_or_array_layers: 1,
            },
        );
        self.inner.edits.notify();
    }

    /// Raises the edit signal. For callers that blit into
    /// [`texture`](Bitmap::texture) through their own encoder.
    pub fn notify_edited(&self) {
        self.inner.edits.notify();
    }

    /// Subscribes to edits.
    pub fn watch(&self) -> Watcher {
        self.inner.edits.watch()
    }

    /// Extent in pixels.
    #[inline]
    pub fn size(&self) -> Point {
        self.inner.size
    }

    /// The underlying texture.
    #[inline]
    pub fn texture(&self) -> &wgpu::Texture {
        &self.inner.texture
    }
}
