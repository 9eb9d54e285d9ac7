//! Off-screen frame capture to PNG.
//!
//! The engine re-renders the scene into a texture created with the surface
//! format, reads it back through a padded staging buffer, and converts to
//! RGBA on the CPU (swizzling when the surface is BGRA).

use std::path::Path;
use std::sync::mpsc;

use crate::error::PluviaError;
use crate::gpu::RenderContext;

/// Rows in a texture-to-buffer copy must be 256-byte aligned.
const ROW_ALIGN: u32 = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;

/// Read an off-screen color target back to an RGBA image.
///
/// The texture must have been created with `COPY_SRC` usage and a
/// four-byte-per-pixel format.
///
/// # Errors
///
/// Returns [`PluviaError::Snapshot`] if the readback buffer cannot be
/// mapped.
pub fn read_target(
    context: &RenderContext,
    texture: &wgpu::Texture,
    width: u32,
    height: u32,
) -> Result<image::RgbaImage, PluviaError> {
    let bytes_per_row = (width * 4).div_ceil(ROW_ALIGN) * ROW_ALIGN;
    let staging = context.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Snapshot Staging Buffer"),
        size: u64::from(bytes_per_row) * u64::from(height),
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = context.create_encoder();
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &staging,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: Some(height),
            },
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    context.submit(encoder);

    let slice = staging.slice(..);
    let (tx, rx) = mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        let _ = tx.send(result);
    });
    let _ = context.device.poll(wgpu::PollType::Wait);
    rx.recv()
        .map_err(|e| PluviaError::Snapshot(e.to_string()))?
        .map_err(|e| PluviaError::Snapshot(e.to_string()))?;

    let swizzle_bgra = matches!(
        texture.format(),
        wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Bgra8UnormSrgb
    );

    let mapped = slice.get_mapped_range();
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for row in 0..height {
        let start = (row * bytes_per_row) as usize;
        let end = start + (width * 4) as usize;
        pixels.extend_from_slice(&mapped[start..end]);
    }
    drop(mapped);
    staging.unmap();

    if swizzle_bgra {
        for pixel in pixels.chunks_exact_mut(4) {
            pixel.swap(0, 2);
        }
    }

    image::RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
        PluviaError::Snapshot("readback size mismatch".to_owned())
    })
}

/// Write an image as PNG.
///
/// # Errors
///
/// Returns [`PluviaError::Snapshot`] if encoding or writing fails.
pub fn save_png(
    image: &image::RgbaImage,
    path: &Path,
) -> Result<(), PluviaError> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PluviaError::Snapshot(e.to_string()))
}
