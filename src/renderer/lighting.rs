//! Shared lighting uniform: one hemisphere fill plus one directional sun.

use wgpu::util::DeviceExt;

use crate::gpu::{uniform_entry, RenderContext};

/// Lighting configuration shared across the mesh shader.
/// NOTE: Must match the WGSL struct layout exactly (48 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Sun direction (normalized, pointing toward the scene).
    pub sun_dir: [f32; 3],
    /// Sun intensity.
    pub sun_intensity: f32,
    /// Hemisphere sky color.
    pub sky_color: [f32; 3],
    /// Hemisphere intensity.
    pub hemisphere_intensity: f32,
    /// Hemisphere ground color.
    pub ground_color: [f32; 3],
    /// Struct padding to 48 bytes.
    pub _pad: f32,
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self {
            // Sun from the upper front-right, matching the long shadows of
            // a late-morning wash
            sun_dir: normalize([10.0, 12.0, 6.0]),
            sun_intensity: 0.9,
            sky_color: [1.0, 1.0, 1.0],
            hemisphere_intensity: 1.15,
            // Cool asphalt bounce from below
            ground_color: [0.016, 0.028, 0.058],
            _pad: 0.0,
        }
    }
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = v.iter().map(|c| c * c).sum::<f32>().sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rig_values() {
        let rig = LightingUniform::default();
        assert!((rig.hemisphere_intensity - 1.15).abs() < 1e-6);
        assert!((rig.sun_intensity - 0.9).abs() < 1e-6);
        // Direction is unit length and points up from the front-right
        let len_sq: f32 = rig.sun_dir.iter().map(|c| c * c).sum();
        assert!((len_sq - 1.0).abs() < 1e-5);
        assert!(rig.sun_dir.iter().all(|&c| c > 0.0));
    }
}

/// Owns the lighting uniform buffer and its bind group.
pub struct Lighting {
    /// CPU copy of the uniform.
    pub uniform: LightingUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Layout for pipelines that light their surfaces.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over [`Self::buffer`].
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Create the default lighting rig.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let uniform = LightingUniform::default();

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[uniform_entry(0)],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Lighting Bind Group"),
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }
}
