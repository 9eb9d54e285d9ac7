//! Line pass for the dashed water-flow paths and the helper grid.
//!
//! Both layers share one pipeline. Each layer carries its own dash uniform:
//! the water lines use the configured dash/gap pattern with an animated
//! offset, the grid sets `gap_size = 0` which the shader treats as solid.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::gpu::{depth_stencil_state, uniform_entry, RenderContext};
use crate::options::FlowOptions;
use crate::scene::{grid_color, hex_color, FlowLine};

/// Vertex layout for all line geometry: position plus cumulative arc
/// length from the start of its polyline.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Arc length from the polyline start, meters.
    pub distance: f32,
}

/// NOTE: Must match the WGSL struct layout exactly (32 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct DashUniform {
    color: [f32; 3],
    dash_size: f32,
    gap_size: f32,
    dash_offset: f32,
    _pad: [f32; 2],
}

struct LineLayer {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    uniform: DashUniform,
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl LineLayer {
    fn new(
        context: &RenderContext,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        vertices: &[LineVertex],
        uniform: DashUniform,
    ) -> Self {
        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Vertex Buffer")),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Dash Uniform")),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );
        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("{label} Bind Group")),
                    layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                });
        Self {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
            uniform,
            buffer,
            bind_group,
        }
    }
}

/// Draws the dashed water lines and the solid helper grid.
pub struct FlowRenderer {
    pipeline: wgpu::RenderPipeline,
    water: LineLayer,
    grid: LineLayer,
}

impl FlowRenderer {
    /// Upload both line layers and build the shared pipeline.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        options: &FlowOptions,
        flow_lines: &[FlowLine],
        grid_segments: &[[Vec3; 2]],
    ) -> Self {
        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Dash Bind Group Layout"),
                entries: &[uniform_entry(0)],
            },
        );

        let water = LineLayer::new(
            context,
            &layout,
            "Water Flow",
            &flow_vertices(flow_lines),
            DashUniform {
                color: hex_color(options.color),
                dash_size: options.dash_size,
                gap_size: options.gap_size,
                dash_offset: 0.0,
                _pad: [0.0; 2],
            },
        );
        let grid = LineLayer::new(
            context,
            &layout,
            "Grid",
            &grid_vertices(grid_segments),
            DashUniform {
                color: grid_color(),
                dash_size: 1.0,
                gap_size: 0.0,
                dash_offset: 0.0,
                _pad: [0.0; 2],
            },
        );

        let shader = context.device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: Some("Flow Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/flow.wgsl").into(),
                ),
            },
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Flow Pipeline Layout"),
                bind_group_layouts: &[camera_layout, &layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Flow Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: size_of::<LineVertex>()
                            as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32,
                        ],
                    }],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    ..Default::default()
                },
                // Lines read depth but never occlude the solid pass
                depth_stencil: Some(depth_stencil_state(false)),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Self {
            pipeline,
            water,
            grid,
        }
    }

    /// Scroll the water dash pattern. `offset` is in meters of arc length.
    pub fn set_dash_offset(&mut self, queue: &wgpu::Queue, offset: f32) {
        self.water.uniform.dash_offset = offset;
        queue.write_buffer(
            &self.water.buffer,
            0,
            bytemuck::cast_slice(&[self.water.uniform]),
        );
    }

    /// Record both layers into an open render pass.
    pub fn draw<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        camera: &'pass wgpu::BindGroup,
        show_water: bool,
        show_grid: bool,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera, &[]);
        for (layer, visible) in
            [(&self.grid, show_grid), (&self.water, show_water)]
        {
            if visible && layer.vertex_count > 0 {
                pass.set_bind_group(1, &layer.bind_group, &[]);
                pass.set_vertex_buffer(0, layer.vertex_buffer.slice(..));
                pass.draw(0..layer.vertex_count, 0..1);
            }
        }
    }
}

/// Flatten polylines into line-list vertices carrying cumulative distance.
fn flow_vertices(lines: &[FlowLine]) -> Vec<LineVertex> {
    let mut vertices = Vec::new();
    for line in lines {
        for window in line.points.windows(2).zip(line.distances.windows(2)) {
            let (points, distances) = window;
            vertices.push(LineVertex {
                position: points[0].to_array(),
                distance: distances[0],
            });
            vertices.push(LineVertex {
                position: points[1].to_array(),
                distance: distances[1],
            });
        }
    }
    vertices
}

fn grid_vertices(segments: &[[Vec3; 2]]) -> Vec<LineVertex> {
    segments
        .iter()
        .flat_map(|segment| {
            segment.iter().map(|point| LineVertex {
                position: point.to_array(),
                distance: 0.0,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_vertices_carry_cumulative_distance() {
        let line = FlowLine::new(vec![
            Vec3::ZERO,
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(3.0, 4.0, 0.0),
        ]);
        let vertices = flow_vertices(std::slice::from_ref(&line));
        assert_eq!(vertices.len(), 4);
        assert_eq!(vertices[1].distance, 3.0);
        assert_eq!(vertices[2].distance, 3.0);
        assert_eq!(vertices[3].distance, 7.0);
    }

    #[test]
    fn grid_vertices_are_paired() {
        let segments =
            [[Vec3::ZERO, Vec3::X], [Vec3::Z, Vec3::new(0.0, 0.0, 2.0)]];
        let vertices = grid_vertices(&segments);
        assert_eq!(vertices.len(), 4);
        assert!(vertices.iter().all(|v| v.distance == 0.0));
    }
}
