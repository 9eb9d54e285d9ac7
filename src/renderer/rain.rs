//! Instanced rain streaks.
//!
//! Each drop is one line-list instance of two vertices: the vertex shader
//! places the first at the drop position and drops the second straight down
//! by the streak length. Positions stream into a growable buffer every
//! frame.

use wgpu::util::DeviceExt;

use crate::gpu::{depth_stencil_state, uniform_entry, DynamicBuffer, RenderContext};
use crate::options::RainOptions;
use crate::scene::hex_color;
use crate::sim::RainField;

/// Per-instance data: one drop position.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct RainInstance {
    position: [f32; 3],
    _pad: f32,
}

/// NOTE: Must match the WGSL struct layout exactly (32 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct RainUniform {
    color: [f32; 3],
    streak_length: f32,
    opacity: f32,
    _pad: [f32; 3],
}

/// Draws the rain field as instanced vertical streaks.
pub struct RainRenderer {
    pipeline: wgpu::RenderPipeline,
    instances: DynamicBuffer,
    instance_count: u32,
    uniform_bind_group: wgpu::BindGroup,
}

impl RainRenderer {
    /// Build the streak pipeline and allocate the instance buffer.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        options: &RainOptions,
    ) -> Self {
        let instances = DynamicBuffer::new(
            &context.device,
            "Rain Instance Buffer",
            options.count * size_of::<RainInstance>(),
            wgpu::BufferUsages::VERTEX,
        );

        let uniform = RainUniform {
            color: hex_color(options.color),
            streak_length: options.streak_length,
            opacity: 0.85,
            _pad: [0.0; 3],
        };
        let uniform_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Rain Uniform"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM,
            },
        );
        let uniform_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Rain Bind Group Layout"),
                entries: &[uniform_entry(0)],
            },
        );
        let uniform_bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Rain Bind Group"),
                    layout: &uniform_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });

        let shader = context.device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: Some("Rain Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/rain.wgsl").into(),
                ),
            },
        );

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Rain Pipeline Layout"),
                bind_group_layouts: &[camera_layout, &uniform_layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Rain Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: size_of::<RainInstance>()
                            as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
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
                depth_stencil: Some(depth_stencil_state(false)),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Self {
            pipeline,
            instances,
            instance_count: 0,
            uniform_bind_group,
        }
    }

    /// Stream the current drop positions to the GPU.
    pub fn update(&mut self, context: &RenderContext, rain: &RainField) {
        let data: Vec<RainInstance> = rain
            .drops()
            .iter()
            .map(|d| RainInstance {
                position: d.to_array(),
                _pad: 0.0,
            })
            .collect();
        let _ = self
            .instances
            .write(&context.device, &context.queue, &data);
        self.instance_count = data.len() as u32;
    }

    /// Record the streaks into an open render pass.
    pub fn draw<'pass>(
        &'pass self,
        pass: &mut wgpu::RenderPass<'pass>,
        camera: &'pass wgpu::BindGroup,
    ) {
        if self.instance_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera, &[]);
        pass.set_bind_group(1, &self.uniform_bind_group, &[]);
        pass.set_vertex_buffer(0, self.instances.buffer().slice(..));
        pass.draw(0..2, 0..self.instance_count);
    }
}
