use glam::{Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::camera::orbit::{OrbitCamera, OrbitLimits};
use crate::gpu::context::RenderContext;
use crate::options::CameraOptions;

/// GPU-facing camera controller.
///
/// Owns the [`OrbitCamera`] state, the projection [`Camera`], and the
/// uniform buffer/bind group shared by every render pass. Input handlers
/// call the mutators; [`update_gpu`](Self::update_gpu) pushes the result to
/// the GPU once per frame.
pub struct CameraController {
    orbit: OrbitCamera,

    /// Projection camera derived from the orbit state.
    pub camera: Camera,
    /// CPU-side copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 0 in every shader).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for the camera uniform.
    pub bind_group: wgpu::BindGroup,

    rotate_speed: f32,
}

impl CameraController {
    /// Create the controller from the configured home pose.
    #[must_use]
    pub fn new(context: &RenderContext, opts: &CameraOptions) -> Self {
        let eye = Vec3::from_array(opts.eye);
        let target = Vec3::from_array(opts.target);
        let orbit = OrbitCamera::from_pose(
            eye,
            target,
            OrbitLimits {
                min_radius: opts.min_radius,
                max_radius: opts.max_radius,
            },
            opts.zoom_speed,
        );

        let camera = Camera {
            eye: orbit.eye(),
            target,
            up: Vec3::Y,
            aspect: context.config.width as f32 / context.config.height as f32,
            fovy: opts.fovy,
            znear: opts.znear,
            zfar: opts.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            orbit,
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            rotate_speed: opts.rotate_speed,
        }
    }

    /// Re-derive the projection camera from the orbit state.
    fn refresh(&mut self) {
        self.camera.eye = self.orbit.eye();
        self.camera.target = self.orbit.target();
    }

    /// Push the current camera state to the GPU uniform buffer.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.refresh();
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[
            self.uniform,
        ]));
    }

    /// Update the aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = width as f32 / height as f32;
    }

    /// Rotate from a pointer drag delta (pixels). Dragging right orbits the
    /// camera left around the target; dragging up tilts toward the top
    /// pole.
    pub fn rotate(&mut self, delta: Vec2) {
        self.orbit.rotate(
            -delta.x * self.rotate_speed,
            -delta.y * self.rotate_speed,
        );
        self.refresh();
    }

    /// Discrete arrow-key nudge (`dx = 1` right, `dy = 1` up).
    pub fn nudge(&mut self, dx: i8, dy: i8) {
        self.orbit.nudge(dx, dy);
        self.refresh();
    }

    /// Zoom by discrete steps (positive = away from the target).
    pub fn zoom(&mut self, steps: f32) {
        self.orbit.zoom(steps);
        self.refresh();
    }

    /// Restore the home pose.
    pub fn reset(&mut self) {
        self.orbit.reset();
        self.refresh();
    }

    /// Toggle turntable auto-rotation, returning the new state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.orbit.toggle_auto_rotate()
    }

    /// Set the signed auto-rotate speed.
    pub fn set_auto_rotate_speed(&mut self, speed: f32) {
        self.orbit.set_auto_rotate_speed(speed);
    }

    /// Read-only orbit state.
    #[must_use]
    pub fn orbit(&self) -> &OrbitCamera {
        &self.orbit
    }

    /// Mutable orbit state (the frame scheduler drives auto-rotation
    /// through this).
    pub fn orbit_mut(&mut self) -> &mut OrbitCamera {
        &mut self.orbit
    }
}
