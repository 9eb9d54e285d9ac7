//! The diorama engine: owns the GPU context, the scene, the simulation,
//! and every render pass, and executes [`PluviaCommand`]s issued by input
//! handling or embedding code.

pub mod command;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub use command::PluviaCommand;
use log::{info, warn};

use crate::calc::{self, WaterBalanceReport};
use crate::camera::CameraController;
use crate::error::PluviaError;
use crate::gpu::{
    create_depth_texture, RenderContext, RenderTarget,
};
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::renderer::{
    snapshot, FlowRenderer, Lighting, MeshRenderer, RainRenderer,
};
use crate::scene::{hex_color, Diorama, MeshBuffer};
use crate::sim::FrameScheduler;

/// Owns everything needed to simulate and draw the installation.
pub struct DioramaEngine {
    context: RenderContext,
    camera: CameraController,
    lighting: Lighting,
    scheduler: FrameScheduler,
    diorama: Diorama,
    mesh_renderer: MeshRenderer,
    flow_renderer: FlowRenderer,
    rain_renderer: RainRenderer,
    depth_view: wgpu::TextureView,
    clear_color: wgpu::Color,
    input: InputProcessor,
    options: Options,
}

impl DioramaEngine {
    /// Create the engine for a window surface.
    ///
    /// # Errors
    ///
    /// Returns [`PluviaError::Gpu`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        initial_size: (u32, u32),
        options: Options,
    ) -> Result<Self, PluviaError> {
        let context = RenderContext::new(window, initial_size).await?;
        Ok(Self::from_context(context, options))
    }

    /// Create the engine over an existing render context (texture-only
    /// contexts work too).
    #[must_use]
    pub fn from_context(context: RenderContext, options: Options) -> Self {
        let diorama = Diorama::build();

        let mut scene_mesh = MeshBuffer::new();
        scene_mesh.extend(&diorama.ground);
        scene_mesh.extend(&diorama.structure);
        scene_mesh.extend(&diorama.wash);

        let mut camera = CameraController::new(&context, &options.camera);
        camera
            .orbit_mut()
            .set_auto_rotate(options.camera.auto_rotate);
        camera
            .orbit_mut()
            .set_auto_rotate_speed(options.camera.auto_rotate_speed);

        let lighting = Lighting::new(&context);
        let mesh_renderer = MeshRenderer::new(
            &context,
            &camera.layout,
            &lighting.layout,
            &scene_mesh,
        );
        let flow_renderer = FlowRenderer::new(
            &context,
            &camera.layout,
            &options.flow,
            &diorama.flow_lines,
            &diorama.grid,
        );
        let rain_renderer =
            RainRenderer::new(&context, &camera.layout, &options.rain);

        let depth_view = create_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        let [r, g, b] = hex_color(options.display.background);
        let clear_color = wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: 1.0,
        };

        let mut scheduler =
            FrameScheduler::new(&options.rain, &options.flow);
        scheduler.start();

        info!(
            "engine up: {} parts, {} flow lines, {} rain drops",
            diorama.parts.len(),
            diorama.flow_lines.len(),
            options.rain.count,
        );

        let input =
            InputProcessor::with_keybindings(options.keybindings.clone());

        Self {
            context,
            camera,
            lighting,
            scheduler,
            diorama,
            mesh_renderer,
            flow_renderer,
            rain_renderer,
            depth_view,
            clear_color,
            input,
            options,
        }
    }

    /// Feed a raw input event through the processor and execute whatever
    /// command it produces.
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            self.execute(command);
        }
    }

    /// Execute the command bound to a key string (`"KeyR"`, `"Home"`, ...),
    /// if any.
    pub fn handle_key_press(&mut self, key: &str) {
        if let Some(command) = self.input.handle_key_press(key) {
            self.execute(command);
        }
    }

    /// Handle a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.camera.resize(width, height);
        self.depth_view =
            create_depth_texture(&self.context.device, width, height);
    }

    /// Advance the simulation by `dt` seconds and stream GPU state.
    pub fn update(&mut self, dt: f32) {
        self.scheduler.tick(dt, self.camera.orbit_mut());
        if self.options.display.show_water {
            self.flow_renderer.set_dash_offset(
                &self.context.queue,
                self.scheduler.dash_offset(),
            );
        }
        if self.options.display.show_rain {
            self.rain_renderer
                .update(&self.context, self.scheduler.rain());
        }
        self.camera.update_gpu(&self.context.queue);
    }

    /// Draw one frame to the surface.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] when the swapchain needs
    /// reconfiguration (the viewer handles `Lost`/`Outdated` by resizing).
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        self.record_passes(&mut encoder, &view);
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }

    fn record_passes(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    ) {
        let mut pass =
            encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Diorama Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.depth_view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

        self.mesh_renderer.draw(
            &mut pass,
            &self.camera.bind_group,
            &self.lighting.bind_group,
        );
        self.flow_renderer.draw(
            &mut pass,
            &self.camera.bind_group,
            self.options.display.show_water,
            self.options.display.show_grid,
        );
        if self.options.display.show_rain {
            self.rain_renderer.draw(&mut pass, &self.camera.bind_group);
        }
    }

    /// Execute one command.
    pub fn execute(&mut self, command: PluviaCommand) {
        match command {
            PluviaCommand::RotateCamera { delta } => {
                self.camera.rotate(delta);
            }
            PluviaCommand::NudgeOrbit { dx, dy } => {
                self.camera.nudge(dx, dy);
            }
            PluviaCommand::Zoom { steps } => self.camera.zoom(steps),
            PluviaCommand::ResetCamera => self.camera.reset(),
            PluviaCommand::ToggleAutoRotate => {
                let on = self.camera.toggle_auto_rotate();
                info!("auto-rotate {}", if on { "on" } else { "off" });
            }
            PluviaCommand::SetAutoRotateSpeed { speed } => {
                self.camera.set_auto_rotate_speed(speed);
            }
            PluviaCommand::ToggleWater => {
                self.options.display.show_water =
                    !self.options.display.show_water;
            }
            PluviaCommand::ToggleRain => {
                self.options.display.show_rain =
                    !self.options.display.show_rain;
            }
            PluviaCommand::ToggleGrid => {
                self.options.display.show_grid =
                    !self.options.display.show_grid;
            }
            PluviaCommand::Snapshot => {
                let path = snapshot_path();
                match self.snapshot(&path) {
                    Ok(()) => info!("snapshot saved to {}", path.display()),
                    Err(e) => warn!("snapshot failed: {e}"),
                }
            }
        }
    }

    /// Render the current frame off-screen and save it as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`PluviaError::Snapshot`] if readback or encoding fails.
    pub fn snapshot(&self, path: &Path) -> Result<(), PluviaError> {
        let (width, height) =
            (self.context.config.width, self.context.config.height);
        let target = RenderTarget::new(
            &self.context.device,
            width,
            height,
            self.context.format(),
        );

        let mut encoder = self.context.create_encoder();
        self.record_passes(&mut encoder, &target.view);
        self.context.submit(encoder);

        let image =
            snapshot::read_target(&self.context, &target.texture, width, height)?;
        snapshot::save_png(&image, path)
    }

    /// Evaluate the water balance for the configured calculator inputs.
    #[must_use]
    pub fn water_balance(&self) -> WaterBalanceReport {
        calc::evaluate(&self.options.calculator.to_input())
    }

    /// The camera controller.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// The frame scheduler (start/stop the animation through this).
    pub fn scheduler_mut(&mut self) -> &mut FrameScheduler {
        &mut self.scheduler
    }

    /// Current options (display toggles reflect executed commands).
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Scene metadata for inspection.
    #[must_use]
    pub fn diorama(&self) -> &Diorama {
        &self.diorama
    }
}

/// Timestamped snapshot filename in the working directory.
fn snapshot_path() -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    PathBuf::from(format!("diorama-{stamp}.png"))
}
