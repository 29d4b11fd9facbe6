//! The rendering engine behind the viewer window.
//!
//! `RenderEngine` owns the GPU context, the orbit camera, the demo
//! cone mesh, and the depth buffer. It consumes platform-agnostic
//! [`InputEvent`]s, executes [`CameraCommand`]s against the camera
//! controller, and notifies registered render-end observers with a
//! fresh [`CameraReadout`] after every completed render pass.

use glam::Vec2;

use crate::camera::controller::CameraController;
use crate::camera::readout::CameraReadout;
use crate::error::VisiframeError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DepthTexture;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::renderer::mesh::MeshRenderer;
use crate::scene::mesh::cone_mesh;
use crate::util::frame_timing::FrameTiming;

/// A discrete camera operation produced by input processing or a key
/// binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Orbit from a mouse drag delta in physical pixels.
    Rotate {
        /// Drag delta in physical pixels.
        delta: Vec2,
    },
    /// Pan the focal point from a mouse drag delta.
    Pan {
        /// Drag delta in physical pixels.
        delta: Vec2,
    },
    /// Dolly toward or away from the focal point.
    Zoom {
        /// Scroll amount (positive = zoom in).
        delta: f32,
    },
    /// Roll the camera about its viewing axis.
    Roll {
        /// Roll step in degrees.
        delta_deg: f32,
    },
    /// Restore the home camera pose.
    Recenter,
}

/// Observer invoked after each completed render pass with the current
/// camera readout.
pub type RenderEndHandler = Box<dyn FnMut(&CameraReadout)>;

/// The core rendering engine: GPU context, camera, scene, and the
/// render-end notification list.
pub struct RenderEngine {
    /// GPU device/queue/surface context.
    pub context: RenderContext,
    /// Orbit camera controller and its GPU uniform.
    pub camera_controller: CameraController,
    /// Smoothed frame timing.
    pub frame_timing: FrameTiming,
    cone: MeshRenderer,
    depth: DepthTexture,
    input: InputProcessor,
    options: Options,
    render_end_handlers: Vec<RenderEndHandler>,
}

impl RenderEngine {
    /// Create an engine with default options.
    ///
    /// # Errors
    ///
    /// Returns [`VisiframeError::Gpu`] if GPU context initialization
    /// fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, VisiframeError> {
        Self::with_options(window, size, Options::default()).await
    }

    /// Create an engine with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`VisiframeError::Gpu`] if GPU context initialization
    /// fails.
    pub async fn with_options(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, VisiframeError> {
        let context = RenderContext::new(window, size).await?;

        let mut camera_controller =
            CameraController::new(&context, &options.camera);

        let mesh = cone_mesh(
            options.scene.cone_resolution,
            options.scene.cone_radius,
            options.scene.cone_height,
            options.scene.cone_color,
        );
        log::debug!(
            "cone mesh: {} vertices, bounding radius {:.2}",
            mesh.vertices.len(),
            mesh.bounding_radius
        );
        camera_controller.fit_to_radius(mesh.bounding_radius);

        let cone = MeshRenderer::new(
            &context,
            "Cone Mesh",
            &mesh,
            &camera_controller.layout,
        );

        let depth =
            DepthTexture::new(&context.device, size.0, size.1);

        Ok(Self {
            context,
            camera_controller,
            frame_timing: FrameTiming::new(),
            cone,
            depth,
            input: InputProcessor::new(),
            options,
            render_end_handlers: Vec::new(),
        })
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Register an observer to be invoked after every completed render
    /// pass with the current [`CameraReadout`]. Observers run on the
    /// calling (event-loop) thread in registration order.
    pub fn on_render_end(
        &mut self,
        handler: impl FnMut(&CameraReadout) + 'static,
    ) {
        self.render_end_handlers.push(Box::new(handler));
    }

    /// Reconfigure the surface, depth buffer, and camera aspect for a
    /// new window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.camera_controller.resize(width, height);
        self.depth = DepthTexture::new(&self.context.device, width, height);
    }

    /// Feed a raw input event through the processor and execute any
    /// resulting command. Returns `true` if the scene changed and a
    /// redraw is warranted.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match self.input.handle_event(event) {
            Some(cmd) => {
                self.execute(cmd);
                true
            }
            None => false,
        }
    }

    /// Look up a pressed key (by its `KeyCode` debug string) in the
    /// key bindings and execute the bound command, if any. Returns
    /// `true` if a command ran.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match self.options.keybindings.lookup(key) {
            Some(cmd) => {
                self.execute(cmd);
                true
            }
            None => false,
        }
    }

    /// Apply a camera command to the controller.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Rotate { delta } => {
                self.camera_controller.rotate(delta);
            }
            CameraCommand::Pan { delta } => {
                self.camera_controller.pan(delta);
            }
            CameraCommand::Zoom { delta } => {
                self.camera_controller.zoom(delta);
            }
            CameraCommand::Roll { delta_deg } => {
                self.camera_controller.roll(delta_deg);
            }
            CameraCommand::Recenter => {
                self.camera_controller.recenter();
            }
        }
    }

    /// Snapshot the current camera orientation for the status line.
    #[must_use]
    pub fn camera_readout(&self) -> CameraReadout {
        self.camera_controller.readout()
    }

    /// Current smoothed FPS.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Render one frame and present it, then fire the render-end
    /// observers with the current camera readout.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot
    /// be acquired; the caller decides whether to reconfigure.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.camera_controller.update_gpu(&self.context.queue);

        let [r, g, b] = self.options.scene.background;
        let mut encoder = self.context.create_encoder();
        {
            let mut render_pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: f64::from(r),
                                    g: f64::from(g),
                                    b: f64::from(b),
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            render_pass.set_bind_group(
                0,
                &self.camera_controller.bind_group,
                &[],
            );
            self.cone.draw(&mut render_pass);
        }
        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();

        let readout = self.camera_controller.readout();
        for handler in &mut self.render_end_handlers {
            handler(&readout);
        }

        Ok(())
    }
}
