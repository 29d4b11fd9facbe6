//! Standalone visualization window backed by winit.
//!
//! ```no_run
//! # use visiframe::Viewer;
//! Viewer::builder()
//!     .with_title("visiframe")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::VisiframeError, options::Options, InputEvent, MouseButton,
    RenderEngine,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options.
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title, overriding the `[window]` options section.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the demo scene with an
/// interactive orbit camera and a camera-orientation status line.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Option<Options>,
    title: Option<String>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window
    /// is closed.
    ///
    /// # Errors
    ///
    /// Returns [`VisiframeError::Viewer`] if the event loop cannot be
    /// created or exits with an error.
    pub fn run(self) -> Result<(), VisiframeError> {
        let event_loop =
            EventLoop::new().map_err(|e| VisiframeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            options: self.options,
            title: self.title,
            frames: 0,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VisiframeError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Interval, in frames, between FPS debug log lines.
const FPS_LOG_INTERVAL: u32 = 300;

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<RenderEngine>,
    options: Option<Options>,
    title: Option<String>,
    frames: u32,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let options = self.options.take().unwrap_or_default();
        let title = self
            .title
            .take()
            .unwrap_or_else(|| options.window.title.clone());
        let fraction = options.window.size_fraction.clamp(0.1, 1.0);

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w =
                (f64::from(mon_size.width) / scale * fraction) as u32;
            let logical_h =
                (f64::from(mon_size.height) / scale * fraction) as u32;
            Window::default_attributes()
                .with_title(&title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let size = (inner.width.max(1), inner.height.max(1));

        let engine_result = pollster::block_on(RenderEngine::with_options(
            window.clone(),
            size,
            options,
        ));

        let mut engine = match engine_result {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        // Status line: the render engine notifies us after every
        // completed render pass; write the camera orientation into the
        // window title.
        let status_window = Arc::clone(&window);
        let base_title = title.clone();
        engine.on_render_end(move |readout| {
            status_window
                .set_title(&format!("{base_title} \u{2014} {readout}"));
        });

        window.set_title(&format!("{title} \u{2014} Ready"));
        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(
                        event_size.width.max(1),
                        event_size.height.max(1),
                    );
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let inner = self.window.as_ref().map(|w| w.inner_size());
                if let (Some(engine), Some(inner)) =
                    (&mut self.engine, inner)
                {
                    engine.resize(inner.width.max(1), inner.height.max(1));
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(engine) = &mut self.engine {
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            if let Some(w) = &self.window {
                                let inner = w.inner_size();
                                engine.resize(
                                    inner.width.max(1),
                                    inner.height.max(1),
                                );
                            }
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }

                    self.frames = self.frames.wrapping_add(1);
                    if self.frames % FPS_LOG_INTERVAL == 0 {
                        log::debug!("fps: {:.0}", engine.fps());
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                if let Some(engine) = &mut self.engine {
                    let _ = engine.handle_input(InputEvent::MouseButton {
                        button: MouseButton::from(button),
                        pressed,
                    });
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(engine) = &mut self.engine {
                    let _ = engine.handle_input(InputEvent::CursorMoved {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                if let Some(engine) = &mut self.engine {
                    let _ = engine.handle_input(InputEvent::Scroll {
                        delta: scroll_delta,
                    });
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                if let Some(engine) = &mut self.engine {
                    let _ = engine.handle_input(InputEvent::ModifiersChanged {
                        shift: modifiers.state().shift_key(),
                    });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                use winit::keyboard::PhysicalKey;
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                if let Some(engine) = &mut self.engine {
                    let _ = engine.handle_key(&key_str);
                }
            }

            _ => (),
        }
    }
}
