// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison: graphics math frequently compares against 0.0, 1.0, etc.
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

//! Lightweight scaffold for 3D visualization desktop applications.
//!
//! Visiframe wires a [`winit`] window and event loop to a [`wgpu`]
//! render pipeline: a demo cone mesh, an orbit camera driven by mouse
//! interaction, and a status line that reports the camera's azimuth,
//! elevation, roll, and distance after every completed render pass.
//!
//! # Key entry points
//!
//! - [`Viewer`] - standalone window with builder-style construction
//! - [`engine::RenderEngine`] - the rendering engine behind the window
//! - [`camera::CameraReadout`] - the camera-angle status computation
//! - [`options::Options`] - runtime configuration (camera, scene,
//!   key bindings)
//!
//! # Architecture
//!
//! The binary parses a small set of informational flags
//! (`--help`, `--usage`, `--version`) and otherwise launches the
//! [`Viewer`], which owns the event loop. Window events are translated
//! into platform-agnostic [`input::InputEvent`] values, processed into
//! camera commands, and applied to the orbit
//! [`camera::controller::CameraController`]. After each render pass the
//! engine
//! notifies its render-end observers with a fresh
//! [`camera::CameraReadout`] snapshot, which the viewer formats into
//! the window's status line.

pub mod camera;
pub mod cli;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
pub mod viewer;

pub use camera::readout::CameraReadout;
pub use engine::{CameraCommand, RenderEngine};
pub use error::VisiframeError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
pub use viewer::Viewer;
