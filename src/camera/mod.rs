//! Camera system for 3D scene viewing.
//!
//! Provides an orbital camera with rotation, panning, zoom, roll, and
//! the status-line orientation readout.

/// Orbital camera controller managing rotation, pan, zoom, and GPU
/// resources.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Camera orientation readout for the status line.
pub mod readout;

pub use readout::CameraReadout;
