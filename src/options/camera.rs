//! Camera option section.

use serde::{Deserialize, Serialize};

/// Camera projection and control parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Startup azimuth angle in degrees.
    pub initial_azimuth: f32,
    /// Startup elevation angle in degrees.
    pub initial_elevation: f32,
    /// Startup camera-to-focal-point distance. Overridden when the
    /// engine fits the camera to the scene bounds.
    pub initial_distance: f32,
    /// Orbit sensitivity in degrees per pixel of drag.
    pub rotate_speed: f32,
    /// Pan sensitivity as a fraction of the dolly distance per pixel.
    pub pan_speed: f32,
    /// Zoom sensitivity per scroll step.
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 200.0,
            initial_azimuth: 30.0,
            initial_elevation: 30.0,
            initial_distance: 10.0,
            rotate_speed: 0.3,
            pan_speed: 0.002,
            zoom_speed: 0.1,
        }
    }
}
