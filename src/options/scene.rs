//! Demo scene option section.

use serde::{Deserialize, Serialize};

/// Demo scene parameters: background color and cone geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Background clear color, linear RGB in `[0, 1]`.
    pub background: [f32; 3],
    /// Number of facets around the cone base circle.
    pub cone_resolution: u32,
    /// Cone base radius.
    pub cone_radius: f32,
    /// Cone height along its axis.
    pub cone_height: f32,
    /// Cone surface color, linear RGB in `[0, 1]`.
    pub cone_color: [f32; 3],
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            // Dark slate gray background
            background: [7.0 / 255.0, 54.0 / 255.0, 66.0 / 255.0],
            cone_resolution: 40,
            cone_radius: 1.5,
            cone_height: 3.0,
            // Bisque (255, 228, 196)
            cone_color: [1.0, 0.894, 0.769],
        }
    }
}
