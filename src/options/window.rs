//! Window option section.

use serde::{Deserialize, Serialize};

/// Window creation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowOptions {
    /// Base window title. The viewer appends the camera status line.
    pub title: String,
    /// Initial window size as a fraction of the monitor's logical
    /// size, in `(0, 1]`.
    pub size_fraction: f64,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "visiframe".to_owned(),
            size_fraction: 0.75,
        }
    }
}
