//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera, scene, key bindings) are
//! consolidated here. Options serialize to/from TOML so a partial file
//! overriding a single section works correctly.

mod camera;
mod keybindings;
mod scene;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeyBindingOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::VisiframeError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[camera]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Demo scene parameters.
    pub scene: SceneOptions,
    /// Window creation parameters.
    pub window: WindowOptions,
    /// Keyboard binding options.
    pub keybindings: KeyBindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VisiframeError::Io`] if the file cannot be read, or
    /// [`VisiframeError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, VisiframeError> {
        let content = std::fs::read_to_string(path).map_err(VisiframeError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VisiframeError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`VisiframeError::OptionsParse`] on serialization
    /// failure or [`VisiframeError::Io`] on write failure.
    pub fn save(&self, path: &Path) -> Result<(), VisiframeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VisiframeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VisiframeError::Io)?;
        }
        std::fs::write(path, content).map_err(VisiframeError::Io)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
fovy = 60.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.fovy, 60.0);
        // Everything else should be default
        assert_eq!(opts.camera.initial_azimuth, 30.0);
        assert_eq!(opts.scene.cone_resolution, 40);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::engine::CameraCommand;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyQ"),
            Some(CameraCommand::Recenter)
        );
        assert_eq!(
            opts.keybindings.lookup("BracketRight"),
            Some(CameraCommand::Roll { delta_deg: 5.0 })
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn window_section_overrides_title_and_size() {
        let toml_str = r#"
[window]
title = "my viewer"
size_fraction = 0.5
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.window.title, "my viewer");
        assert_eq!(opts.window.size_fraction, 0.5);

        let defaults = Options::default();
        assert_eq!(defaults.window.title, "visiframe");
        assert_eq!(defaults.window.size_fraction, 0.75);
    }

    #[test]
    fn background_is_dark_slate() {
        let opts = Options::default();
        assert_eq!(
            opts.scene.background,
            [7.0 / 255.0, 54.0 / 255.0, 66.0 / 255.0]
        );
    }

    #[test]
    fn demo_cone_matches_its_source_scene() {
        // Height 3, radius 1.5, 40 facets, bisque diffuse color.
        let opts = Options::default();
        assert_eq!(opts.scene.cone_height, 3.0);
        assert_eq!(opts.scene.cone_radius, 1.5);
        assert_eq!(opts.scene.cone_resolution, 40);
        assert_eq!(opts.scene.cone_color, [1.0, 0.894, 0.769]);
    }
}
