//! Keyboard binding option section.
//!
//! Key strings use the `winit::keyboard::KeyCode` debug format:
//! `"KeyQ"`, `"BracketLeft"`, `"Escape"`, etc. Only discrete commands
//! make sense as key bindings; drag-parameterized commands come from
//! the mouse gesture interpreter.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::CameraCommand;

/// Serializable tag for the subset of [`CameraCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Restore the home camera pose.
    RecenterCamera,
    /// Roll the camera counterclockwise by a fixed step.
    RollLeft,
    /// Roll the camera clockwise by a fixed step.
    RollRight,
}

/// Roll step applied by the `RollLeft`/`RollRight` bindings, degrees.
const ROLL_STEP_DEG: f32 = 5.0;

impl KeyCommandTag {
    /// Convert to the corresponding [`CameraCommand`].
    fn to_command(self) -> CameraCommand {
        match self {
            Self::RecenterCamera => CameraCommand::Recenter,
            Self::RollLeft => CameraCommand::Roll {
                delta_deg: -ROLL_STEP_DEG,
            },
            Self::RollRight => CameraCommand::Roll {
                delta_deg: ROLL_STEP_DEG,
            },
        }
    }
}

/// Maps physical key strings to camera commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindingOptions {
    /// Forward map: key string to command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

impl Default for KeyBindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyQ".into(), KeyCommandTag::RecenterCamera),
            ("BracketLeft".into(), KeyCommandTag::RollLeft),
            ("BracketRight".into(), KeyCommandTag::RollRight),
        ]);
        Self { bindings }
    }
}

impl KeyBindingOptions {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CameraCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }
}
