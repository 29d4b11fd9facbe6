//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient input state (cursor
//! tracking, drag detection, modifier keys). It is the only thing that
//! sits between raw window events and the engine's
//! [`execute`](crate::engine::RenderEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::engine::CameraCommand;

/// Converts raw window events into [`CameraCommand`]s.
pub struct InputProcessor {
    /// Last observed cursor position in physical pixels.
    mouse_pos: (f32, f32),
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
}

impl InputProcessor {
    /// Create a new processor with no buttons held.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mouse_pos: (0.0, 0.0),
            mouse_pressed: false,
            shift_pressed: false,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.mouse_pos
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = pressed;
                }
                None
            }
            InputEvent::Scroll { delta } => {
                Some(CameraCommand::Zoom { delta })
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
        }
    }

    /// Cursor moved: compute the drag delta, possibly produce a camera
    /// command.
    fn handle_cursor_moved(
        &mut self,
        x: f32,
        y: f32,
    ) -> Option<CameraCommand> {
        let delta =
            Vec2::new(x - self.mouse_pos.0, y - self.mouse_pos.1);
        self.mouse_pos = (x, y);

        if !self.mouse_pressed {
            return None;
        }
        if self.shift_pressed {
            return Some(CameraCommand::Pan { delta });
        }
        Some(CameraCommand::Rotate { delta })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_motion_without_press_is_ignored() {
        let mut input = InputProcessor::new();
        let cmd = input
            .handle_event(InputEvent::CursorMoved { x: 50.0, y: 20.0 });
        assert_eq!(cmd, None);
    }

    #[test]
    fn drag_rotates_the_camera() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let cmd = input
            .handle_event(InputEvent::CursorMoved { x: 15.0, y: 8.0 });
        assert_eq!(
            cmd,
            Some(CameraCommand::Rotate {
                delta: Vec2::new(5.0, -2.0)
            })
        );
    }

    #[test]
    fn shift_drag_pans_instead() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let _ =
            input.handle_event(InputEvent::ModifiersChanged { shift: true });
        let cmd = input
            .handle_event(InputEvent::CursorMoved { x: 3.0, y: 4.0 });
        assert_eq!(
            cmd,
            Some(CameraCommand::Pan {
                delta: Vec2::new(3.0, 4.0)
            })
        );
    }

    #[test]
    fn release_ends_the_drag() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        let cmd = input
            .handle_event(InputEvent::CursorMoved { x: 1.0, y: 1.0 });
        assert_eq!(cmd, None);
    }

    #[test]
    fn scroll_always_zooms() {
        let mut input = InputProcessor::new();
        let cmd = input.handle_event(InputEvent::Scroll { delta: 1.5 });
        assert_eq!(cmd, Some(CameraCommand::Zoom { delta: 1.5 }));
    }

    #[test]
    fn non_primary_buttons_do_not_start_a_drag() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        let cmd = input
            .handle_event(InputEvent::CursorMoved { x: 9.0, y: 9.0 });
        assert_eq!(cmd, None);
    }
}
