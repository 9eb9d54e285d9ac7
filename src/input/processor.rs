//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns the transient input state (cursor position,
//! drag tracking) and the key-binding map. It is the only thing between
//! raw window events and the engine's
//! [`execute`](crate::engine::DioramaEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use crate::engine::PluviaCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`PluviaCommand`]s.
pub struct InputProcessor {
    cursor: Option<Vec2>,
    mouse_pressed: bool,
    keybindings: KeybindingOptions,
}

impl InputProcessor {
    /// A processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_keybindings(KeybindingOptions::default())
    }

    /// A processor with the given key bindings.
    #[must_use]
    pub fn with_keybindings(keybindings: KeybindingOptions) -> Self {
        Self {
            cursor: None,
            mouse_pressed: false,
            keybindings,
        }
    }

    /// Whether the primary mouse button is held.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Look up a key press and return the bound command, if any.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<PluviaCommand> {
        self.keybindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<PluviaCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = pressed;
                }
                None
            }
            InputEvent::Scroll { delta } => {
                Some(PluviaCommand::Zoom { steps: delta })
            }
        }
    }

    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<PluviaCommand> {
        let position = Vec2::new(x, y);
        let delta = self.cursor.map(|last| position - last);
        self.cursor = Some(position);

        if self.mouse_pressed {
            if let Some(delta) = delta {
                if delta.length_squared() > 0.0 {
                    return Some(PluviaCommand::RotateCamera { delta });
                }
            }
        }
        None
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
    fn drag_produces_rotate_commands() {
        let mut input = InputProcessor::new();
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 })
            .is_none());
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let cmd = input
            .handle_event(InputEvent::CursorMoved { x: 14.0, y: 7.0 })
            .unwrap();
        assert_eq!(
            cmd,
            PluviaCommand::RotateCamera {
                delta: Vec2::new(4.0, -3.0)
            }
        );
    }

    #[test]
    fn movement_without_press_is_ignored() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 })
            .is_none());
    }

    #[test]
    fn scroll_maps_to_zoom() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 2.0 }),
            Some(PluviaCommand::Zoom { steps: 2.0 })
        );
    }

    #[test]
    fn bound_keys_resolve_to_commands() {
        let input = InputProcessor::new();
        assert_eq!(
            input.handle_key_press("Home"),
            Some(PluviaCommand::ResetCamera)
        );
        assert_eq!(
            input.handle_key_press("ArrowLeft"),
            Some(PluviaCommand::NudgeOrbit { dx: -1, dy: 0 })
        );
        assert!(input.handle_key_press("F12").is_none());
    }
}
