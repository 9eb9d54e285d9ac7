//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, mouse
//! gesture, or programmatic call — is represented as a `PluviaCommand`.
//! Consumers construct commands and pass them to
//! [`DioramaEngine::execute`](super::DioramaEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered; the input
/// processor and the keybinding map both funnel into this one enum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PluviaCommand {
    /// Rotate the orbit camera by a cursor drag delta in pixels.
    RotateCamera {
        /// Drag delta in physical pixels.
        delta: Vec2,
    },
    /// Nudge the orbit by fixed 10-degree steps (keyboard).
    NudgeOrbit {
        /// Horizontal steps; positive orbits one step to the right.
        dx: i8,
        /// Vertical steps; positive raises toward the zenith.
        dy: i8,
    },
    /// Zoom by scroll steps; positive moves away from the target.
    Zoom {
        /// Signed scroll steps.
        steps: f32,
    },
    /// Return the camera to its home pose.
    ResetCamera,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Set the turntable speed (2.0 = one orbit per 30 s).
    SetAutoRotateSpeed {
        /// Speed in turntable units.
        speed: f32,
    },
    /// Toggle the dashed water-flow lines.
    ToggleWater,
    /// Toggle the rain field.
    ToggleRain,
    /// Toggle the helper grid.
    ToggleGrid,
    /// Save a PNG snapshot of the current frame.
    Snapshot,
}
