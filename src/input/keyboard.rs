use serde::{Deserialize, Serialize};

use crate::engine::PluviaCommand;

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset_camera = "Home"
/// toggle_rain = "KeyE"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Nudge the orbit one step to the left.
    OrbitLeft,
    /// Nudge the orbit one step to the right.
    OrbitRight,
    /// Nudge the orbit one step toward the zenith.
    OrbitUp,
    /// Nudge the orbit one step toward the horizon.
    OrbitDown,
    /// Return the camera to its home pose.
    ResetCamera,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Toggle the dashed water-flow lines.
    ToggleWater,
    /// Toggle the rain field.
    ToggleRain,
    /// Toggle the helper grid.
    ToggleGrid,
    /// Save a PNG snapshot of the current frame.
    Snapshot,
}

impl KeyAction {
    /// The command this action issues when its key is pressed.
    #[must_use]
    pub fn to_command(self) -> PluviaCommand {
        match self {
            Self::OrbitLeft => PluviaCommand::NudgeOrbit { dx: -1, dy: 0 },
            Self::OrbitRight => PluviaCommand::NudgeOrbit { dx: 1, dy: 0 },
            Self::OrbitUp => PluviaCommand::NudgeOrbit { dx: 0, dy: 1 },
            Self::OrbitDown => PluviaCommand::NudgeOrbit { dx: 0, dy: -1 },
            Self::ResetCamera => PluviaCommand::ResetCamera,
            Self::ToggleAutoRotate => PluviaCommand::ToggleAutoRotate,
            Self::ToggleWater => PluviaCommand::ToggleWater,
            Self::ToggleRain => PluviaCommand::ToggleRain,
            Self::ToggleGrid => PluviaCommand::ToggleGrid,
            Self::Snapshot => PluviaCommand::Snapshot,
        }
    }
}
