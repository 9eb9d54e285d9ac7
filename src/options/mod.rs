//! Centralized configuration with TOML support.
//!
//! All tweakable settings (camera pose and speeds, display toggles, rain
//! and flow-line parameters, calculator defaults, keybindings) live here.
//! Options serialize to/from TOML so a partial file overriding one section
//! still fills everything else with defaults.

mod calculator;
mod camera;
mod display;
mod flow;
mod keybindings;
mod rain;

use std::path::Path;

pub use calculator::CalculatorOptions;
pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use flow::FlowOptions;
pub use keybindings::KeybindingOptions;
pub use rain::RainOptions;
use serde::{Deserialize, Serialize};

use crate::error::PluviaError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Render-layer toggles and background.
    pub display: DisplayOptions,
    /// Camera projection and orbit controls.
    pub camera: CameraOptions,
    /// Rain-field parameters.
    pub rain: RainOptions,
    /// Dashed flow-line parameters.
    pub flow: FlowOptions,
    /// Water-balance calculator defaults.
    pub calculator: CalculatorOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PluviaError> {
        let content = std::fs::read_to_string(path).map_err(PluviaError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| PluviaError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PluviaError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PluviaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PluviaError::Io)?;
        }
        std::fs::write(path, content).map_err(PluviaError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
fovy = 40.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.fovy, 40.0);
        // Everything else should be default
        assert_eq!(opts.camera.eye, [14.0, 10.0, 14.0]);
        assert_eq!(opts.rain.count, 600);
        assert!(opts.display.show_water);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Home"),
            Some(KeyAction::ResetCamera)
        );
        assert_eq!(opts.keybindings.lookup("KeyR"), Some(KeyAction::ToggleAutoRotate));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }
}
