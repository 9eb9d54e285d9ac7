use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Render-layer toggles and background color.
pub struct DisplayOptions {
    /// Draw the dashed water-flow lines.
    pub show_water: bool,
    /// Draw falling rain above the canopy.
    pub show_rain: bool,
    /// Draw the helper grid at grade level.
    pub show_grid: bool,
    /// Clear color as `0xRRGGBB`.
    pub background: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_water: true,
            show_rain: true,
            show_grid: true,
            background: 0x0f1115,
        }
    }
}
