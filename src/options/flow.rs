use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Dashed water-flow line parameters.
pub struct FlowOptions {
    /// Dash length along the line, meters.
    pub dash_size: f32,
    /// Gap length between dashes, meters.
    pub gap_size: f32,
    /// Dash scroll speed, meters of arc length per second.
    pub dash_rate: f32,
    /// Line color as `0xRRGGBB`.
    pub color: u32,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            dash_size: 0.35,
            gap_size: 0.18,
            dash_rate: 1.2,
            color: 0x4fc3f7,
        }
    }
}
