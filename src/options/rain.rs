use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Rain-field parameters.
pub struct RainOptions {
    /// Number of simultaneous drops.
    pub count: usize,
    /// Fall speed in meters per second.
    pub fall_speed: f32,
    /// Rendered streak length in meters.
    pub streak_length: f32,
    /// Drop color as `0xRRGGBB`.
    pub color: u32,
}

impl Default for RainOptions {
    fn default() -> Self {
        Self {
            count: 600,
            fall_speed: 6.0,
            streak_length: 0.18,
            color: 0x6fb7ff,
        }
    }
}
