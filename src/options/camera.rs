use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and orbit-control parameters.
pub struct CameraOptions {
    /// Home eye position.
    pub eye: [f32; 3],
    /// Home look-at target.
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Drag-to-rotate sensitivity, radians per pixel.
    pub rotate_speed: f32,
    /// Zoom sensitivity per scroll step.
    pub zoom_speed: f32,
    /// Closest allowed orbit radius.
    pub min_radius: f32,
    /// Farthest allowed orbit radius.
    pub max_radius: f32,
    /// Start with turntable auto-rotation on.
    pub auto_rotate: bool,
    /// Auto-rotation speed in turntable units (2.0 = one orbit per 30 s).
    pub auto_rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            eye: [14.0, 10.0, 14.0],
            target: [0.0, 2.2, 0.0],
            fovy: 55.0,
            znear: 0.1,
            zfar: 220.0,
            rotate_speed: 0.005,
            zoom_speed: 0.15,
            min_radius: 4.0,
            max_radius: 60.0,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
        }
    }
}
