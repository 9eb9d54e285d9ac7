//! Camera state and GPU plumbing.
//!
//! [`OrbitCamera`] holds the pure spherical orbit state;
//! [`CameraController`] wraps it with the projection camera and the
//! uniform buffer every render pass binds at group 0.

mod controller;
mod core;
/// Pure orbit math (no GPU types).
pub mod orbit;

pub use controller::CameraController;
pub use core::{Camera, CameraUniform};
pub use orbit::{OrbitCamera, OrbitLimits, OrbitPose, NUDGE_STEP};
