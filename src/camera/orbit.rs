//! Orbit camera state: a spherical coordinate around a fixed look-at
//! target.
//!
//! Azimuth is the horizontal angle around the target, polar the angle from
//! the top pole. Polar is kept strictly inside `(0, PI)` so the look
//! direction can never flip through a pole mid-drag, and radius is clamped
//! to configured bounds. All mutators re-clamp; clamping an already-clamped
//! value is a no-op.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Margin keeping the polar angle away from the gimbal singularities at 0
/// and PI.
pub const POLAR_MARGIN: f32 = 1e-3;

/// Auto-rotate rate: radians per second per unit of speed. Speed 2.0 is one
/// full orbit every 30 seconds (OrbitControls convention).
pub const AUTO_ROTATE_RATE: f32 = TAU / 60.0;

/// Orbit step used by the discrete nudge keys: 10 degrees.
pub const NUDGE_STEP: f32 = 10.0 * PI / 180.0;

/// Spherical pose snapshot, used for the home (reset) configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPose {
    /// Horizontal orbit angle in radians.
    pub azimuth: f32,
    /// Angle from the top pole in radians.
    pub polar: f32,
    /// Distance from the target.
    pub radius: f32,
    /// Look-at target in world space.
    pub target: Vec3,
}

/// Radius bounds for the orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Closest allowed distance to the target.
    pub min_radius: f32,
    /// Farthest allowed distance from the target.
    pub max_radius: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_radius: 4.0,
            max_radius: 60.0,
        }
    }
}

/// Orbit camera state with clamped mutators.
///
/// Created once at startup from the configured eye/target pair and mutated
/// by input events and (when auto-rotate is on) by the frame scheduler.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    azimuth: f32,
    polar: f32,
    radius: f32,
    target: Vec3,
    home: OrbitPose,
    limits: OrbitLimits,
    zoom_speed: f32,
    auto_rotate: bool,
    auto_rotate_speed: f32,
}

impl OrbitCamera {
    /// Derive the orbit state from a world-space eye position and target.
    ///
    /// The derived pose becomes the home configuration for [`reset`].
    ///
    /// [`reset`]: Self::reset
    #[must_use]
    pub fn from_pose(
        eye: Vec3,
        target: Vec3,
        limits: OrbitLimits,
        zoom_speed: f32,
    ) -> Self {
        let offset = eye - target;
        let radius = offset.length().clamp(limits.min_radius, limits.max_radius);
        // atan2(x, z) / acos(y / r): the same spherical convention as the
        // eye() reconstruction below.
        let azimuth = offset.x.atan2(offset.z);
        let polar = (offset.y / offset.length())
            .clamp(-1.0, 1.0)
            .acos()
            .clamp(POLAR_MARGIN, PI - POLAR_MARGIN);

        let home = OrbitPose {
            azimuth,
            polar,
            radius,
            target,
        };
        Self {
            azimuth,
            polar,
            radius,
            target,
            home,
            limits,
            zoom_speed,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
        }
    }

    /// Add deltas to azimuth and polar. Polar is re-clamped to
    /// `[POLAR_MARGIN, PI - POLAR_MARGIN]`; out-of-range deltas are simply
    /// clamped away, never an error.
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth += d_azimuth;
        self.polar =
            (self.polar + d_polar).clamp(POLAR_MARGIN, PI - POLAR_MARGIN);
    }

    /// Discrete arrow-key nudge in 10-degree steps. `dx = 1` orbits one
    /// step to the right, `dy = 1` one step up toward the zenith (polar
    /// decreases).
    pub fn nudge(&mut self, dx: i8, dy: i8) {
        self.rotate(
            -f32::from(dx) * NUDGE_STEP,
            -f32::from(dy) * NUDGE_STEP,
        );
    }

    /// Zoom by discrete steps: `radius *= 1 + zoom_speed * steps`,
    /// re-clamped to the configured bounds. Positive steps move away from
    /// the target.
    pub fn zoom(&mut self, steps: f32) {
        let factor = 1.0 + self.zoom_speed * steps;
        self.radius = (self.radius * factor)
            .clamp(self.limits.min_radius, self.limits.max_radius);
    }

    /// Restore azimuth, polar, radius, and target to the home
    /// configuration. Auto-rotate state is untouched.
    pub fn reset(&mut self) {
        self.azimuth = self.home.azimuth;
        self.polar = self.home.polar;
        self.radius = self.home.radius;
        self.target = self.home.target;
    }

    /// Enable or disable turntable auto-rotation.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    /// Toggle auto-rotation, returning the new state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }

    /// Set the signed auto-rotate speed (OrbitControls units; 2.0 is one
    /// orbit per 30 s).
    pub fn set_auto_rotate_speed(&mut self, speed: f32) {
        self.auto_rotate_speed = speed;
    }

    /// Advance the turntable by `dt` seconds. No-op unless auto-rotate is
    /// enabled.
    pub fn advance(&mut self, dt: f32) {
        if self.auto_rotate {
            self.azimuth += self.auto_rotate_speed * AUTO_ROTATE_RATE * dt;
        }
    }

    /// World-space eye position for the current state.
    ///
    /// Pure function of `(azimuth, polar, radius, target)`: identical state
    /// yields a bit-identical position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_polar * self.azimuth.sin(),
                    self.polar.cos(),
                    sin_polar * self.azimuth.cos(),
                )
    }

    /// Horizontal orbit angle in radians.
    #[must_use]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Angle from the top pole in radians.
    #[must_use]
    pub fn polar(&self) -> f32 {
        self.polar
    }

    /// Distance from the target.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Fixed look-at target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Whether turntable auto-rotation is active.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Signed auto-rotate speed.
    #[must_use]
    pub fn auto_rotate_speed(&self) -> f32 {
        self.auto_rotate_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn home_camera() -> OrbitCamera {
        OrbitCamera::from_pose(
            Vec3::new(14.0, 10.0, 14.0),
            Vec3::new(0.0, 2.2, 0.0),
            OrbitLimits::default(),
            0.15,
        )
    }

    #[test]
    fn initial_pose_matches_configuration() {
        let cam = home_camera();
        assert!((cam.azimuth() - 14.0f32.atan2(14.0)).abs() < EPS);
        let expected_radius =
            (14.0f32 * 14.0 + 7.8 * 7.8 + 14.0 * 14.0).sqrt();
        assert!((cam.radius() - expected_radius).abs() < 1e-3);
        // eye() must reconstruct the original position
        let eye = cam.eye();
        assert!((eye - Vec3::new(14.0, 10.0, 14.0)).length() < 1e-3);
    }

    #[test]
    fn rotate_changes_only_azimuth() {
        let mut cam = home_camera();
        let polar = cam.polar();
        let radius = cam.radius();
        cam.rotate(0.7, 0.0);
        assert!((cam.polar() - polar).abs() < EPS);
        assert!((cam.radius() - radius).abs() < EPS);
    }

    #[test]
    fn ten_degree_nudge_is_exact() {
        let mut cam = home_camera();
        let before = cam.azimuth();
        cam.rotate(10.0f32.to_radians(), 0.0);
        assert!((cam.azimuth() - before - 10.0f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn nudge_up_raises_toward_the_zenith() {
        let mut cam = home_camera();
        let polar = cam.polar();
        cam.nudge(0, 1);
        assert!((cam.polar() - (polar - NUDGE_STEP)).abs() < EPS);
        cam.nudge(0, -1);
        assert!((cam.polar() - polar).abs() < EPS);
    }

    #[test]
    fn nudge_left_increases_azimuth() {
        let mut cam = home_camera();
        let azimuth = cam.azimuth();
        cam.nudge(-1, 0);
        assert!((cam.azimuth() - (azimuth + NUDGE_STEP)).abs() < EPS);
        cam.nudge(1, 0);
        assert!((cam.azimuth() - azimuth).abs() < EPS);
    }

    #[test]
    fn polar_clamps_to_nearest_bound() {
        let mut cam = home_camera();
        cam.rotate(0.0, 10.0);
        assert_eq!(cam.polar(), PI - POLAR_MARGIN);
        cam.rotate(0.0, -20.0);
        assert_eq!(cam.polar(), POLAR_MARGIN);
        // Clamp idempotence: clamping an already-clamped value is a no-op
        cam.rotate(0.0, -1.0);
        assert_eq!(cam.polar(), POLAR_MARGIN);
    }

    #[test]
    fn zoom_step_matches_reference() {
        let mut cam = OrbitCamera::from_pose(
            Vec3::new(0.0, 0.0, 20.0),
            Vec3::ZERO,
            OrbitLimits::default(),
            0.15,
        );
        cam.zoom(1.0);
        assert!((cam.radius() - 23.0).abs() < 1e-4);
    }

    #[test]
    fn repeated_zoom_never_leaves_bounds() {
        let limits = OrbitLimits::default();
        let mut cam = OrbitCamera::from_pose(
            Vec3::new(0.0, 0.0, 20.0),
            Vec3::ZERO,
            limits,
            0.15,
        );
        for _ in 0..50 {
            cam.zoom(1.0);
            assert!(cam.radius() <= limits.max_radius);
        }
        assert_eq!(cam.radius(), limits.max_radius);
        for _ in 0..50 {
            cam.zoom(-1.0);
            assert!(cam.radius() >= limits.min_radius);
        }
        assert_eq!(cam.radius(), limits.min_radius);
    }

    #[test]
    fn eye_is_pure() {
        let cam = home_camera();
        assert_eq!(cam.eye(), cam.eye());
    }

    #[test]
    fn reset_restores_home_pose() {
        let mut cam = home_camera();
        cam.rotate(1.3, -0.4);
        cam.zoom(3.0);
        cam.reset();
        let eye = cam.eye();
        assert!((eye - Vec3::new(14.0, 10.0, 14.0)).length() < 1e-3);
        assert_eq!(cam.target(), Vec3::new(0.0, 2.2, 0.0));
    }

    #[test]
    fn auto_rotate_azimuth_is_monotonic() {
        let mut cam = home_camera();
        cam.set_auto_rotate(true);
        cam.set_auto_rotate_speed(2.0);
        let mut last = cam.azimuth();
        for _ in 0..100 {
            cam.advance(1.0 / 60.0);
            assert!(cam.azimuth() >= last);
            last = cam.azimuth();
        }
    }

    #[test]
    fn advance_without_auto_rotate_is_a_no_op() {
        let mut cam = home_camera();
        let azimuth = cam.azimuth();
        cam.advance(1.0);
        assert_eq!(cam.azimuth(), azimuth);
    }

    #[test]
    fn auto_rotate_speed_two_is_one_orbit_per_thirty_seconds() {
        let mut cam = home_camera();
        cam.set_auto_rotate(true);
        cam.set_auto_rotate_speed(2.0);
        let before = cam.azimuth();
        cam.advance(30.0);
        assert!((cam.azimuth() - before - TAU).abs() < 1e-4);
    }
}
