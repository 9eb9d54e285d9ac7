//! Per-frame animation state: elapsed time, dash scrolling, rain, and
//! camera auto-rotation, behind an explicit start/stop switch.

use crate::camera::OrbitCamera;
use crate::options::{FlowOptions, RainOptions};

use super::rain::RainField;

/// Longest frame step the scheduler will integrate, seconds. Frames longer
/// than this (window dragged, debugger pause) advance by this much instead.
pub const MAX_STEP: f32 = 0.1;

/// Drives all time-based animation from a single per-frame tick.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    running: bool,
    elapsed: f32,
    dash_offset: f32,
    dash_rate: f32,
    rain: RainField,
}

impl FrameScheduler {
    /// A stopped scheduler with freshly spawned rain.
    #[must_use]
    pub fn new(rain: &RainOptions, flow: &FlowOptions) -> Self {
        Self {
            running: false,
            elapsed: 0.0,
            dash_offset: 0.0,
            dash_rate: flow.dash_rate,
            rain: RainField::new(rain),
        }
    }

    /// Begin advancing on tick.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop advancing; state freezes where it is.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether ticks currently advance the animation.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one frame. No-op while stopped.
    pub fn tick(&mut self, dt: f32, camera: &mut OrbitCamera) {
        if !self.running {
            return;
        }
        let dt = dt.clamp(0.0, MAX_STEP);
        self.elapsed += dt;
        self.dash_offset = -self.elapsed * self.dash_rate;
        self.rain.update(dt);
        camera.advance(dt);
    }

    /// Seconds of animation integrated so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Current dash-pattern offset for the water lines.
    #[must_use]
    pub fn dash_offset(&self) -> f32 {
        self.dash_offset
    }

    /// The rain field.
    #[must_use]
    pub fn rain(&self) -> &RainField {
        &self.rain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::OrbitLimits;
    use glam::Vec3;

    fn scheduler() -> FrameScheduler {
        FrameScheduler::new(&RainOptions::default(), &FlowOptions::default())
    }

    fn camera() -> OrbitCamera {
        OrbitCamera::from_pose(
            Vec3::new(14.0, 10.0, 14.0),
            Vec3::new(0.0, 2.2, 0.0),
            OrbitLimits::default(),
            0.15,
        )
    }

    #[test]
    fn stopped_tick_is_a_no_op() {
        let mut s = scheduler();
        let mut cam = camera();
        let before = s.rain().drops().to_vec();
        s.tick(0.016, &mut cam);
        assert!((s.elapsed() - 0.0).abs() < f32::EPSILON);
        assert_eq!(s.rain().drops(), before.as_slice());
    }

    #[test]
    fn tick_accumulates_elapsed_time() {
        let mut s = scheduler();
        let mut cam = camera();
        s.start();
        for _ in 0..10 {
            s.tick(0.016, &mut cam);
        }
        assert!((s.elapsed() - 0.16).abs() < 1e-5);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut s = scheduler();
        let mut cam = camera();
        s.start();
        s.tick(5.0, &mut cam);
        assert!((s.elapsed() - MAX_STEP).abs() < f32::EPSILON);
    }

    #[test]
    fn dash_offset_scrolls_backwards() {
        let mut s = scheduler();
        let mut cam = camera();
        s.start();
        s.tick(1.0 / 60.0, &mut cam);
        let first = s.dash_offset();
        s.tick(1.0 / 60.0, &mut cam);
        assert!(s.dash_offset() < first);
        assert!(first < 0.0);
    }

    #[test]
    fn auto_rotate_advances_the_camera() {
        let mut s = scheduler();
        let mut cam = camera();
        cam.set_auto_rotate(true);
        let before = cam.azimuth();
        s.start();
        s.tick(0.05, &mut cam);
        assert!(cam.azimuth() > before);
    }

    #[test]
    fn stop_freezes_state() {
        let mut s = scheduler();
        let mut cam = camera();
        s.start();
        s.tick(0.02, &mut cam);
        s.stop();
        let frozen = (s.elapsed(), s.dash_offset());
        s.tick(0.02, &mut cam);
        assert_eq!(frozen, (s.elapsed(), s.dash_offset()));
    }
}
