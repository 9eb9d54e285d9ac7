//! Dashed flow-line polylines.
//!
//! Each line carries a cumulative distance per vertex; the fragment shader
//! turns that into a dash pattern and the frame scheduler slides the dash
//! offset to fake water movement without moving geometry.

use glam::Vec3;

/// A polyline with per-vertex cumulative arc length.
#[derive(Debug, Clone)]
pub struct FlowLine {
    /// Polyline vertices in world space.
    pub points: Vec<Vec3>,
    /// Cumulative distance from the first vertex, one entry per point.
    pub distances: Vec<f32>,
}

impl FlowLine {
    /// Build a flow line from a point sequence, computing cumulative
    /// distances.
    #[must_use]
    pub fn new(points: Vec<Vec3>) -> Self {
        let mut distances = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                total += (*p - points[i - 1]).length();
            }
            distances.push(total);
        }
        Self { points, distances }
    }

    /// Total arc length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.distances.last().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_are_cumulative_and_monotonic() {
        let line = FlowLine::new(vec![
            Vec3::ZERO,
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(3.0, 4.0, 0.0),
        ]);
        assert_eq!(line.distances, vec![0.0, 3.0, 7.0]);
        assert!(line
            .distances
            .windows(2)
            .all(|w| w[1] >= w[0]));
        assert_eq!(line.length(), 7.0);
    }

    #[test]
    fn empty_line_has_zero_length() {
        let line = FlowLine::new(Vec::new());
        assert_eq!(line.length(), 0.0);
    }
}
