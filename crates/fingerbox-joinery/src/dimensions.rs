//! Finger joint dimension calculator
//!
//! Maps a panel's nominal size, material thickness and target finger size to
//! the tooth counts and segment lengths used by the edge generators. Every
//! edge is split into `2 * count + 1` equal segments (gap, tooth, gap, ...,
//! gap) so both ends of an edge start with the same margin.
//!
//! Coordinates are panel-local with the origin at the panel center and are
//! scaled by [`MODEL_SCALE`].

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Model units per caller unit.
pub const MODEL_SCALE: f64 = 0.01;

/// Upper bound on teeth per edge, keeps pathological finger sizes bounded.
pub const MAX_FINGERS_PER_EDGE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointDimensions {
    /// Teeth along the horizontal edges
    pub count_x: usize,
    /// Teeth along the vertical edges
    pub count_y: usize,
    /// Segment length along the horizontal edges
    pub finger_width: f64,
    /// Segment length along the vertical edges
    pub finger_height: f64,
    /// Material thickness in model units
    pub t_scaled: f64,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    /// Width of the finger-bearing region on the horizontal edges
    pub finger_area_width: f64,
    /// Left end of the finger-bearing region
    pub finger_start_x: f64,
}

impl JointDimensions {
    pub fn panel_width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn panel_height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// True when the panel is wider than its finger-bearing span.
    pub fn is_extended(&self) -> bool {
        self.finger_start_x > self.x0
    }

    /// Right end of the finger-bearing region.
    pub fn finger_end_x(&self) -> f64 {
        if self.is_extended() {
            self.finger_start_x + self.finger_area_width
        } else {
            self.x1
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Number of teeth that fit along `dimension`, never less than one.
pub fn finger_count(dimension: f64, finger_size: f64) -> usize {
    if !(finger_size.is_finite() && finger_size > 0.0) {
        return 1;
    }

    let count = ((sanitize(dimension) + finger_size) / (2.0 * finger_size)).floor();
    if !count.is_finite() || count < 1.0 {
        return 1;
    }

    if count > MAX_FINGERS_PER_EDGE as f64 {
        warn!(
            dimension,
            finger_size, "finger count clamped to {}", MAX_FINGERS_PER_EDGE
        );
        return MAX_FINGERS_PER_EDGE;
    }

    count as usize
}

/// Derive the joint layout for one panel.
///
/// `actual_width`, when larger than `width`, makes an extended panel: the
/// finger region keeps `width` and is centered with solid margins on both
/// sides. Invalid inputs are clamped rather than rejected.
pub fn calculate_finger_joint_dimensions(
    width: f64,
    height: f64,
    thickness: f64,
    finger_size: f64,
    actual_width: Option<f64>,
) -> JointDimensions {
    let width = sanitize(width);
    let height = sanitize(height);
    let thickness = sanitize(thickness);

    let count_x = finger_count(width, finger_size);
    let count_y = finger_count(height, finger_size);

    let panel_width = match actual_width.map(sanitize) {
        Some(actual) if actual > width => actual,
        _ => width,
    };

    let area_width = width * MODEL_SCALE;
    let half_width = panel_width * MODEL_SCALE / 2.0;
    let half_height = height * MODEL_SCALE / 2.0;

    let x0 = -half_width;
    let finger_start_x = if panel_width > width {
        -area_width / 2.0
    } else {
        x0
    };

    JointDimensions {
        count_x,
        count_y,
        finger_width: area_width / (2 * count_x + 1) as f64,
        finger_height: height * MODEL_SCALE / (2 * count_y + 1) as f64,
        t_scaled: thickness * MODEL_SCALE,
        x0,
        y0: -half_height,
        x1: half_width,
        y1: half_height,
        finger_area_width: area_width,
        finger_start_x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_reference_panel() {
        let dims = calculate_finger_joint_dimensions(100.0, 80.0, 5.0, 10.0, None);
        assert_eq!(dims.count_x, 5);
        assert_eq!(dims.count_y, 4);
        assert!((dims.x0 + 0.5).abs() < EPS);
        assert!((dims.y0 + 0.4).abs() < EPS);
        assert!((dims.x1 - 0.5).abs() < EPS);
        assert!((dims.y1 - 0.4).abs() < EPS);
        assert!((dims.finger_width - 1.0 / 11.0).abs() < EPS);
        assert!((dims.finger_height - 0.8 / 9.0).abs() < EPS);
        assert!((dims.t_scaled - 0.05).abs() < EPS);
        assert!(!dims.is_extended());
        assert_eq!(dims.finger_start_x, dims.x0);
        assert_eq!(dims.finger_end_x(), dims.x1);
    }

    #[test]
    fn test_finger_larger_than_panel() {
        let dims = calculate_finger_joint_dimensions(5.0, 5.0, 2.0, 10.0, None);
        assert_eq!(dims.count_x, 1);
        assert_eq!(dims.count_y, 1);
        assert!((dims.finger_width - 0.05 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_extended_panel_centers_fingers() {
        let dims = calculate_finger_joint_dimensions(100.0, 80.0, 5.0, 10.0, Some(120.0));
        assert!(dims.is_extended());
        assert!((dims.finger_start_x + 0.5).abs() < EPS);
        assert!((dims.finger_area_width - 1.0).abs() < EPS);
        assert!((dims.x0 + 0.6).abs() < EPS);
        assert!((dims.x1 - 0.6).abs() < EPS);
        assert!((dims.finger_end_x() - 0.5).abs() < EPS);
        // teeth still follow the finger-bearing width
        assert_eq!(dims.count_x, 5);
    }

    #[test]
    fn test_narrower_actual_width_is_ignored() {
        let dims = calculate_finger_joint_dimensions(100.0, 80.0, 5.0, 10.0, Some(90.0));
        assert!(!dims.is_extended());
        assert!((dims.panel_width() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_zero_thickness() {
        let dims = calculate_finger_joint_dimensions(100.0, 80.0, 0.0, 10.0, None);
        assert_eq!(dims.t_scaled, 0.0);
    }

    #[test]
    fn test_degenerate_inputs_stay_finite() {
        for (w, h, t, f) in [
            (0.0, 0.0, 0.0, 0.0),
            (f64::NAN, 10.0, 1.0, 5.0),
            (10.0, f64::INFINITY, -1.0, f64::NAN),
            (1e-300, 1e-300, 1e-300, 1e-300),
        ] {
            let dims = calculate_finger_joint_dimensions(w, h, t, f, None);
            assert!(dims.count_x >= 1 && dims.count_y >= 1);
            for v in [
                dims.finger_width,
                dims.finger_height,
                dims.t_scaled,
                dims.x0,
                dims.y1,
            ] {
                assert!(v.is_finite(), "non-finite value for {w}, {h}, {t}, {f}");
            }
        }
    }

    #[test]
    fn test_finger_count_is_bounded() {
        assert_eq!(finger_count(1e9, 1e-6), MAX_FINGERS_PER_EDGE);
        assert_eq!(finger_count(10.0, 0.0), 1);
        assert_eq!(finger_count(30.0, 10.0), 2);
    }
}
