//! Edge point generators
//!
//! Each function traces one edge of a panel from one corner to the next,
//! emitting axis-aligned runs only. Walking bottom, right, top, left in turn
//! yields one counter-clockwise loop:
//!
//! - bottom: `(x0, y0)` to `(x1, y0)`, left to right
//! - right: `(x1, y0)` to `(x1, y1)`, bottom to top
//! - top: `(x1, y1)` to `(x0, y1)`, right to left
//! - left: `(x0, y1)` to `(x0, y0)`, top to bottom
//!
//! With `has_fingers` the tooth segments protrude by `t_scaled` away from
//! the panel body, otherwise they are cut inward by the same amount.

use crate::dimensions::JointDimensions;
use crate::types::{push_unique_point, Point2D};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalEdge {
    Bottom,
    Top,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalEdge {
    Right,
    Left,
}

/// Start and end of each tooth segment, in increasing order.
fn tooth_spans(start: f64, segment: f64, count: usize) -> impl DoubleEndedIterator<Item = (f64, f64)> {
    (0..count).map(move |i| {
        let a = start + (2 * i + 1) as f64 * segment;
        let b = start + (2 * i + 2) as f64 * segment;
        (a, b)
    })
}

/// Signed offset of a tooth tip or slot bottom from the base line.
fn excursion(dims: &JointDimensions, outward: f64, has_fingers: bool) -> f64 {
    let direction = if has_fingers { outward } else { -outward };
    direction * dims.t_scaled
}

/// Trace the bottom or top edge.
///
/// Extended panels get a flat run from each outer corner to the centered
/// finger region.
pub fn horizontal_edge_points(
    dims: &JointDimensions,
    edge: HorizontalEdge,
    has_fingers: bool,
) -> Vec<Point2D> {
    let (base_y, outward) = match edge {
        HorizontalEdge::Bottom => (dims.y0, -1.0),
        HorizontalEdge::Top => (dims.y1, 1.0),
    };
    let tip_y = base_y + excursion(dims, outward, has_fingers);
    let spans = tooth_spans(dims.finger_start_x, dims.finger_width, dims.count_x);

    let mut path = Vec::with_capacity(4 * dims.count_x + 4);
    match edge {
        HorizontalEdge::Bottom => {
            push_unique_point(&mut path, Point2D::new(dims.x0, base_y));
            push_unique_point(&mut path, Point2D::new(dims.finger_start_x, base_y));
            for (a, b) in spans {
                push_unique_point(&mut path, Point2D::new(a, base_y));
                push_unique_point(&mut path, Point2D::new(a, tip_y));
                push_unique_point(&mut path, Point2D::new(b, tip_y));
                push_unique_point(&mut path, Point2D::new(b, base_y));
            }
            push_unique_point(&mut path, Point2D::new(dims.finger_end_x(), base_y));
            push_unique_point(&mut path, Point2D::new(dims.x1, base_y));
        }
        HorizontalEdge::Top => {
            push_unique_point(&mut path, Point2D::new(dims.x1, base_y));
            push_unique_point(&mut path, Point2D::new(dims.finger_end_x(), base_y));
            for (a, b) in spans.rev() {
                push_unique_point(&mut path, Point2D::new(b, base_y));
                push_unique_point(&mut path, Point2D::new(b, tip_y));
                push_unique_point(&mut path, Point2D::new(a, tip_y));
                push_unique_point(&mut path, Point2D::new(a, base_y));
            }
            push_unique_point(&mut path, Point2D::new(dims.finger_start_x, base_y));
            push_unique_point(&mut path, Point2D::new(dims.x0, base_y));
        }
    }
    path
}

/// Trace the right or left edge.
pub fn vertical_edge_points(
    dims: &JointDimensions,
    edge: VerticalEdge,
    has_fingers: bool,
) -> Vec<Point2D> {
    let (base_x, outward) = match edge {
        VerticalEdge::Right => (dims.x1, 1.0),
        VerticalEdge::Left => (dims.x0, -1.0),
    };
    let tip_x = base_x + excursion(dims, outward, has_fingers);
    let spans = tooth_spans(dims.y0, dims.finger_height, dims.count_y);

    let mut path = Vec::with_capacity(4 * dims.count_y + 2);
    match edge {
        VerticalEdge::Right => {
            push_unique_point(&mut path, Point2D::new(base_x, dims.y0));
            for (a, b) in spans {
                push_unique_point(&mut path, Point2D::new(base_x, a));
                push_unique_point(&mut path, Point2D::new(tip_x, a));
                push_unique_point(&mut path, Point2D::new(tip_x, b));
                push_unique_point(&mut path, Point2D::new(base_x, b));
            }
            push_unique_point(&mut path, Point2D::new(base_x, dims.y1));
        }
        VerticalEdge::Left => {
            push_unique_point(&mut path, Point2D::new(base_x, dims.y1));
            for (a, b) in spans.rev() {
                push_unique_point(&mut path, Point2D::new(base_x, b));
                push_unique_point(&mut path, Point2D::new(tip_x, b));
                push_unique_point(&mut path, Point2D::new(tip_x, a));
                push_unique_point(&mut path, Point2D::new(base_x, a));
            }
            push_unique_point(&mut path, Point2D::new(base_x, dims.y0));
        }
    }
    path
}
