//! Panel outline assembler
//!
//! Concatenates the four edge traces of a panel (bottom, right, top, left)
//! into one closed counter-clockwise ring.

use crate::dimensions::{JointDimensions, MODEL_SCALE};
use crate::edges::{horizontal_edge_points, vertical_edge_points, HorizontalEdge, VerticalEdge};
use crate::sides::{EdgeKind, EdgeKinds, JointPattern};
use crate::types::{push_unique_point, Point2D};
use fingerbox_core::{BoxError, BoxResult};
use serde::{Deserialize, Serialize};

/// Largest gap between the last and first point still treated as closed.
pub const CLOSURE_EPSILON: f64 = 1e-9;

/// A closed polygon; the last point repeats the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    points: Vec<Point2D>,
}

impl Outline {
    /// Build a ring from an ordered point list, dropping repeats and
    /// connecting back to the first point if needed.
    pub fn from_points(points: impl IntoIterator<Item = Point2D>) -> Self {
        let mut ring = Vec::new();
        for p in points {
            push_unique_point(&mut ring, p);
        }
        if let Some(first) = ring.first().copied() {
            if ring.len() > 1 {
                push_unique_point(&mut ring, first);
            }
        }
        Self { points: ring }
    }

    /// Axis-aligned rectangle centered on the origin, sizes in model units.
    pub fn rectangle(width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::from_points([
            Point2D::new(-hw, -hh),
            Point2D::new(hw, -hh),
            Point2D::new(hw, hh),
            Point2D::new(-hw, hh),
        ])
    }

    /// The closed ring, first point repeated at the end.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Distinct vertices, without the closing repeat.
    pub fn vertices(&self) -> &[Point2D] {
        match self.points.len() {
            0 | 1 => &self.points,
            n => &self.points[..n - 1],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Shoelace area, positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum::<f64>()
            / 2.0
    }

    /// Lower-left and upper-right corners of the bounding box.
    pub fn bounds(&self) -> Option<(Point2D, Point2D)> {
        let first = self.points.first()?;
        let (mut min, mut max) = (*first, *first);
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }

    pub fn is_closed(&self, epsilon: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first.distance_to(last) <= epsilon,
            _ => false,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.points.iter().all(Point2D::is_finite)
    }

    /// Every segment runs parallel to one axis.
    pub fn is_axis_aligned(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| (w[0].x == w[1].x) != (w[0].y == w[1].y))
    }

    /// True if any two segments share a point other than the vertex joining
    /// neighbours.
    pub fn has_self_intersection(&self) -> bool {
        let segments: Vec<(Point2D, Point2D)> =
            self.points.windows(2).map(|w| (w[0], w[1])).collect();
        let m = segments.len();
        if m < 3 {
            return true;
        }

        // neighbours may only meet at their shared vertex
        for i in 0..m {
            let (a, b) = segments[i];
            let (_, c) = segments[(i + 1) % m];
            let turn = orient(a, b, c);
            let back = (b.x - a.x) * (c.x - b.x) + (b.y - a.y) * (c.y - b.y);
            if turn == 0.0 && back < 0.0 {
                return true;
            }
        }

        let mut order: Vec<usize> = (0..m).collect();
        order.sort_by(|&i, &j| {
            let a = segments[i].0.x.min(segments[i].1.x);
            let b = segments[j].0.x.min(segments[j].1.x);
            a.total_cmp(&b)
        });

        for (k, &i) in order.iter().enumerate() {
            let (p1, p2) = segments[i];
            let max_x = p1.x.max(p2.x);
            for &j in &order[k + 1..] {
                let (q1, q2) = segments[j];
                if q1.x.min(q2.x) > max_x {
                    break;
                }
                let adjacent = i.abs_diff(j) == 1 || i.abs_diff(j) == m - 1;
                if adjacent {
                    continue;
                }
                if p1.y.max(p2.y) < q1.y.min(q2.y) || q1.y.max(q2.y) < p1.y.min(p2.y) {
                    continue;
                }
                if segments_touch(p1, p2, q1, q2) {
                    return true;
                }
            }
        }
        false
    }

    /// Reject rings that are not fit for extrusion.
    pub fn validate(&self) -> BoxResult<()> {
        if self.vertex_count() < 3 {
            return Err(BoxError::DegenerateGeometry(format!(
                "outline has {} vertices",
                self.vertex_count()
            )));
        }
        if !self.is_finite() {
            return Err(BoxError::DegenerateGeometry(
                "outline has non-finite coordinates".to_string(),
            ));
        }
        if !self.is_closed(CLOSURE_EPSILON) {
            return Err(BoxError::DegenerateGeometry(
                "outline does not close".to_string(),
            ));
        }
        if self.signed_area().abs() <= f64::EPSILON {
            return Err(BoxError::DegenerateGeometry(
                "outline encloses no area".to_string(),
            ));
        }
        if self.has_self_intersection() {
            return Err(BoxError::DegenerateGeometry(
                "outline intersects itself".to_string(),
            ));
        }
        Ok(())
    }
}

fn orient(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn within(a: Point2D, b: Point2D, p: Point2D) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn segments_touch(p1: Point2D, p2: Point2D, q1: Point2D, q2: Point2D) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && within(q1, q2, p1))
        || (d2 == 0.0 && within(q1, q2, p2))
        || (d3 == 0.0 && within(p1, p2, q1))
        || (d4 == 0.0 && within(p1, p2, q2))
}

fn horizontal(dims: &JointDimensions, edge: HorizontalEdge, kind: EdgeKind) -> Vec<Point2D> {
    match kind {
        EdgeKind::Teeth => horizontal_edge_points(dims, edge, true),
        EdgeKind::Slots => horizontal_edge_points(dims, edge, false),
        EdgeKind::Plain => match edge {
            HorizontalEdge::Bottom => vec![
                Point2D::new(dims.x0, dims.y0),
                Point2D::new(dims.x1, dims.y0),
            ],
            HorizontalEdge::Top => vec![
                Point2D::new(dims.x1, dims.y1),
                Point2D::new(dims.x0, dims.y1),
            ],
        },
    }
}

fn vertical(dims: &JointDimensions, edge: VerticalEdge, kind: EdgeKind) -> Vec<Point2D> {
    match kind {
        EdgeKind::Teeth => vertical_edge_points(dims, edge, true),
        EdgeKind::Slots => vertical_edge_points(dims, edge, false),
        EdgeKind::Plain => match edge {
            VerticalEdge::Right => vec![
                Point2D::new(dims.x1, dims.y0),
                Point2D::new(dims.x1, dims.y1),
            ],
            VerticalEdge::Left => vec![
                Point2D::new(dims.x0, dims.y1),
                Point2D::new(dims.x0, dims.y0),
            ],
        },
    }
}

/// Closed outline of a jointed panel, one edge kind per side.
pub fn panel_outline(dims: &JointDimensions, edges: &EdgeKinds) -> Outline {
    let bottom = horizontal(dims, HorizontalEdge::Bottom, edges.bottom);
    let right = vertical(dims, VerticalEdge::Right, edges.right);
    let top = horizontal(dims, HorizontalEdge::Top, edges.top);
    let left = vertical(dims, VerticalEdge::Left, edges.left);

    Outline::from_points(bottom.into_iter().chain(right).chain(top).chain(left))
}

/// Closed outline for a teeth/slots pattern on all four edges.
pub fn pattern_outline(dims: &JointDimensions, pattern: &JointPattern) -> Outline {
    panel_outline(dims, &EdgeKinds::from(*pattern))
}

/// Plain rectangle for a flat-jointed panel, sizes in caller units.
pub fn rectangle_outline(width: f64, height: f64) -> Outline {
    Outline::rectangle(width * MODEL_SCALE, height * MODEL_SCALE)
}
