//! Extruded panel solids
//!
//! A panel solid is a prism: the outline at z = 0, the same outline at
//! z = depth, one quad per outline segment and two n-gon caps. Caps are
//! left as polygons; triangulation belongs to the renderer.

use crate::outline::Outline;
use crate::placement::Placement;
use crate::types::Point2D;
use nalgebra::Point3;

#[derive(Debug, Clone, PartialEq)]
pub struct PanelSolid {
    /// Bottom ring first, then the top ring in the same order
    pub vertices: Vec<Point3<f64>>,
    /// Vertex indices per face, wound counter-clockwise seen from outside
    pub faces: Vec<Vec<usize>>,
    pub depth: f64,
}

impl PanelSolid {
    /// Extrude `outline` along local +z by `depth` model units.
    pub fn extrude(outline: &Outline, depth: f64) -> Self {
        let mut ring: Vec<Point2D> = outline.vertices().to_vec();
        if outline.signed_area() < 0.0 {
            ring.reverse();
        }

        let n = ring.len();
        let mut vertices = Vec::with_capacity(2 * n);
        vertices.extend(ring.iter().map(|p| Point3::new(p.x, p.y, 0.0)));
        vertices.extend(ring.iter().map(|p| Point3::new(p.x, p.y, depth)));

        let mut faces = Vec::with_capacity(n + 2);
        faces.push((0..n).rev().collect());
        faces.push((n..2 * n).collect());
        for i in 0..n {
            let j = (i + 1) % n;
            faces.push(vec![i, j, n + j, n + i]);
        }

        Self {
            vertices,
            faces,
            depth,
        }
    }

    /// Number of points in one cap ring.
    pub fn ring_len(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Vertices moved into model space.
    pub fn world_vertices(&self, placement: &Placement) -> Vec<Point3<f64>> {
        let iso = placement.isometry();
        self.vertices.iter().map(|v| iso * v).collect()
    }

    /// Axis-aligned bounds of the placed solid.
    pub fn world_bounds(&self, placement: &Placement) -> Option<(Point3<f64>, Point3<f64>)> {
        let world = self.world_vertices(placement);
        let first = *world.first()?;
        Some(world.iter().fold((first, first), |(lo, hi), v| {
            (lo.inf(v), hi.sup(v))
        }))
    }

    /// Signed volume from the divergence theorem over fan-split faces.
    pub fn volume(&self) -> f64 {
        let mut volume = 0.0;
        for face in &self.faces {
            let a = self.vertices[face[0]].coords;
            for k in 1..face.len().saturating_sub(1) {
                let b = self.vertices[face[k]].coords;
                let c = self.vertices[face[k + 1]].coords;
                volume += a.dot(&b.cross(&c));
            }
        }
        volume / 6.0
    }
}

/// Wireframe for a panel: every outline edge on both caps plus the
/// vertical edges joining them.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeOverlay {
    pub segments: Vec<[Point3<f64>; 2]>,
}

impl EdgeOverlay {
    pub fn from_solid(solid: &PanelSolid) -> Self {
        let n = solid.ring_len();
        let v = &solid.vertices;
        let mut segments = Vec::with_capacity(3 * n);
        for i in 0..n {
            let j = (i + 1) % n;
            segments.push([v[i], v[j]]);
            segments.push([v[n + i], v[n + j]]);
            segments.push([v[i], v[n + i]]);
        }
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::calculate_finger_joint_dimensions;
    use crate::outline::pattern_outline;
    use crate::sides::JointPattern;

    #[test]
    fn test_extrude_rectangle() {
        let outline = Outline::rectangle(1.0, 0.5);
        let solid = PanelSolid::extrude(&outline, 0.03);

        assert_eq!(solid.ring_len(), 4);
        assert_eq!(solid.vertices.len(), 8);
        assert_eq!(solid.faces.len(), 6);
        assert!((solid.volume() - 0.015).abs() < 1e-12);
    }

    #[test]
    fn test_clockwise_outline_is_rewound() {
        let cw = Outline::from_points([
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 1.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(1.0, 0.0),
        ]);
        assert!(cw.signed_area() < 0.0);
        let solid = PanelSolid::extrude(&cw, 1.0);
        assert!((solid.volume() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_finger_solid_volume_matches_area() {
        let dims = calculate_finger_joint_dimensions(100.0, 80.0, 5.0, 10.0, None);
        let outline = pattern_outline(&dims, &JointPattern::SIDE_TEETH);
        let solid = PanelSolid::extrude(&outline, dims.t_scaled);
        let expected = outline.signed_area() * dims.t_scaled;
        assert!((solid.volume() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_edge_overlay_counts() {
        let solid = PanelSolid::extrude(&Outline::rectangle(1.0, 1.0), 0.1);
        let overlay = EdgeOverlay::from_solid(&solid);
        assert_eq!(overlay.len(), 12);
        assert!(!overlay.is_empty());
    }

    #[test]
    fn test_world_bounds_follow_placement() {
        let solid = PanelSolid::extrude(&Outline::rectangle(1.0, 1.0), 0.1);
        let placement = Placement {
            position: nalgebra::Vector3::new(0.0, 0.0, 2.0),
            ..Placement::default()
        };
        let (lo, hi) = solid.world_bounds(&placement).unwrap();
        assert!((lo.z - 2.0).abs() < 1e-12);
        assert!((hi.z - 2.1).abs() < 1e-12);
        assert!((hi.x - 0.5).abs() < 1e-12);
    }
}
