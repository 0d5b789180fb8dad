//! Panel placement engine
//!
//! Panels are extruded along their local +z axis, so a placed panel occupies
//! the slab between its mounting plane and one thickness further out. Each
//! side is rotated so local +z points out of the box, then pushed along its
//! normal axis to half the inner span.

use crate::dimensions::MODEL_SCALE;
use crate::extents::BoxExtents;
use nalgebra::{Isometry3, Point3, Translation3, Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

/// How one side is mounted relative to the box center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRule {
    /// World axis the panel faces along
    pub normal: Axis,
    /// +1.0 or -1.0, which end of the normal axis
    pub sign: f64,
    pub rotation_axis: Axis,
    /// Radians
    pub angle: f64,
}

impl PlacementRule {
    pub fn new(normal: Axis, sign: f64, rotation_axis: Axis, angle: f64) -> Self {
        Self {
            normal,
            sign,
            rotation_axis,
            angle,
        }
    }

    /// Resolve against concrete box extents. `lift` raises the panel along
    /// the vertical axis, in caller units.
    pub fn place(&self, extents: &BoxExtents, lift: f64) -> Placement {
        let offset = self.sign * (extents.along(self.normal) / 2.0 - extents.thickness);
        let position = self.normal.unit().into_inner() * (offset * MODEL_SCALE)
            + Vector3::y() * (lift * MODEL_SCALE);

        Placement {
            position,
            rotation: UnitQuaternion::from_axis_angle(&self.rotation_axis.unit(), self.angle),
        }
    }
}

/// Position and orientation of a panel in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vector3<f64>,
    pub rotation: UnitQuaternion<f64>,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
        }
    }
}

impl Placement {
    pub fn isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.position), self.rotation)
    }

    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.isometry() * point
    }

    /// Roll, pitch and yaw in radians, for renderers that take Euler angles.
    pub fn euler_angles(&self) -> (f64, f64, f64) {
        self.rotation.euler_angles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn extents() -> BoxExtents {
        BoxExtents {
            width: 100.0,
            height: 80.0,
            depth: 60.0,
            thickness: 5.0,
            wall_extra: 0.0,
        }
    }

    fn assert_close(a: &Point3<f64>, b: &Point3<f64>) {
        assert!((a - b).norm() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn test_front_offset_by_half_inner_span() {
        let rule = PlacementRule::new(Axis::Z, 1.0, Axis::Y, 0.0);
        let placement = rule.place(&extents(), 0.0);
        assert!((placement.position.z - 0.25).abs() < 1e-12);
        // extrusion runs from the inner face to the outer face
        let outer = placement.transform_point(&Point3::new(0.0, 0.0, 0.05));
        assert!((outer.z - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_right_rotation_maps_local_z_to_world_x() {
        let rule = PlacementRule::new(Axis::X, 1.0, Axis::Y, FRAC_PI_2);
        let placement = rule.place(&extents(), 0.0);
        assert_close(
            &placement.transform_point(&Point3::new(0.0, 0.0, 0.05)),
            &Point3::new(0.5, 0.0, 0.0),
        );
        assert_close(
            &placement.transform_point(&Point3::new(0.3, 0.0, 0.0)),
            &Point3::new(0.45, 0.0, -0.3),
        );
    }

    #[test]
    fn test_bottom_rotation_maps_local_z_down() {
        let rule = PlacementRule::new(Axis::Y, -1.0, Axis::X, FRAC_PI_2);
        let placement = rule.place(&extents(), 0.0);
        assert_close(
            &placement.transform_point(&Point3::new(0.0, 0.0, 0.05)),
            &Point3::new(0.0, -0.4, 0.0),
        );
        assert_close(
            &placement.transform_point(&Point3::new(0.0, 0.25, 0.0)),
            &Point3::new(0.0, -0.35, 0.25),
        );
    }

    #[test]
    fn test_lift_moves_along_vertical_axis() {
        let rule = PlacementRule::new(Axis::Z, -1.0, Axis::Y, 0.0);
        let placement = rule.place(&extents(), 2.5);
        assert!((placement.position.y - 0.025).abs() < 1e-12);
        assert!((placement.position.z + 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_default_is_identity() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(Placement::default().transform_point(&p), p);
        assert_eq!(Placement::default().euler_angles(), (0.0, 0.0, 0.0));
    }
}
