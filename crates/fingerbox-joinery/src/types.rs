//! Type definitions for the finger-jointed box

use fingerbox_core::{BoxError, BoxResult, MeasurementSystem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointType {
    Flat = 0,
    Finger = 1,
}

impl From<i32> for JointType {
    fn from(value: i32) -> Self {
        match value {
            1 => JointType::Finger,
            _ => JointType::Flat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxType {
    Closed = 0,
    Open = 1,
}

impl From<i32> for BoxType {
    fn from(value: i32) -> Self {
        match value {
            1 => BoxType::Open,
            _ => BoxType::Closed,
        }
    }
}

impl BoxType {
    pub fn has_top(self) -> bool {
        self == BoxType::Closed
    }
}

fn default_material() -> String {
    "plywood".to_string()
}

/// Overall box parameters, all lengths in one caller-chosen unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub thickness: f64,
    #[serde(default)]
    pub units: MeasurementSystem,
    pub joint_type: JointType,
    pub box_type: BoxType,
    /// Target finger length, required for finger joints
    #[serde(default)]
    pub finger_size: Option<f64>,
    /// Material reference copied onto every panel
    #[serde(default = "default_material")]
    pub material: String,
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 80.0,
            depth: 60.0,
            thickness: 3.0,
            units: MeasurementSystem::Metric,
            joint_type: JointType::Finger,
            box_type: BoxType::Closed,
            finger_size: Some(10.0),
            material: default_material(),
        }
    }
}

impl BoxSpec {
    /// Check the box description before any geometry is built.
    pub fn validate(&self) -> BoxResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
            ("thickness", self.thickness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BoxError::invalid_dimension(name, value));
            }
        }

        let limit = self.width.min(self.height).min(self.depth) / 2.0;
        if self.thickness >= limit {
            return Err(BoxError::ThicknessTooLarge {
                thickness: self.thickness,
                limit,
            });
        }

        if self.joint_type == JointType::Finger {
            self.required_finger_size()?;
        }

        Ok(())
    }

    /// The finger size, or [`BoxError::MissingFingerSize`] when it is absent
    /// or not a positive number.
    pub fn required_finger_size(&self) -> BoxResult<f64> {
        match self.finger_size {
            Some(size) if size.is_finite() && size > 0.0 => Ok(size),
            _ => Err(BoxError::MissingFingerSize),
        }
    }
}

/// A point in panel-local, model-scaled coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Append `point` unless it repeats the previous one.
///
/// Exact comparison: every coordinate is derived from the same corner and
/// segment values, so a tolerance would only merge distinct vertices and
/// leave diagonal segments behind.
pub fn push_unique_point(path: &mut Vec<Point2D>, point: Point2D) {
    if path.last() == Some(&point) {
        return;
    }
    path.push(point);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_valid() {
        assert!(BoxSpec::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let spec = BoxSpec {
            depth: 0.0,
            ..BoxSpec::default()
        };
        assert_eq!(
            spec.validate(),
            Err(BoxError::invalid_dimension("depth", 0.0))
        );

        let spec = BoxSpec {
            width: f64::NAN,
            ..BoxSpec::default()
        };
        assert!(matches!(
            spec.validate(),
            Err(BoxError::InvalidDimension { ref name, .. }) if name == "width"
        ));
    }

    #[test]
    fn test_rejects_thick_material() {
        let spec = BoxSpec {
            width: 40.0,
            height: 40.0,
            depth: 20.0,
            thickness: 10.0,
            ..BoxSpec::default()
        };
        assert_eq!(
            spec.validate(),
            Err(BoxError::ThicknessTooLarge {
                thickness: 10.0,
                limit: 10.0
            })
        );
    }

    #[test]
    fn test_finger_size_required_only_for_finger_joints() {
        let spec = BoxSpec {
            finger_size: None,
            ..BoxSpec::default()
        };
        assert_eq!(spec.validate(), Err(BoxError::MissingFingerSize));

        let spec = BoxSpec {
            finger_size: Some(-2.0),
            ..BoxSpec::default()
        };
        assert_eq!(spec.validate(), Err(BoxError::MissingFingerSize));

        let spec = BoxSpec {
            finger_size: None,
            joint_type: JointType::Flat,
            ..BoxSpec::default()
        };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_enum_from_index() {
        assert_eq!(JointType::from(1), JointType::Finger);
        assert_eq!(JointType::from(7), JointType::Flat);
        assert_eq!(BoxType::from(1), BoxType::Open);
        assert_eq!(BoxType::from(0), BoxType::Closed);
        assert!(!BoxType::Open.has_top());
    }

    #[test]
    fn test_push_unique_point_skips_repeats() {
        let mut path = Vec::new();
        push_unique_point(&mut path, Point2D::new(0.0, 0.0));
        push_unique_point(&mut path, Point2D::new(0.0, 0.0));
        push_unique_point(&mut path, Point2D::new(1.0, 0.0));
        push_unique_point(&mut path, Point2D::new(0.0, 0.0));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_spec_serde_defaults() {
        let json = r#"{
            "width": 50.0, "height": 40.0, "depth": 30.0, "thickness": 2.0,
            "joint_type": "flat", "box_type": "open"
        }"#;
        let spec: BoxSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.units, MeasurementSystem::Metric);
        assert_eq!(spec.finger_size, None);
        assert_eq!(spec.material, "plywood");
        assert_eq!(spec.box_type, BoxType::Open);
    }
}
