//! Flat outlines for exporters
//!
//! Converts panel outlines back to caller units and lays them out on a
//! sheet. Encoding them into a drawing file is left to the caller.

use crate::assembly::{BoxAssembly, Panel};
use crate::dimensions::MODEL_SCALE;
use crate::sides::PanelSide;
use crate::types::Point2D;
use fingerbox_core::MeasurementSystem;
use serde::{Deserialize, Serialize};

/// Default gap between parts on a sheet, caller units.
pub const DEFAULT_SPACING: f64 = 5.0;

/// One closed panel outline in caller units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOutline {
    pub label: String,
    pub units: MeasurementSystem,
    /// Closed ring, the first point repeated at the end
    pub points: Vec<Point2D>,
}

impl ExportOutline {
    /// The panel outline scaled to caller units, shifted so its lowest
    /// corner sits at the origin.
    pub fn from_panel(panel: &Panel, units: MeasurementSystem) -> Self {
        let mut points: Vec<Point2D> = panel
            .outline
            .points()
            .iter()
            .map(|p| Point2D::new(p.x / MODEL_SCALE, p.y / MODEL_SCALE))
            .collect();
        normalize(&mut points);

        Self {
            label: panel.label.clone(),
            units,
            points,
        }
    }

    pub fn width(&self) -> f64 {
        self.extent().0
    }

    pub fn height(&self) -> f64 {
        self.extent().1
    }

    fn extent(&self) -> (f64, f64) {
        let (min, max) = bounds(&self.points);
        (max.x - min.x, max.y - min.y)
    }

    /// Bounding rectangle of the outline as a closed ring.
    pub fn bounding_rectangle(&self) -> Vec<Point2D> {
        let (min, max) = bounds(&self.points);
        vec![
            Point2D::new(min.x, min.y),
            Point2D::new(max.x, min.y),
            Point2D::new(max.x, max.y),
            Point2D::new(min.x, max.y),
            Point2D::new(min.x, min.y),
        ]
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }
}

fn bounds(points: &[Point2D]) -> (Point2D, Point2D) {
    let mut min = Point2D::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point2D::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points.iter().filter(|p| p.is_finite()) {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    if min.x.is_finite() {
        (min, max)
    } else {
        (Point2D::new(0.0, 0.0), Point2D::new(0.0, 0.0))
    }
}

fn normalize(points: &mut [Point2D]) {
    let (min, _) = bounds(points);
    for p in points.iter_mut() {
        p.x -= min.x;
        p.y -= min.y;
    }
}

/// The front panel outline, the minimum every exporter needs.
pub fn front_outline(assembly: &BoxAssembly) -> Option<ExportOutline> {
    assembly
        .panel(PanelSide::Front)
        .map(|panel| ExportOutline::from_panel(panel, assembly.spec.units))
}

#[derive(Clone, Copy, Debug)]
struct LayoutCursor {
    x: f64,
    y: f64,
    row_height: f64,
    spacing: f64,
}

impl LayoutCursor {
    fn new(spacing: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            row_height: 0.0,
            spacing,
        }
    }

    fn place(&mut self, width: f64, height: f64) -> (f64, f64) {
        let position = (self.x, self.y);
        self.x += width + self.spacing;
        self.row_height = self.row_height.max(height);
        position
    }

    fn next_row(&mut self) {
        self.y += self.row_height + self.spacing;
        self.x = 0.0;
        self.row_height = 0.0;
    }
}

/// Every panel outline laid out flat for cutting.
///
/// Front and right share the first row; left, back, bottom and top follow
/// on the second. All coordinates end up non-negative.
pub fn sheet_layout(assembly: &BoxAssembly, spacing: f64) -> Vec<ExportOutline> {
    const ORDER: [PanelSide; 6] = [
        PanelSide::Front,
        PanelSide::Right,
        PanelSide::Left,
        PanelSide::Back,
        PanelSide::Top,
        PanelSide::Bottom,
    ];

    let spacing = if spacing.is_finite() && spacing >= 0.0 {
        spacing
    } else {
        DEFAULT_SPACING
    };

    let mut cursor = LayoutCursor::new(spacing);
    let mut sheet = Vec::with_capacity(assembly.len());

    for side in ORDER {
        let Some(panel) = assembly.panel(side) else {
            continue;
        };
        let mut outline = ExportOutline::from_panel(panel, assembly.spec.units);
        let (x, y) = cursor.place(outline.width(), outline.height());
        outline.translate(x, y);
        sheet.push(outline);

        if side == PanelSide::Right {
            cursor.next_row();
        }
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::assemble_box;
    use crate::types::{BoxSpec, JointType};

    fn overlaps(a: &ExportOutline, b: &ExportOutline) -> bool {
        let (a0, a1) = bounds(&a.points);
        let (b0, b1) = bounds(&b.points);
        a0.x < b1.x && b0.x < a1.x && a0.y < b1.y && b0.y < a1.y
    }

    #[test]
    fn test_front_outline_in_caller_units() {
        let spec = BoxSpec {
            joint_type: JointType::Flat,
            ..BoxSpec::default()
        };
        let assembly = assemble_box(&spec).unwrap();
        let front = front_outline(&assembly).unwrap();

        assert_eq!(front.label, "Front");
        assert!((front.width() - 100.0).abs() < 1e-9);
        assert!((front.height() - 80.0).abs() < 1e-9);
        assert_eq!(front.points.first(), front.points.last());
        assert_eq!(front.bounding_rectangle().len(), 5);
    }

    #[test]
    fn test_finger_front_includes_teeth() {
        let assembly = assemble_box(&BoxSpec::default()).unwrap();
        let front = front_outline(&assembly).unwrap();
        // teeth reach the outer box width
        assert!((front.width() - 100.0).abs() < 1e-9);
        assert!(front.points.iter().all(|p| p.x >= 0.0 && p.y >= 0.0));
    }

    #[test]
    fn test_sheet_layout_has_no_overlaps() {
        let assembly = assemble_box(&BoxSpec::default()).unwrap();
        let sheet = sheet_layout(&assembly, DEFAULT_SPACING);
        assert_eq!(sheet.len(), 6);

        for (i, a) in sheet.iter().enumerate() {
            assert!(a.points.iter().all(|p| p.x >= 0.0 && p.y >= 0.0));
            for b in &sheet[i + 1..] {
                assert!(!overlaps(a, b), "{} overlaps {}", a.label, b.label);
            }
        }

        let labels: Vec<_> = sheet.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Front", "Right", "Left", "Back", "Top", "Bottom"]);
    }
}
