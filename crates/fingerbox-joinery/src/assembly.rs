//! Box assembler
//!
//! Builds every panel of a box from its spec: plans the panel, draws the
//! outline (finger or flat), extrudes it by the material thickness and
//! places it. The whole set is rebuilt on every call; nothing is cached.

use crate::dimensions::{calculate_finger_joint_dimensions, JointDimensions, MODEL_SCALE};
use crate::extents::{plan_panels, PanelPlan};
use crate::outline::{panel_outline, rectangle_outline, Outline};
use crate::placement::Placement;
use crate::sides::PanelSide;
use crate::solid::{EdgeOverlay, PanelSolid};
use crate::types::{BoxSpec, JointType};
use fingerbox_core::BoxResult;
use nalgebra::Point3;
use tracing::{debug, warn};

/// 2D shape of a panel before extrusion.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelGeometry {
    /// Interlocking outline with its joint layout
    Fingered {
        outline: Outline,
        dimensions: JointDimensions,
    },
    /// Plain rectangle, sizes in caller units
    Rectangle { width: f64, height: f64 },
}

impl PanelGeometry {
    pub fn is_fingered(&self) -> bool {
        matches!(self, PanelGeometry::Fingered { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub label: String,
    pub side: PanelSide,
    pub geometry: PanelGeometry,
    /// The outline actually extruded, model units
    pub outline: Outline,
    pub solid: PanelSolid,
    /// Extrusion depth, model units
    pub depth: f64,
    pub placement: Placement,
    pub material: String,
    pub edge_overlay: Option<EdgeOverlay>,
}

impl Panel {
    pub fn world_bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        self.solid.world_bounds(&self.placement)
    }
}

/// The panels of one box configuration.
#[derive(Debug, Clone)]
pub struct BoxAssembly {
    pub spec: BoxSpec,
    pub panels: Vec<Panel>,
}

impl BoxAssembly {
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    pub fn panel(&self, side: PanelSide) -> Option<&Panel> {
        self.panels.iter().find(|p| p.side == side)
    }

    /// Lookup used by picking: labels compare case-insensitively.
    pub fn panel_by_label(&self, label: &str) -> Option<&Panel> {
        self.panels
            .iter()
            .find(|p| p.label.eq_ignore_ascii_case(label))
    }

    /// Axis-aligned bounds of the whole shell.
    pub fn world_bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        self.panels
            .iter()
            .filter_map(Panel::world_bounds)
            .reduce(|(lo, hi), (a, b)| (lo.inf(&a), hi.sup(&b)))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BoxAssembler {
    edge_overlay: bool,
}

impl Default for BoxAssembler {
    fn default() -> Self {
        Self { edge_overlay: true }
    }
}

impl BoxAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether panels carry a wireframe overlay.
    pub fn with_edge_overlay(mut self, enabled: bool) -> Self {
        self.edge_overlay = enabled;
        self
    }

    pub fn assemble(&self, spec: &BoxSpec) -> BoxResult<BoxAssembly> {
        spec.validate()?;

        let panels = plan_panels(spec)
            .iter()
            .map(|plan| self.build_panel(spec, plan))
            .collect::<BoxResult<Vec<_>>>()?;

        debug!(
            panels = panels.len(),
            joint_type = ?spec.joint_type,
            box_type = ?spec.box_type,
            "assembled box"
        );

        Ok(BoxAssembly {
            spec: spec.clone(),
            panels,
        })
    }

    fn build_panel(&self, spec: &BoxSpec, plan: &PanelPlan) -> BoxResult<Panel> {
        let geometry = match spec.joint_type {
            JointType::Finger => finger_geometry(spec, plan)?,
            JointType::Flat => PanelGeometry::Rectangle {
                width: plan.width,
                height: plan.height,
            },
        };

        let outline = match &geometry {
            PanelGeometry::Fingered { outline, .. } => outline.clone(),
            PanelGeometry::Rectangle { width, height } => rectangle_outline(*width, *height),
        };

        let depth = spec.thickness * MODEL_SCALE;
        let solid = PanelSolid::extrude(&outline, depth);
        let edge_overlay = self.edge_overlay.then(|| EdgeOverlay::from_solid(&solid));

        debug!(
            side = %plan.side,
            width = plan.width,
            height = plan.height,
            vertices = outline.vertex_count(),
            "built panel"
        );

        Ok(Panel {
            label: plan.side.label().to_string(),
            side: plan.side,
            geometry,
            outline,
            solid,
            depth,
            placement: plan.placement,
            material: spec.material.clone(),
            edge_overlay,
        })
    }
}

/// Finger outline for one panel, degraded to its plain rectangle when the
/// outline is unusable.
fn finger_geometry(spec: &BoxSpec, plan: &PanelPlan) -> BoxResult<PanelGeometry> {
    let finger_size = spec.required_finger_size()?;
    let dimensions = calculate_finger_joint_dimensions(
        plan.finger_width,
        plan.height,
        spec.thickness,
        finger_size,
        plan.is_extended().then_some(plan.width),
    );

    let outline = panel_outline(&dimensions, &plan.edges);
    match outline.validate() {
        Ok(()) => Ok(PanelGeometry::Fingered {
            outline,
            dimensions,
        }),
        Err(err) => {
            warn!(side = %plan.side, error = %err, "falling back to a plain panel");
            Ok(PanelGeometry::Rectangle {
                width: plan.width,
                height: plan.height,
            })
        }
    }
}

/// Assemble with the default options.
pub fn assemble_box(spec: &BoxSpec) -> BoxResult<BoxAssembly> {
    BoxAssembler::new().assemble(spec)
}
