//! Box extents and per-panel plans
//!
//! [`BoxExtents`] is computed once per box. Every [`PanelPlan`] derives both
//! its nominal size (fed to the outline code) and its placement from that
//! one value, so the two cannot drift apart.

use crate::placement::{Axis, Placement};
use crate::sides::{EdgeKind, EdgeKinds, PanelSide};
use crate::types::{BoxSpec, BoxType, JointType};
use serde::{Deserialize, Serialize};

/// Outer box size in caller units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxExtents {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub thickness: f64,
    /// Extra wall height added around an open top
    pub wall_extra: f64,
}

impl BoxExtents {
    pub fn from_spec(spec: &BoxSpec) -> Self {
        Self {
            width: spec.width,
            height: spec.height,
            depth: spec.depth,
            thickness: spec.thickness,
            wall_extra: match spec.box_type {
                BoxType::Closed => 0.0,
                BoxType::Open => spec.thickness,
            },
        }
    }

    /// Full outer extent along a world axis (x width, y height, z depth).
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
            Axis::Z => self.depth,
        }
    }

    pub fn wall_height(&self) -> f64 {
        self.height + self.wall_extra
    }

    pub fn inner_width(&self) -> f64 {
        self.width - 2.0 * self.thickness
    }

    pub fn inner_depth(&self) -> f64 {
        self.depth - 2.0 * self.thickness
    }
}

/// Everything needed to build one panel, in caller units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlan {
    pub side: PanelSide,
    /// Nominal panel width (the solid body, teeth excluded)
    pub width: f64,
    pub height: f64,
    /// Width of the finger-bearing span on the horizontal edges
    pub finger_width: f64,
    pub edges: EdgeKinds,
    pub placement: Placement,
}

impl PanelPlan {
    /// Plan a finger-jointed panel.
    pub fn finger(side: PanelSide, extents: &BoxExtents) -> Self {
        let rule = side.rule();
        let (width, height, finger_width) = match side {
            PanelSide::Front | PanelSide::Back => {
                let w = extents.inner_width();
                (w, extents.wall_height(), w)
            }
            PanelSide::Left | PanelSide::Right => (
                extents.depth,
                extents.wall_height(),
                extents.inner_depth(),
            ),
            PanelSide::Bottom | PanelSide::Top => {
                let w = extents.inner_width();
                (w, extents.inner_depth(), w)
            }
        };

        let mut edges = EdgeKinds::from(rule.pattern);
        if side.is_wall() && extents.wall_extra > 0.0 {
            edges.top = EdgeKind::Plain;
        }

        Self {
            side,
            width,
            height,
            finger_width,
            edges,
            placement: rule.placement.place(extents, Self::lift(side, extents)),
        }
    }

    /// Plan a butt-jointed panel: walls and floor meet flush, no teeth.
    pub fn flat(side: PanelSide, extents: &BoxExtents) -> Self {
        let (width, height) = match side {
            PanelSide::Front | PanelSide::Back => (extents.width, extents.wall_height()),
            PanelSide::Left | PanelSide::Right => (extents.inner_depth(), extents.wall_height()),
            PanelSide::Bottom | PanelSide::Top => (extents.inner_width(), extents.inner_depth()),
        };

        Self {
            side,
            width,
            height,
            finger_width: width,
            edges: EdgeKinds {
                top: EdgeKind::Plain,
                right: EdgeKind::Plain,
                bottom: EdgeKind::Plain,
                left: EdgeKind::Plain,
            },
            placement: side
                .rule()
                .placement
                .place(extents, Self::lift(side, extents)),
        }
    }

    /// Walls of an open box grow upward only, the floor stays put.
    fn lift(side: PanelSide, extents: &BoxExtents) -> f64 {
        if side.is_wall() {
            extents.wall_extra / 2.0
        } else {
            0.0
        }
    }

    pub fn is_extended(&self) -> bool {
        self.width > self.finger_width
    }
}

/// Plans for every panel the box needs, in [`PanelSide::ALL`] order.
pub fn plan_panels(spec: &BoxSpec) -> Vec<PanelPlan> {
    let extents = BoxExtents::from_spec(spec);
    PanelSide::ALL
        .into_iter()
        .filter(|side| *side != PanelSide::Top || spec.box_type.has_top())
        .map(|side| match spec.joint_type {
            JointType::Finger => PanelPlan::finger(side, &extents),
            JointType::Flat => PanelPlan::flat(side, &extents),
        })
        .collect()
}
