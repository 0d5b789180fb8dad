//! Panel identities and their fixed joint table
//!
//! Every panel side maps to one [`SideRule`]: which edges carry teeth, which
//! carry slots, whether the horizontal edges are extended, and how the panel
//! is mounted in the assembled box. Matching on the enum keeps the table
//! exhaustive.
//!
//! Mating layout (teeth `T`, slots `S`):
//!
//! | side        | top | right | bottom | left | horizontal edges |
//! |-------------|-----|-------|--------|------|------------------|
//! | front/back  | S   | T     | S      | T    | plain span       |
//! | left/right  | S   | S     | S      | S    | extended         |
//! | bottom/top  | T   | T     | T      | T    | plain span       |

use crate::placement::{Axis, PlacementRule};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelSide {
    Front,
    Back,
    Left,
    Right,
    Bottom,
    Top,
}

impl PanelSide {
    pub const ALL: [PanelSide; 6] = [
        PanelSide::Front,
        PanelSide::Back,
        PanelSide::Left,
        PanelSide::Right,
        PanelSide::Bottom,
        PanelSide::Top,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PanelSide::Front => "Front",
            PanelSide::Back => "Back",
            PanelSide::Left => "Left",
            PanelSide::Right => "Right",
            PanelSide::Bottom => "Bottom",
            PanelSide::Top => "Top",
        }
    }

    /// Front, back, left and right.
    pub fn is_wall(self) -> bool {
        !matches!(self, PanelSide::Bottom | PanelSide::Top)
    }

    pub fn joint_pattern(self) -> JointPattern {
        self.rule().pattern
    }

    pub fn rule(self) -> SideRule {
        match self {
            PanelSide::Front => SideRule {
                pattern: JointPattern::SIDE_TEETH,
                extended: false,
                placement: PlacementRule::new(Axis::Z, 1.0, Axis::Y, 0.0),
            },
            PanelSide::Back => SideRule {
                pattern: JointPattern::SIDE_TEETH,
                extended: false,
                placement: PlacementRule::new(Axis::Z, -1.0, Axis::Y, PI),
            },
            PanelSide::Right => SideRule {
                pattern: JointPattern::ALL_SLOTS,
                extended: true,
                placement: PlacementRule::new(Axis::X, 1.0, Axis::Y, FRAC_PI_2),
            },
            PanelSide::Left => SideRule {
                pattern: JointPattern::ALL_SLOTS,
                extended: true,
                placement: PlacementRule::new(Axis::X, -1.0, Axis::Y, -FRAC_PI_2),
            },
            PanelSide::Bottom => SideRule {
                pattern: JointPattern::ALL_TEETH,
                extended: false,
                placement: PlacementRule::new(Axis::Y, -1.0, Axis::X, FRAC_PI_2),
            },
            PanelSide::Top => SideRule {
                pattern: JointPattern::ALL_TEETH,
                extended: false,
                placement: PlacementRule::new(Axis::Y, 1.0, Axis::X, -FRAC_PI_2),
            },
        }
    }
}

impl fmt::Display for PanelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed per-side data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideRule {
    pub pattern: JointPattern,
    /// Horizontal edges carry a centered finger region narrower than the panel
    pub extended: bool,
    pub placement: PlacementRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelEdge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Per-edge polarity: `true` for outward teeth, `false` for inward slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointPattern {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl JointPattern {
    pub const SIDE_TEETH: JointPattern = JointPattern {
        top: false,
        right: true,
        bottom: false,
        left: true,
    };

    pub const ALL_SLOTS: JointPattern = JointPattern {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    pub const ALL_TEETH: JointPattern = JointPattern {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    pub fn has_fingers(&self, edge: PanelEdge) -> bool {
        match edge {
            PanelEdge::Top => self.top,
            PanelEdge::Right => self.right,
            PanelEdge::Bottom => self.bottom,
            PanelEdge::Left => self.left,
        }
    }
}

/// What an edge looks like once the box topology is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeKind {
    Teeth,
    Slots,
    /// Straight edge with no mating panel
    Plain,
}

impl From<bool> for EdgeKind {
    fn from(has_fingers: bool) -> Self {
        if has_fingers {
            EdgeKind::Teeth
        } else {
            EdgeKind::Slots
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeKinds {
    pub top: EdgeKind,
    pub right: EdgeKind,
    pub bottom: EdgeKind,
    pub left: EdgeKind,
}

impl From<JointPattern> for EdgeKinds {
    fn from(pattern: JointPattern) -> Self {
        Self {
            top: pattern.top.into(),
            right: pattern.right.into(),
            bottom: pattern.bottom.into(),
            left: pattern.left.into(),
        }
    }
}

/// Every physical edge of a closed box, as the two local edges that meet
/// there.
pub const SHARED_EDGES: [((PanelSide, PanelEdge), (PanelSide, PanelEdge)); 12] = [
    ((PanelSide::Front, PanelEdge::Right), (PanelSide::Right, PanelEdge::Left)),
    ((PanelSide::Front, PanelEdge::Left), (PanelSide::Left, PanelEdge::Right)),
    ((PanelSide::Back, PanelEdge::Right), (PanelSide::Left, PanelEdge::Left)),
    ((PanelSide::Back, PanelEdge::Left), (PanelSide::Right, PanelEdge::Right)),
    ((PanelSide::Front, PanelEdge::Top), (PanelSide::Top, PanelEdge::Bottom)),
    ((PanelSide::Front, PanelEdge::Bottom), (PanelSide::Bottom, PanelEdge::Top)),
    ((PanelSide::Back, PanelEdge::Top), (PanelSide::Top, PanelEdge::Top)),
    ((PanelSide::Back, PanelEdge::Bottom), (PanelSide::Bottom, PanelEdge::Bottom)),
    ((PanelSide::Right, PanelEdge::Top), (PanelSide::Top, PanelEdge::Right)),
    ((PanelSide::Right, PanelEdge::Bottom), (PanelSide::Bottom, PanelEdge::Right)),
    ((PanelSide::Left, PanelEdge::Top), (PanelSide::Top, PanelEdge::Left)),
    ((PanelSide::Left, PanelEdge::Bottom), (PanelSide::Bottom, PanelEdge::Left)),
];

/// True when the two local edges interlock: one side teeth, the other slots.
pub fn edges_mate(a: (PanelSide, PanelEdge), b: (PanelSide, PanelEdge)) -> bool {
    a.0.joint_pattern().has_fingers(a.1) != b.0.joint_pattern().has_fingers(b.1)
}
