//! # Fingerbox Joinery
//!
//! Geometry engine for finger-jointed boxes cut from sheet material.
//!
//! ## Pipeline
//!
//! - **Dimensions**: finger count, finger size and panel corners for one panel
//! - **Edges**: point runs for each side of a panel, teeth or slots
//! - **Outline**: the four edges joined into one closed ring
//! - **Extents / Sides**: which panels a box has, their sizes and joint pattern
//! - **Placement**: where each extruded panel sits in the assembled box
//! - **Assembly**: all of the above for every panel of a [`BoxSpec`]
//! - **Export**: flat outlines in caller units, laid out on a sheet
//!
//! All geometry is built in model units (caller units times
//! [`MODEL_SCALE`]), centered on the panel's own origin.

pub mod assembly;
pub mod dimensions;
pub mod edges;
pub mod export;
pub mod extents;
pub mod outline;
pub mod placement;
pub mod sides;
pub mod solid;
pub mod types;

pub use assembly::{assemble_box, BoxAssembler, BoxAssembly, Panel, PanelGeometry};
pub use dimensions::{
    calculate_finger_joint_dimensions, finger_count, JointDimensions, MAX_FINGERS_PER_EDGE,
    MODEL_SCALE,
};
pub use edges::{horizontal_edge_points, vertical_edge_points, HorizontalEdge, VerticalEdge};
pub use export::{front_outline, sheet_layout, ExportOutline, DEFAULT_SPACING};
pub use extents::{plan_panels, BoxExtents, PanelPlan};
pub use outline::{panel_outline, pattern_outline, rectangle_outline, Outline, CLOSURE_EPSILON};
pub use placement::{Axis, Placement, PlacementRule};
pub use sides::{
    edges_mate, EdgeKind, EdgeKinds, JointPattern, PanelEdge, PanelSide, SideRule, SHARED_EDGES,
};
pub use solid::{EdgeOverlay, PanelSolid};
pub use types::{push_unique_point, BoxSpec, BoxType, JointType, Point2D};

pub use fingerbox_core::{BoxError, BoxResult, MeasurementSystem};
