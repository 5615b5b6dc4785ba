//! Default sizes and settings (all in screen units)

/// Fallback node width when the renderer has not measured the node yet.
pub const NODE_WIDTH: f64 = 85.0;
/// Fallback node height when the renderer has not measured the node yet.
pub const NODE_HEIGHT: f64 = 100.0;

/// Outward push applied to boundary points so arrows clear rounded corners and shadows.
pub const BOUNDARY_EPSILON: f64 = 4.0;
/// Sideways displacement of each connector in a bidirectional pair.
pub const PAIR_OFFSET: f64 = 18.0;

pub const ARROW_LENGTH: f64 = 14.0;
/// Half of the arrowhead base.
pub const ARROW_WIDTH: f64 = 7.0;
/// How far the line runs past the arrowhead base toward the tip.
pub const ARROW_OVERLAP: f64 = 2.0;

/// Labels of single connectors sit this far above the line midpoint.
pub const LABEL_LIFT: f64 = 10.0;
/// Width of the invisible stroke used for picking connectors.
pub const HIT_WIDTH: f64 = 30.0;

pub const LAYOUT_NODE_WIDTH: f64 = 100.0;
pub const LAYOUT_NODE_HEIGHT: f64 = 80.0;
/// Gap between neighbouring nodes inside a rank.
pub const NODE_SPACING: f64 = 30.0;
/// Gap between consecutive ranks.
pub const RANK_SPACING: f64 = 80.0;
/// Barycenter sweeps run by the crossing reduction.
pub const ORDERING_PASSES: usize = 8;
