//! Connector geometry between rectangular nodes
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `boundary`: Where a center-to-center line leaves a node box
//! - `connector`: Endpoint routing, including parallel bidirectional pairs
//! - `arrowhead`: Arrowhead polygons and line shortening
//! - `path`: SVG path data output

pub mod arrowhead;
pub mod boundary;
pub mod connector;
pub mod defaults;
pub mod path;

pub use arrowhead::{ArrowConfig, Arrowhead, build_arrowhead};
pub use boundary::{raw_boundary_point, resolve_boundary_point, resolve_boundary_point_with};
pub use connector::{ConnectorConfig, ConnectorEnds, pair_normal, route_connector};
pub use path::{PathData, fmt_num};

use glam::DVec2;

/// Distance from `p` to the segment `a..b`.
pub fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Whether the open segments `a1..a2` and `b1..b2` properly cross.
pub fn segments_intersect(a1: DVec2, a2: DVec2, b1: DVec2, b2: DVec2) -> bool {
    let d1 = (a2 - a1).perp_dot(b1 - a1);
    let d2 = (a2 - a1).perp_dot(b2 - a1);
    let d3 = (b2 - b1).perp_dot(a1 - b1);
    let d4 = (b2 - b1).perp_dot(a2 - b1);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}
