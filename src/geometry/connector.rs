//! Connector endpoints between two node boxes.
//!
//! A single connector runs between the two boundary points. When a reverse
//! connector exists between the same pair, both are shifted sideways along the
//! normal of the center line so the two paths run parallel instead of on top
//! of each other. The normal flips with the direction of travel, so the pair
//! separates without any shared ordering state.

use glam::{DVec2, dvec2};

use super::boundary::resolve_boundary_point_with;
use super::defaults;
use crate::errors::ConfigError;
use crate::types::Rect;

/// Tunables for connector routing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorConfig {
    boundary_epsilon: f64,
    pair_offset: f64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            boundary_epsilon: defaults::BOUNDARY_EPSILON,
            pair_offset: defaults::PAIR_OFFSET,
        }
    }
}

impl ConnectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boundary_epsilon(mut self, epsilon: f64) -> Result<Self, ConfigError> {
        self.boundary_epsilon = ConfigError::non_negative("boundary epsilon", epsilon)?;
        Ok(self)
    }

    pub fn with_pair_offset(mut self, offset: f64) -> Result<Self, ConfigError> {
        self.pair_offset = ConfigError::non_negative("pair offset", offset)?;
        Ok(self)
    }

    pub fn boundary_epsilon(&self) -> f64 {
        self.boundary_epsilon
    }

    pub fn pair_offset(&self) -> f64 {
        self.pair_offset
    }
}

/// Start and end of a routed connector, before arrowhead shortening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorEnds {
    pub start: DVec2,
    pub end: DVec2,
}

impl ConnectorEnds {
    pub fn midpoint(&self) -> DVec2 {
        (self.start + self.end) * 0.5
    }

    /// Unit direction from start to end, `None` for a zero-length connector.
    pub fn direction(&self) -> Option<DVec2> {
        (self.end - self.start).try_normalize()
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Route a connector from `source` to `target`.
///
/// With `bidirectional` set, both endpoints move by the configured offset along
/// the left-hand normal of the source-to-target center line and are then
/// clamped back into their own boxes.
///
/// The two connectors of a pair end up exactly `2 * pair_offset` apart only
/// when the boxes are level or stacked. On a diagonal the clamp pulls the
/// shifted points back toward the corners, so the gap shrinks but never
/// exceeds `2 * pair_offset`.
pub fn route_connector(
    source: &Rect,
    target: &Rect,
    bidirectional: bool,
    config: &ConnectorConfig,
) -> ConnectorEnds {
    let start = resolve_boundary_point_with(source, target, config.boundary_epsilon);
    let end = resolve_boundary_point_with(target, source, config.boundary_epsilon);

    if !bidirectional {
        return ConnectorEnds { start, end };
    }

    let shift = pair_normal(source.center(), target.center()) * config.pair_offset;
    let routed = ConnectorEnds {
        start: source.clamp_point(start + shift),
        end: target.clamp_point(end + shift),
    };

    crate::log::trace!(
        shift_x = shift.x,
        shift_y = shift.y,
        start_x = routed.start.x,
        start_y = routed.start.y,
        end_x = routed.end.x,
        end_y = routed.end.y,
        "routed bidirectional connector"
    );

    routed
}

/// Unit normal `(-dy, dx) / len` of the line `from -> to`; zero when the points coincide.
pub fn pair_normal(from: DVec2, to: DVec2) -> DVec2 {
    match (to - from).try_normalize() {
        Some(unit) => dvec2(-unit.y, unit.x),
        None => DVec2::ZERO,
    }
}
