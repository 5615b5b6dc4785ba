//! Filled triangular arrowheads at the end of a connector.

use glam::{DVec2, dvec2};

use super::defaults;
use super::path::PathData;
use crate::errors::ConfigError;

/// Arrowhead proportions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowConfig {
    length: f64,
    width: f64,
    overlap: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            length: defaults::ARROW_LENGTH,
            width: defaults::ARROW_WIDTH,
            overlap: defaults::ARROW_OVERLAP,
        }
    }
}

impl ArrowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance from the tip to the base along the line.
    pub fn with_length(mut self, length: f64) -> Result<Self, ConfigError> {
        self.length = ConfigError::positive("arrow length", length)?;
        self.check_overlap()
    }

    /// Distance from the line to each base corner (half the base).
    pub fn with_width(mut self, width: f64) -> Result<Self, ConfigError> {
        self.width = ConfigError::positive("arrow width", width)?;
        Ok(self)
    }

    /// How far past the base the shortened line still reaches under the head.
    pub fn with_overlap(mut self, overlap: f64) -> Result<Self, ConfigError> {
        self.overlap = ConfigError::non_negative("arrow overlap", overlap)?;
        self.check_overlap()
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn overlap(&self) -> f64 {
        self.overlap
    }

    fn check_overlap(self) -> Result<Self, ConfigError> {
        if self.overlap >= self.length {
            return Err(ConfigError::ArrowTooShort {
                length: self.length,
                overlap: self.overlap,
            });
        }
        Ok(self)
    }
}

/// Arrowhead polygon plus the point where the visible line should stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrowhead {
    /// Apex first, then the two base corners.
    pub triangle: [DVec2; 3],
    pub shortened_end: DVec2,
}

impl Arrowhead {
    pub fn apex(&self) -> DVec2 {
        self.triangle[0]
    }

    pub fn base_midpoint(&self) -> DVec2 {
        (self.triangle[1] + self.triangle[2]) * 0.5
    }

    /// `M apex L base L base Z`
    pub fn svg_path(&self) -> PathData {
        let [apex, left, right] = self.triangle;
        PathData::new().move_to(apex).line_to(left).line_to(right).close()
    }
}

/// Build the arrowhead for the segment `start -> end`, tip at `end`.
///
/// A zero-length segment points along +x (`atan2(0, 0) == 0`).
pub fn build_arrowhead(start: DVec2, end: DVec2, config: &ArrowConfig) -> Arrowhead {
    let angle = (end.y - start.y).atan2(end.x - start.x);
    let (sin, cos) = angle.sin_cos();
    let along = dvec2(cos, sin);
    let across = dvec2(sin, -cos);

    let base = end - along * config.length;
    Arrowhead {
        triangle: [end, base + across * config.width, base - across * config.width],
        shortened_end: end - along * (config.length - config.overlap),
    }
}
