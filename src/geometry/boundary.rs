//! Where a center-to-center connector crosses a node outline.
//!
//! The ray from the owner's center toward the other node's center leaves the
//! owner rectangle through one of its four sides. Which side is decided by
//! comparing the ray angle with the angle of the rectangle's diagonal: a ray
//! flatter than the diagonal exits left or right, a steeper one exits top or
//! bottom.

use std::f64::consts::PI;

use glam::{DVec2, dvec2};

use super::defaults;
use crate::types::Rect;

/// Point on `owner`'s outline facing `other`, pushed outward by the default
/// epsilon so arrowheads are not hidden under the node border.
pub fn resolve_boundary_point(owner: &Rect, other: &Rect) -> DVec2 {
    resolve_boundary_point_with(owner, other, defaults::BOUNDARY_EPSILON)
}

/// Like [`resolve_boundary_point`] with an explicit outward push.
///
/// When both centers coincide the direction is undefined and the raw
/// boundary point is returned unchanged.
pub fn resolve_boundary_point_with(owner: &Rect, other: &Rect, epsilon: f64) -> DVec2 {
    let raw = raw_boundary_point(owner, other);
    match (other.center() - owner.center()).try_normalize() {
        Some(unit) => raw + unit * epsilon,
        None => raw,
    }
}

/// Point where the ray from `owner`'s center toward `other`'s center crosses
/// `owner`'s outline, without any outward push.
pub fn raw_boundary_point(owner: &Rect, other: &Rect) -> DVec2 {
    let center = owner.center();
    let delta = other.center() - center;
    let angle = delta.y.atan2(delta.x);

    let half = owner.half_size();
    // Angle of the diagonal from the center to the bottom-right corner
    let slope = half.y.atan2(half.x);
    let abs_angle = angle.abs();

    if abs_angle <= slope || abs_angle > PI - slope {
        // Left or right side
        let x_offset = if angle.cos() > 0.0 { half.x } else { -half.x };
        dvec2(center.x + x_offset, center.y + x_offset * angle.tan())
    } else {
        // Top or bottom side; tan(angle) is far from zero here
        let y_offset = if angle.sin() > 0.0 { half.y } else { -half.y };
        dvec2(center.x + y_offset / angle.tan(), center.y + y_offset)
    }
}
