//! Plain records exchanged with the host application.
//!
//! Nodes are axis-aligned rectangles in screen space (y grows downward).
//! Edges reference nodes by id; nothing here owns diagram state.

use std::fmt;
use std::sync::Arc;

use glam::{DVec2, dvec2};

use crate::geometry::defaults;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(id: impl AsRef<str>) -> Self {
                Self(Arc::from(id.as_ref()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(Arc::from(id))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a diagram node.
    NodeId
);

string_id!(
    /// Identifier of a directed edge.
    EdgeId
);

/// Axis-aligned node footprint: top-left corner plus positive size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rect without validation (const-friendly).
    /// Use `try_new` for values coming from the host.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rect, rejecting non-finite coordinates and non-positive sizes.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Rect {
            x: check_finite(x)?,
            y: check_finite(y)?,
            width: check_positive(width)?,
            height: check_positive(height)?,
        })
    }

    /// Create a rect from a position and a size the renderer may not have
    /// measured yet. Missing, zero, negative or non-finite dimensions fall
    /// back to the default node size.
    pub fn measured(x: f64, y: f64, width: Option<f64>, height: Option<f64>) -> Self {
        let width = width
            .and_then(|w| check_positive(w).ok())
            .unwrap_or(defaults::NODE_WIDTH);
        let height = height
            .and_then(|h| check_positive(h).ok())
            .unwrap_or(defaults::NODE_HEIGHT);
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// A default-sized rect at the given top-left corner.
    pub const fn at(x: f64, y: f64) -> Self {
        Rect::new(x, y, defaults::NODE_WIDTH, defaults::NODE_HEIGHT)
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        dvec2(self.width, self.height)
    }

    #[inline]
    pub fn half_size(&self) -> DVec2 {
        self.size() * 0.5
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.origin() + self.half_size()
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Same size, new top-left corner.
    pub fn moved_to(&self, origin: DVec2) -> Self {
        Rect {
            x: origin.x,
            y: origin.y,
            ..*self
        }
    }

    /// Whether `p` lies inside or on the outline.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Clamp `p` component-wise into the rect.
    pub fn clamp_point(&self, p: DVec2) -> DVec2 {
        dvec2(p.x.clamp(self.x, self.right()), p.y.clamp(self.y, self.bottom()))
    }

    /// Smallest rect covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

impl Default for Rect {
    fn default() -> Self {
        Rect::at(0.0, 0.0)
    }
}

/// A diagram node as seen by the geometry core.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub rect: Rect,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, rect: Rect) -> Self {
        Node {
            id: id.into(),
            rect,
        }
    }
}

/// A directed connector between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub label: Option<String>,
}

impl Edge {
    pub fn new(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// `other` runs the opposite way between the same two nodes.
    pub fn is_reverse_of(&self, other: &Edge) -> bool {
        other.source == self.target && other.target == self.source && other.id != self.id
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Rect tests ====================

    #[test]
    fn rect_try_new_valid() {
        assert!(Rect::try_new(0.0, 0.0, 85.0, 100.0).is_ok());
        assert!(Rect::try_new(-10.0, -20.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn rect_try_new_rejects_bad_size() {
        assert_eq!(Rect::try_new(0.0, 0.0, 0.0, 10.0), Err(NumericError::Zero));
        assert_eq!(Rect::try_new(0.0, 0.0, 10.0, -1.0), Err(NumericError::Negative));
        assert_eq!(Rect::try_new(0.0, 0.0, f64::NAN, 1.0), Err(NumericError::NaN));
    }

    #[test]
    fn rect_try_new_rejects_non_finite_position() {
        assert_eq!(Rect::try_new(f64::INFINITY, 0.0, 1.0, 1.0), Err(NumericError::Infinite));
        assert_eq!(Rect::try_new(0.0, f64::NAN, 1.0, 1.0), Err(NumericError::NaN));
    }

    #[test]
    fn rect_measured_falls_back_to_default_size() {
        let r = Rect::measured(5.0, 6.0, None, Some(0.0));
        assert_eq!(r, Rect::new(5.0, 6.0, defaults::NODE_WIDTH, defaults::NODE_HEIGHT));

        let r = Rect::measured(0.0, 0.0, Some(120.0), Some(40.0));
        assert_eq!(r.size(), dvec2(120.0, 40.0));
    }

    #[test]
    fn rect_center_and_edges() {
        let r = Rect::new(10.0, 20.0, 80.0, 40.0);
        assert_eq!(r.center(), dvec2(50.0, 40.0));
        assert_eq!(r.right(), 90.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn rect_clamp_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(r.clamp_point(dvec2(-5.0, 5.0)), dvec2(0.0, 5.0));
        assert_eq!(r.clamp_point(dvec2(15.0, 12.0)), dvec2(10.0, 10.0));
        assert_eq!(r.clamp_point(dvec2(3.0, 4.0)), dvec2(3.0, 4.0));
    }

    #[test]
    fn rect_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, -5.0, 5.0, 5.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 25.0, 15.0));
    }

    // ==================== Edge tests ====================

    #[test]
    fn edge_reverse_detection() {
        let ab = Edge::new("e1", "a", "b");
        let ba = Edge::new("e2", "b", "a");
        let ab2 = Edge::new("e3", "a", "b");
        assert!(ab.is_reverse_of(&ba));
        assert!(ba.is_reverse_of(&ab));
        assert!(!ab.is_reverse_of(&ab2));
        assert!(!ab.is_reverse_of(&ab));
    }

    #[test]
    fn self_loop_is_reverse_of_other_self_loop_only() {
        let aa = Edge::new("e1", "a", "a");
        let aa2 = Edge::new("e2", "a", "a");
        assert!(aa.is_self_loop());
        assert!(aa.is_reverse_of(&aa2));
        assert!(!aa.is_reverse_of(&aa));
    }

    #[test]
    fn ids_compare_by_content() {
        assert_eq!(NodeId::from("a"), NodeId::new(String::from("a")));
        assert_eq!(NodeId::from("a").to_string(), "a");
    }
}
