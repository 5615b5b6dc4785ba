//! Geometry and layout core for node-and-connector relationship diagrams.
//!
//! - [`geometry`]: boundary points on node boxes, parallel routing of
//!   bidirectional pairs, arrowheads
//! - [`layout`]: layered auto-arrange
//! - [`scene`]: per-render connector geometry for a whole diagram
//!
//! Everything is a pure function of its arguments. Inputs are borrowed
//! snapshots; results are new values the host merges into its own state.
//!
//! ```
//! use relgraph::{Edge, LayoutConfig, Node, Rect, SceneConfig, build_scene, compute_layout};
//!
//! let nodes = vec![Node::new("a", Rect::at(0.0, 0.0)), Node::new("b", Rect::at(0.0, 0.0))];
//! let edges = vec![Edge::new("e1", "a", "b"), Edge::new("e2", "b", "a")];
//!
//! let layout = compute_layout(&nodes, &edges, &LayoutConfig::default());
//! let nodes = layout.apply(&nodes);
//!
//! let scene = build_scene(&nodes, &edges, &SceneConfig::default());
//! assert_eq!(scene.edges.len(), 2);
//! assert!(scene.edges.iter().all(|edge| edge.bidirectional));
//! ```

pub mod errors;
pub mod geometry;
pub mod layout;
mod log;
pub mod scene;
pub mod types;

pub use errors::ConfigError;
pub use geometry::{
    ArrowConfig, Arrowhead, ConnectorConfig, ConnectorEnds, build_arrowhead, resolve_boundary_point,
    route_connector,
};
pub use layout::{Layout, LayoutConfig, Placement, RankDirection, compute_layout};
pub use scene::{BidirectionalIndex, EdgeGeometry, Scene, SceneConfig, build_scene, edge_geometry};
pub use types::{Edge, EdgeId, Node, NodeId, NumericError, Rect};

pub use glam::{DVec2, dvec2};
