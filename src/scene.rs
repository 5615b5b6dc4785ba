//! Per-render edge geometry for a whole diagram.
//!
//! The host calls [`build_scene`] (or [`edge_geometry`] per edge) whenever node
//! positions or the edge set change. Bidirectional pairs are looked up in a
//! [`BidirectionalIndex`] that can be kept across renders while the edge set
//! stays the same.

use std::collections::HashMap;

use glam::{DVec2, dvec2};

use crate::errors::ConfigError;
use crate::geometry::{
    self, ArrowConfig, Arrowhead, ConnectorConfig, ConnectorEnds, PathData, build_arrowhead,
    defaults, route_connector,
};
use crate::types::{Edge, EdgeId, Node, NodeId, Rect};

/// Everything needed to route and decorate connectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    pub connector: ConnectorConfig,
    pub arrow: ArrowConfig,
    label_lift: f64,
    hit_width: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            connector: ConnectorConfig::default(),
            arrow: ArrowConfig::default(),
            label_lift: defaults::LABEL_LIFT,
            hit_width: defaults::HIT_WIDTH,
        }
    }
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connector(mut self, connector: ConnectorConfig) -> Self {
        self.connector = connector;
        self
    }

    pub fn with_arrow(mut self, arrow: ArrowConfig) -> Self {
        self.arrow = arrow;
        self
    }

    /// How far labels of single connectors are raised above the line.
    pub fn with_label_lift(mut self, lift: f64) -> Result<Self, ConfigError> {
        self.label_lift = ConfigError::non_negative("label lift", lift)?;
        Ok(self)
    }

    /// Width of the band around a connector that counts as a hit.
    pub fn with_hit_width(mut self, width: f64) -> Result<Self, ConfigError> {
        self.hit_width = ConfigError::positive("hit width", width)?;
        Ok(self)
    }

    pub fn label_lift(&self) -> f64 {
        self.label_lift
    }

    pub fn hit_width(&self) -> f64 {
        self.hit_width
    }
}

/// Directed node pair -> edges running that way.
#[derive(Clone, Debug, Default)]
pub struct BidirectionalIndex {
    by_pair: HashMap<(NodeId, NodeId), Vec<EdgeId>>,
}

impl BidirectionalIndex {
    pub fn new(edges: &[Edge]) -> Self {
        let mut by_pair: HashMap<(NodeId, NodeId), Vec<EdgeId>> = HashMap::new();
        for edge in edges {
            by_pair
                .entry((edge.source.clone(), edge.target.clone()))
                .or_default()
                .push(edge.id.clone());
        }
        Self { by_pair }
    }

    /// Another edge runs from `edge.target` back to `edge.source`.
    pub fn is_bidirectional(&self, edge: &Edge) -> bool {
        self.by_pair
            .get(&(edge.target.clone(), edge.source.clone()))
            .is_some_and(|ids| ids.iter().any(|id| *id != edge.id))
    }
}

/// Render-ready geometry of one connector.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeGeometry {
    pub id: EdgeId,
    /// Routed endpoints; `ends.end` is the arrow tip.
    pub ends: ConnectorEnds,
    pub arrowhead: Arrowhead,
    pub label_anchor: DVec2,
    pub bidirectional: bool,
    hit_width: f64,
}

impl EdgeGeometry {
    /// Start of the visible line.
    pub fn line_start(&self) -> DVec2 {
        self.ends.start
    }

    /// End of the visible line, tucked under the arrowhead base.
    pub fn line_end(&self) -> DVec2 {
        self.arrowhead.shortened_end
    }

    /// `M start L end` for the visible line.
    pub fn line_path(&self) -> PathData {
        PathData::new().move_to(self.line_start()).line_to(self.line_end())
    }

    pub fn arrow_path(&self) -> PathData {
        self.arrowhead.svg_path()
    }

    /// Whether `point` falls within the pick band around the line.
    pub fn hit_test(&self, point: DVec2) -> bool {
        let distance = geometry::distance_to_segment(point, self.line_start(), self.line_end());
        distance <= self.hit_width / 2.0
    }
}

/// Geometry for one connector whose endpoint boxes are already resolved.
pub fn edge_geometry(
    id: EdgeId,
    source: &Rect,
    target: &Rect,
    bidirectional: bool,
    config: &SceneConfig,
) -> EdgeGeometry {
    let ends = route_connector(source, target, bidirectional, &config.connector);
    let arrowhead = build_arrowhead(ends.start, ends.end, &config.arrow);

    let mid = (ends.start + arrowhead.shortened_end) * 0.5;
    // Paired connectors sit close together, so their labels stay on the line
    let lift = if bidirectional { 0.0 } else { config.label_lift() };

    EdgeGeometry {
        id,
        ends,
        arrowhead,
        label_anchor: mid - dvec2(0.0, lift),
        bidirectional,
        hit_width: config.hit_width(),
    }
}

/// Connector geometry for a whole diagram.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// In edge input order, dangling edges omitted.
    pub edges: Vec<EdgeGeometry>,
    /// Edges whose source or target id matched no node.
    pub skipped: Vec<EdgeId>,
}

impl Scene {
    pub fn edge(&self, id: &EdgeId) -> Option<&EdgeGeometry> {
        self.edges.iter().find(|geometry| geometry.id == *id)
    }

    /// Topmost connector under `point`; later edges are drawn above earlier ones.
    pub fn pick(&self, point: DVec2) -> Option<&EdgeGeometry> {
        self.edges.iter().rev().find(|geometry| geometry.hit_test(point))
    }
}

/// Route every edge of the diagram.
pub fn build_scene(nodes: &[Node], edges: &[Edge], config: &SceneConfig) -> Scene {
    build_scene_with_index(nodes, edges, &BidirectionalIndex::new(edges), config)
}

/// Like [`build_scene`], reusing an index built for the same `edges`.
pub fn build_scene_with_index(
    nodes: &[Node],
    edges: &[Edge],
    index: &BidirectionalIndex,
    config: &SceneConfig,
) -> Scene {
    let mut rects: HashMap<&NodeId, &Rect> = HashMap::with_capacity(nodes.len());
    for node in nodes {
        rects.entry(&node.id).or_insert(&node.rect);
    }

    let mut scene = Scene::default();
    for edge in edges {
        let (Some(source), Some(target)) = (rects.get(&edge.source), rects.get(&edge.target)) else {
            crate::log::warn!(
                edge = %edge.id,
                source = %edge.source,
                target = %edge.target,
                "edge references unknown node, not drawn"
            );
            scene.skipped.push(edge.id.clone());
            continue;
        };
        scene.edges.push(edge_geometry(
            edge.id.clone(),
            source,
            target,
            index.is_bidirectional(edge),
            config,
        ));
    }
    scene
}

/// Union of all node boxes, for fitting the view.
pub fn bounds(nodes: &[Node]) -> Option<Rect> {
    nodes
        .iter()
        .map(|node| node.rect)
        .reduce(|acc, rect| acc.union(&rect))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn diagram() -> Vec<Node> {
        vec![
            Node::new("a", Rect::new(0.0, 0.0, 85.0, 100.0)),
            Node::new("b", Rect::new(200.0, 0.0, 85.0, 100.0)),
        ]
    }

    #[test]
    fn index_matches_pair_rule() {
        let edges = [
            Edge::new("e1", "a", "b"),
            Edge::new("e2", "b", "a"),
            Edge::new("e3", "a", "c"),
        ];
        let index = BidirectionalIndex::new(&edges);
        assert!(index.is_bidirectional(&edges[0]));
        assert!(index.is_bidirectional(&edges[1]));
        assert!(!index.is_bidirectional(&edges[2]));

        // Brute-force rule agrees
        for edge in &edges {
            let brute = edges.iter().any(|other| edge.is_reverse_of(other));
            assert_eq!(index.is_bidirectional(edge), brute);
        }
    }

    #[test]
    fn self_loop_needs_a_second_loop_to_pair() {
        let single = [Edge::new("l1", "a", "a")];
        assert!(!BidirectionalIndex::new(&single).is_bidirectional(&single[0]));

        let double = [Edge::new("l1", "a", "a"), Edge::new("l2", "a", "a")];
        assert!(BidirectionalIndex::new(&double).is_bidirectional(&double[0]));
    }

    #[test]
    fn single_edge_scene() {
        let scene = build_scene(&diagram(), &[Edge::new("e1", "a", "b")], &SceneConfig::default());
        assert_eq!(scene.edges.len(), 1);
        let geometry = &scene.edges[0];
        assert!(!geometry.bidirectional);
        assert!(geometry.line_start().abs_diff_eq(dvec2(89.0, 50.0), TOL));
        assert!(geometry.arrowhead.apex().abs_diff_eq(dvec2(196.0, 50.0), TOL));
        assert!(geometry.line_end().abs_diff_eq(dvec2(184.0, 50.0), TOL));
        // Midpoint of the visible line, raised by the label lift
        assert!(geometry.label_anchor.abs_diff_eq(dvec2(136.5, 40.0), TOL));
        assert_eq!(geometry.line_path().as_str(), "M 89 50 L 184 50");
        assert_eq!(geometry.arrow_path().as_str(), "M 196 50 L 182 43 L 182 57 Z");
    }

    #[test]
    fn bidirectional_labels_stay_on_the_line() {
        let edges = [Edge::new("e1", "a", "b"), Edge::new("e2", "b", "a")];
        let scene = build_scene(&diagram(), &edges, &SceneConfig::default());
        let ab = &scene.edges[0];
        let ba = &scene.edges[1];
        assert!(ab.bidirectional && ba.bidirectional);
        assert!((ab.label_anchor.y - 68.0).abs() < TOL);
        assert!((ba.label_anchor.y - 32.0).abs() < TOL);
        assert!(!geometry::segments_intersect(
            ab.line_start(),
            ab.line_end(),
            ba.line_start(),
            ba.line_end()
        ));
    }

    #[test]
    fn dangling_edges_are_skipped() {
        let edges = [Edge::new("ok", "a", "b"), Edge::new("dangling", "a", "ghost")];
        let scene = build_scene(&diagram(), &edges, &SceneConfig::default());
        assert_eq!(scene.edges.len(), 1);
        assert_eq!(scene.skipped, vec![EdgeId::from("dangling")]);
        assert!(scene.edge(&EdgeId::from("ok")).is_some());
    }

    #[test]
    fn pick_uses_the_hit_band() {
        let scene = build_scene(&diagram(), &[Edge::new("e1", "a", "b")], &SceneConfig::default());
        assert!(scene.pick(dvec2(140.0, 50.0)).is_some());
        assert!(scene.pick(dvec2(140.0, 64.0)).is_some());
        assert!(scene.pick(dvec2(140.0, 66.0)).is_none());

        let narrow = SceneConfig::new().with_hit_width(4.0).unwrap();
        let scene = build_scene(&diagram(), &[Edge::new("e1", "a", "b")], &narrow);
        assert!(scene.pick(dvec2(140.0, 64.0)).is_none());
    }

    #[test]
    fn scene_bounds() {
        assert_eq!(bounds(&[]), None);
        assert_eq!(bounds(&diagram()), Some(Rect::new(0.0, 0.0, 285.0, 100.0)));
    }

    #[test]
    fn config_defaults_and_validation() {
        let config = SceneConfig::default();
        assert_eq!(config.label_lift(), defaults::LABEL_LIFT);
        assert_eq!(config.hit_width(), defaults::HIT_WIDTH);
        assert!(SceneConfig::new().with_label_lift(-1.0).is_err());
        assert!(SceneConfig::new().with_hit_width(0.0).is_err());
    }
}
