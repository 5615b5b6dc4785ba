//! Hierarchical (layered) layout for the whole diagram
//!
//! Runs on explicit request ("auto-arrange") and ignores current positions:
//! 1. Cycle breaking: DFS back edges stop constraining ranks
//! 2. Rank assignment: longest path from the sources
//! 3. Long edges split into chains of virtual nodes, one per skipped rank
//! 4. Crossing reduction: alternating barycenter sweeps, best ordering kept
//! 5. Coordinate assignment: fixed node size and spacing, ranks centered
//!
//! The result is a new position map; the caller merges it into its own nodes.

mod coords;
mod graph;
mod order;
mod rank;
mod split;

use std::collections::{HashMap, HashSet};

use glam::{DVec2, dvec2};

use crate::errors::ConfigError;
use crate::geometry::defaults;
use crate::types::{Edge, Node, NodeId, Rect};

use graph::LayoutGraph;

/// Axis along which ranks are stacked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RankDirection {
    /// Rank 0 at the top, later ranks below.
    #[default]
    TopToBottom,
    /// Rank 0 on the left, later ranks to the right.
    LeftToRight,
}

/// Layout parameters. All sizes are independent of rendered node sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    node_size: DVec2,
    node_spacing: f64,
    rank_spacing: f64,
    ordering_passes: usize,
    direction: RankDirection,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_size: dvec2(defaults::LAYOUT_NODE_WIDTH, defaults::LAYOUT_NODE_HEIGHT),
            node_spacing: defaults::NODE_SPACING,
            rank_spacing: defaults::RANK_SPACING,
            ordering_passes: defaults::ORDERING_PASSES,
            direction: RankDirection::TopToBottom,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size every node occupies during layout.
    pub fn with_node_size(mut self, width: f64, height: f64) -> Result<Self, ConfigError> {
        let rect = Rect::try_new(0.0, 0.0, width, height).map_err(|source| {
            ConfigError::InvalidRect {
                field: "layout node size",
                source,
            }
        })?;
        self.node_size = rect.size();
        Ok(self)
    }

    /// Gap between neighbours in the same rank.
    pub fn with_node_spacing(mut self, spacing: f64) -> Result<Self, ConfigError> {
        self.node_spacing = ConfigError::non_negative("node spacing", spacing)?;
        Ok(self)
    }

    /// Gap between consecutive ranks.
    pub fn with_rank_spacing(mut self, spacing: f64) -> Result<Self, ConfigError> {
        self.rank_spacing = ConfigError::non_negative("rank spacing", spacing)?;
        Ok(self)
    }

    /// Upper bound on barycenter sweeps; 0 keeps the discovery order.
    pub fn with_ordering_passes(mut self, passes: usize) -> Self {
        self.ordering_passes = passes;
        self
    }

    pub fn with_direction(mut self, direction: RankDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn node_size(&self) -> DVec2 {
        self.node_size
    }

    pub fn node_spacing(&self) -> f64 {
        self.node_spacing
    }

    pub fn rank_spacing(&self) -> f64 {
        self.rank_spacing
    }

    pub fn ordering_passes(&self) -> usize {
        self.ordering_passes
    }

    pub fn direction(&self) -> RankDirection {
        self.direction
    }
}

/// Where one node ended up.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub id: NodeId,
    /// New top-left corner.
    pub position: DVec2,
    pub rank: usize,
    /// Index within the rank, left to right (top to bottom for `LeftToRight`).
    pub order: usize,
}

/// Result of [`compute_layout`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    placements: Vec<Placement>,
    index: HashMap<NodeId, usize>,
    rank_count: usize,
    crossings: usize,
}

impl Layout {
    /// Placements in node input order (first occurrence of each id).
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placement(&self, id: &NodeId) -> Option<&Placement> {
        self.index.get(id).map(|&i| &self.placements[i])
    }

    pub fn position(&self, id: &NodeId) -> Option<DVec2> {
        self.placement(id).map(|p| p.position)
    }

    pub fn rank(&self, id: &NodeId) -> Option<usize> {
        self.placement(id).map(|p| p.rank)
    }

    pub fn rank_count(&self) -> usize {
        self.rank_count
    }

    /// Crossings left between adjacent ranks after ordering.
    pub fn crossings(&self) -> usize {
        self.crossings
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Copies of `nodes` moved to their new positions, sizes untouched.
    ///
    /// Nodes the layout does not know keep their position. The layout only
    /// places the first node with a given id, so later duplicates stay where
    /// they are.
    pub fn apply(&self, nodes: &[Node]) -> Vec<Node> {
        let mut moved = HashSet::with_capacity(self.placements.len());
        nodes
            .iter()
            .map(|node| match self.position(&node.id) {
                Some(position) if moved.insert(&node.id) => Node {
                    id: node.id.clone(),
                    rect: node.rect.moved_to(position),
                },
                Some(_) => {
                    crate::log::warn!(node = %node.id, "duplicate node id left in place");
                    node.clone()
                }
                None => node.clone(),
            })
            .collect()
    }
}

/// Arrange `nodes` in layers following `edges`.
///
/// Deterministic for identical input, including order. Never fails: edges
/// with unknown endpoints are skipped, cycles are broken, and every node gets
/// a position.
pub fn compute_layout(nodes: &[Node], edges: &[Edge], config: &LayoutConfig) -> Layout {
    let graph = LayoutGraph::build(nodes, edges);
    let ranking = rank::assign_ranks(&graph);
    let (proper, proper_ranking) = split::split_long_edges(&graph, &ranking);
    let ordering = order::order_ranks(&proper, &proper_ranking, config.ordering_passes);
    let origins = coords::assign_coordinates(&ordering.layers, proper.node_count(), config);

    // Virtual nodes hold a slot but do not count towards the public order
    let mut order_in_rank = vec![0; graph.real_count()];
    for layer in &ordering.layers {
        let real = layer.iter().filter(|&&node| !proper.is_virtual(node));
        for (pos, &node) in real.enumerate() {
            order_in_rank[node] = pos;
        }
    }

    let placements: Vec<Placement> = graph
        .ids
        .iter()
        .enumerate()
        .map(|(node, id)| Placement {
            id: id.clone(),
            position: origins[node],
            rank: ranking.ranks[node],
            order: order_in_rank[node],
        })
        .collect();
    let index = placements
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id.clone(), i))
        .collect();

    crate::log::debug!(
        nodes = graph.real_count(),
        virtual_nodes = proper.node_count() - proper.real_count(),
        edges = graph.edges.len(),
        back_edges = ranking.back_edges.iter().filter(|&&back| back).count(),
        ranks = ranking.rank_count(),
        crossings = ordering.crossings,
        "layout computed"
    );

    Layout {
        placements,
        index,
        rank_count: ranking.rank_count(),
        crossings: ordering.crossings,
    }
}
