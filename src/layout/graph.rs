//! Index-based directed graph built once per layout call.

use std::collections::HashMap;

use crate::types::{Edge, Node, NodeId};

/// Nodes are addressed by their position in input order. Indices at or past
/// `ids.len()` are virtual nodes standing in for a long edge on a skipped rank.
#[derive(Debug, Clone, Default)]
pub(crate) struct LayoutGraph {
    pub ids: Vec<NodeId>,
    /// `(from, to)` in input order; self-loops and dangling edges are dropped.
    pub edges: Vec<(usize, usize)>,
    /// Outgoing edge indices per node.
    pub outgoing: Vec<Vec<usize>>,
    /// Incoming edge indices per node.
    pub incoming: Vec<Vec<usize>>,
}

impl LayoutGraph {
    pub fn build(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut index: HashMap<&NodeId, usize> = HashMap::with_capacity(nodes.len());
        let mut ids = Vec::with_capacity(nodes.len());
        for node in nodes {
            if index.contains_key(&node.id) {
                crate::log::warn!(node = %node.id, "duplicate node id ignored by layout");
                continue;
            }
            index.insert(&node.id, ids.len());
            ids.push(node.id.clone());
        }

        let mut graph = LayoutGraph {
            outgoing: vec![Vec::new(); ids.len()],
            incoming: vec![Vec::new(); ids.len()],
            ids,
            edges: Vec::with_capacity(edges.len()),
        };

        for edge in edges {
            let endpoints = (index.get(&edge.source), index.get(&edge.target));
            let (Some(&from), Some(&to)) = endpoints else {
                crate::log::warn!(
                    edge = %edge.id,
                    "edge references unknown node, skipped by layout"
                );
                continue;
            };
            if edge.is_self_loop() {
                continue;
            }
            graph.add_edge(from, to);
        }

        graph
    }

    /// Real and virtual nodes.
    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn real_count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_virtual(&self, node: usize) -> bool {
        node >= self.ids.len()
    }

    /// A graph with the same real nodes and no edges.
    pub fn without_edges(&self) -> Self {
        LayoutGraph {
            ids: self.ids.clone(),
            edges: Vec::new(),
            outgoing: vec![Vec::new(); self.ids.len()],
            incoming: vec![Vec::new(); self.ids.len()],
        }
    }

    pub fn add_virtual_node(&mut self) -> usize {
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.outgoing.len() - 1
    }

    pub fn add_edge(&mut self, from: usize, to: usize) -> usize {
        let edge = self.edges.len();
        self.edges.push((from, to));
        self.outgoing[from].push(edge);
        self.incoming[to].push(edge);
        edge
    }
}
