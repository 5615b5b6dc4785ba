//! Long-edge splitting.
//!
//! Ordering and coordinate assignment only look at edges between adjacent
//! ranks. Every edge spanning more ranks becomes a chain through one virtual
//! node per skipped rank, so it competes for a slot like a real node and the
//! straight connector between its endpoints is steered around the nodes in
//! between. Back edges are chained the same way from their upper end, which
//! leaves every segment pointing one rank down.

use super::graph::LayoutGraph;
use super::rank::Ranking;

/// Unit-length version of `graph`: real nodes keep their indices, virtual
/// nodes follow, and all edges run from rank `r` to rank `r + 1`.
pub(crate) fn split_long_edges(
    graph: &LayoutGraph,
    ranking: &Ranking,
) -> (LayoutGraph, Ranking) {
    let mut proper = graph.without_edges();
    let mut ranks = ranking.ranks.clone();

    for &(from, to) in &graph.edges {
        let (upper, lower) = if ranks[from] <= ranks[to] {
            (from, to)
        } else {
            (to, from)
        };
        let (top, bottom) = (ranks[upper], ranks[lower]);
        // Same-rank edges cannot occur after layering
        debug_assert!(top < bottom);

        let mut prev = upper;
        for rank in top + 1..bottom {
            let virtual_node = proper.add_virtual_node();
            ranks.push(rank);
            proper.add_edge(prev, virtual_node);
            prev = virtual_node;
        }
        proper.add_edge(prev, lower);
    }

    crate::log::trace!(
        virtual_nodes = proper.node_count() - proper.real_count(),
        segments = proper.edges.len(),
        "long edges split"
    );

    let back_edges = vec![false; proper.edges.len()];
    (proper, Ranking { ranks, back_edges })
}
