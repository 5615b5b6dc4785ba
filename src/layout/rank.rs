//! Cycle breaking and longest-path layering.

use std::collections::VecDeque;

use super::graph::LayoutGraph;

/// Rank per node plus which edges were ignored to break cycles.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Ranking {
    pub ranks: Vec<usize>,
    /// Indexed like `LayoutGraph::edges`; `true` marks an edge closing a cycle.
    pub back_edges: Vec<bool>,
}

impl Ranking {
    pub fn rank_count(&self) -> usize {
        self.ranks.iter().max().map_or(0, |max| max + 1)
    }

    pub fn is_forward(&self, edge: usize) -> bool {
        !self.back_edges[edge]
    }
}

/// Mark edges that point back to a node still on the DFS stack.
///
/// Roots are tried in input order and successors in edge order, so the same
/// input always breaks the same edges.
fn find_back_edges(graph: &LayoutGraph) -> Vec<bool> {
    #[derive(Clone, Copy, PartialEq)]
    enum Visit {
        New,
        OnStack,
        Done,
    }

    let mut state = vec![Visit::New; graph.node_count()];
    let mut back = vec![false; graph.edges.len()];
    // (node, next outgoing slot)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..graph.node_count() {
        if state[root] != Visit::New {
            continue;
        }
        state[root] = Visit::OnStack;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let Some(&edge) = graph.outgoing[node].get(frame.1) else {
                state[node] = Visit::Done;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let next = graph.edges[edge].1;
            match state[next] {
                Visit::OnStack => back[edge] = true,
                Visit::New => {
                    state[next] = Visit::OnStack;
                    stack.push((next, 0));
                }
                Visit::Done => {}
            }
        }
    }

    back
}

/// Longest path from the sources over the non-back edges.
pub(crate) fn assign_ranks(graph: &LayoutGraph) -> Ranking {
    let back_edges = find_back_edges(graph);
    let n = graph.node_count();

    let mut in_degree = vec![0usize; n];
    for (edge, &(_, to)) in graph.edges.iter().enumerate() {
        if !back_edges[edge] {
            in_degree[to] += 1;
        }
    }

    let mut ranks = vec![0usize; n];
    let mut queue: VecDeque<usize> = (0..n).filter(|&node| in_degree[node] == 0).collect();
    let mut processed = 0;

    while let Some(node) = queue.pop_front() {
        processed += 1;
        for &edge in &graph.outgoing[node] {
            if back_edges[edge] {
                continue;
            }
            let next = graph.edges[edge].1;
            ranks[next] = ranks[next].max(ranks[node] + 1);
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }
    debug_assert_eq!(processed, n, "non-back edges must form a DAG");

    Ranking { ranks, back_edges }
}
