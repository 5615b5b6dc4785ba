//! In-rank ordering by barycenter sweeps.
//!
//! Sweeps alternate downward (order each rank by the mean position of its
//! neighbours in lower ranks) and upward (neighbours in higher ranks). The
//! ordering with the fewest crossings between adjacent ranks is kept.

use std::collections::VecDeque;

use super::graph::LayoutGraph;
use super::rank::Ranking;

/// Final ordering of node indices per rank, plus its crossing count.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Ordering {
    pub layers: Vec<Vec<usize>>,
    pub crossings: usize,
}

pub(crate) fn order_ranks(graph: &LayoutGraph, ranking: &Ranking, passes: usize) -> Ordering {
    let neighbours = neighbour_lists(graph);
    let mut layers = initial_order(graph, ranking);
    let mut positions = positions_of(&layers, graph.node_count());

    let mut best = Ordering {
        crossings: count_crossings(graph, ranking, &positions),
        layers: layers.clone(),
    };
    let initial_crossings = best.crossings;

    for pass in 0..passes {
        if best.crossings == 0 {
            break;
        }
        sweep(&mut layers, &mut positions, &neighbours, ranking, pass % 2 == 0);
        let crossings = count_crossings(graph, ranking, &positions);
        crate::log::trace!(pass, crossings, "ordering sweep");
        if crossings < best.crossings {
            best = Ordering {
                layers: layers.clone(),
                crossings,
            };
        }
    }

    crate::log::debug!(
        initial = initial_crossings,
        best = best.crossings,
        passes,
        "crossing reduction finished"
    );
    best
}

/// Undirected adjacency, one entry per edge (parallel edges weigh more).
fn neighbour_lists(graph: &LayoutGraph) -> Vec<Vec<usize>> {
    let mut lists = vec![Vec::new(); graph.node_count()];
    for &(from, to) in &graph.edges {
        lists[from].push(to);
        lists[to].push(from);
    }
    lists
}

/// Breadth-first discovery order from the rank-0 nodes, taken in input order.
fn initial_order(graph: &LayoutGraph, ranking: &Ranking) -> Vec<Vec<usize>> {
    let n = graph.node_count();
    let mut layers = vec![Vec::new(); ranking.rank_count()];
    let mut seen = vec![false; n];
    let mut queue = VecDeque::new();

    let seeds = (0..n)
        .filter(|&node| ranking.ranks[node] == 0)
        .chain(0..n);
    for seed in seeds {
        if seen[seed] {
            continue;
        }
        seen[seed] = true;
        queue.push_back(seed);

        while let Some(node) = queue.pop_front() {
            layers[ranking.ranks[node]].push(node);
            for &edge in &graph.outgoing[node] {
                let next = graph.edges[edge].1;
                if ranking.is_forward(edge) && !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }

    layers
}

fn positions_of(layers: &[Vec<usize>], node_count: usize) -> Vec<usize> {
    let mut positions = vec![0; node_count];
    for layer in layers {
        for (pos, &node) in layer.iter().enumerate() {
            positions[node] = pos;
        }
    }
    positions
}

fn sweep(
    layers: &mut [Vec<usize>],
    positions: &mut [usize],
    neighbours: &[Vec<usize>],
    ranking: &Ranking,
    downward: bool,
) {
    let count = layers.len();
    if count < 2 {
        return;
    }
    let order: Vec<usize> = if downward {
        (1..count).collect()
    } else {
        (0..count - 1).rev().collect()
    };

    for rank in order {
        let mut keyed: Vec<(f64, usize)> = layers[rank]
            .iter()
            .map(|&node| {
                let (sum, hits) = neighbours[node]
                    .iter()
                    .filter(|&&other| {
                        let other_rank = ranking.ranks[other];
                        if downward { other_rank < rank } else { other_rank > rank }
                    })
                    .fold((0.0, 0usize), |(sum, hits), &other| {
                        (sum + positions[other] as f64, hits + 1)
                    });
                let barycenter = if hits == 0 {
                    positions[node] as f64
                } else {
                    sum / hits as f64
                };
                (barycenter, node)
            })
            .collect();

        // Stable: ties keep their current relative order
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

        let layer = &mut layers[rank];
        layer.clear();
        for (pos, (_, node)) in keyed.into_iter().enumerate() {
            positions[node] = pos;
            layer.push(node);
        }
    }
}

/// Crossings among edges joining adjacent ranks.
pub(crate) fn count_crossings(
    graph: &LayoutGraph,
    ranking: &Ranking,
    positions: &[usize],
) -> usize {
    let mut by_gap: Vec<Vec<(usize, usize)>> = vec![Vec::new(); ranking.rank_count()];
    for &(from, to) in &graph.edges {
        let (upper, lower) = if ranking.ranks[from] < ranking.ranks[to] {
            (from, to)
        } else {
            (to, from)
        };
        if ranking.ranks[lower] == ranking.ranks[upper] + 1 {
            by_gap[ranking.ranks[upper]].push((positions[upper], positions[lower]));
        }
    }

    let mut total = 0;
    for mut segments in by_gap {
        segments.sort_unstable();
        for (i, a) in segments.iter().enumerate() {
            total += segments[i + 1..]
                .iter()
                .filter(|b| a.0 < b.0 && a.1 > b.1)
                .count();
        }
    }
    total
}
