//! Coordinate assignment for ordered ranks.

use glam::{DVec2, dvec2};

use super::{LayoutConfig, RankDirection};

/// Top-left corner of every node, indexed by node.
///
/// Each rank is centered against the widest rank. The anchor computed per
/// node is its center; it is shifted by half the layout size so it lines up
/// with a top-left box origin.
pub(crate) fn assign_coordinates(
    layers: &[Vec<usize>],
    node_count: usize,
    config: &LayoutConfig,
) -> Vec<DVec2> {
    let size = config.node_size();
    // (extent across a rank, extent along the rank axis)
    let (cross, along) = match config.direction() {
        RankDirection::TopToBottom => (size.x, size.y),
        RankDirection::LeftToRight => (size.y, size.x),
    };
    let cross_step = cross + config.node_spacing();
    let rank_step = along + config.rank_spacing();

    let extent = |count: usize| {
        if count == 0 {
            0.0
        } else {
            count as f64 * cross + (count - 1) as f64 * config.node_spacing()
        }
    };
    let widest = layers.iter().map(|layer| extent(layer.len())).fold(0.0, f64::max);

    let mut origins = vec![DVec2::ZERO; node_count];
    for (rank, layer) in layers.iter().enumerate() {
        let offset = (widest - extent(layer.len())) / 2.0;
        let rank_center = rank as f64 * rank_step + along / 2.0;
        for (pos, &node) in layer.iter().enumerate() {
            let cross_center = offset + pos as f64 * cross_step + cross / 2.0;
            let center = match config.direction() {
                RankDirection::TopToBottom => dvec2(cross_center, rank_center),
                RankDirection::LeftToRight => dvec2(rank_center, cross_center),
            };
            origins[node] = center - size / 2.0;
        }
    }
    origins
}
