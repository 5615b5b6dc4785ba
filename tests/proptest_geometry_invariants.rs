//! Property-based invariant tests for connector geometry and layout.
//!
//! 1. Raw boundary points lie on the owner's outline.
//! 2. The epsilon push moves the point away from the owner's center.
//! 3. Bidirectional endpoints stay inside their own boxes.
//! 4. Side-by-side pairs run parallel, twice the offset apart; no pair is
//!    ever further apart than that.
//! 5. Arrowhead apex is the tip; base corners are symmetric.
//! 6. Layout ranks increase along every edge of a DAG.
//! 7. Layout is deterministic and gives every node its own slot.

use std::collections::HashSet;

use proptest::prelude::*;
use relgraph::geometry::{defaults, raw_boundary_point};
use relgraph::{
    ArrowConfig, ConnectorConfig, Edge, LayoutConfig, Node, NodeId, Rect, build_arrowhead,
    compute_layout, dvec2, resolve_boundary_point, route_connector,
};

const TOL: f64 = 1e-6;

// ── Helpers ─────────────────────────────────────────────────────────────

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-500.0f64..500.0, -500.0f64..500.0, 1.0f64..300.0, 1.0f64..300.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..24)))
}

fn build_graph(n: usize, pairs: &[(usize, usize)]) -> (Vec<Node>, Vec<Edge>) {
    let nodes = (0..n)
        .map(|i| Node::new(format!("n{i}"), Rect::at(0.0, 0.0)))
        .collect();
    let edges = pairs
        .iter()
        .enumerate()
        .map(|(i, &(s, t))| Edge::new(format!("e{i}"), format!("n{s}"), format!("n{t}")))
        .collect();
    (nodes, edges)
}

fn on_outline(r: &Rect, x: f64, y: f64) -> bool {
    let inside = x >= r.x - TOL && x <= r.right() + TOL && y >= r.y - TOL && y <= r.bottom() + TOL;
    let on_side = (x - r.x).abs() < TOL
        || (x - r.right()).abs() < TOL
        || (y - r.y).abs() < TOL
        || (y - r.bottom()).abs() < TOL;
    inside && on_side
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Boundary points
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn raw_boundary_point_lies_on_outline(a in rect_strategy(), b in rect_strategy()) {
        prop_assume!(a.center().distance(b.center()) > 1e-3);
        let p = raw_boundary_point(&a, &b);
        prop_assert!(on_outline(&a, p.x, p.y), "{:?} not on outline of {:?}", p, a);
    }

    #[test]
    fn epsilon_push_moves_outward(a in rect_strategy(), b in rect_strategy()) {
        prop_assume!(a.center().distance(b.center()) > 1e-3);
        let raw = raw_boundary_point(&a, &b);
        let pushed = resolve_boundary_point(&a, &b);
        prop_assert!((raw.distance(pushed) - defaults::BOUNDARY_EPSILON).abs() < TOL);
        prop_assert!(pushed.distance(a.center()) > raw.distance(a.center()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Connector routing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bidirectional_endpoints_stay_in_boxes(a in rect_strategy(), b in rect_strategy()) {
        let config = ConnectorConfig::default();
        for (src, dst) in [(&a, &b), (&b, &a)] {
            let ends = route_connector(src, dst, true, &config);
            prop_assert!(src.contains(ends.start), "{:?} outside {:?}", ends.start, src);
            prop_assert!(dst.contains(ends.end), "{:?} outside {:?}", ends.end, dst);
        }
    }

    #[test]
    fn side_by_side_pair_is_parallel(
        y in -200.0f64..200.0,
        h in 40.0f64..200.0,
        wa in 10.0f64..200.0,
        wb in 10.0f64..200.0,
        gap in 20.0f64..400.0,
    ) {
        let a = Rect::new(0.0, y, wa, h);
        let b = Rect::new(wa + gap, y, wb, h);
        let config = ConnectorConfig::default();

        let ab = route_connector(&a, &b, true, &config);
        let ba = route_connector(&b, &a, true, &config);
        let single = route_connector(&a, &b, false, &config);

        let dir_ab = ab.direction().unwrap();
        let dir_ba = ba.direction().unwrap();
        prop_assert!(dir_ab.perp_dot(dir_ba).abs() < TOL, "not parallel");

        let gap_at_mid = ab.midpoint().distance(ba.midpoint());
        prop_assert!((gap_at_mid - 2.0 * defaults::PAIR_OFFSET).abs() < TOL);
        prop_assert!((ab.start.y - single.start.y).abs() > 1.0);
    }

    #[test]
    fn pair_gap_never_exceeds_twice_the_offset(a in rect_strategy(), b in rect_strategy()) {
        prop_assume!(a.center().distance(b.center()) > 1e-3);
        let config = ConnectorConfig::default();
        let ab = route_connector(&a, &b, true, &config);
        let ba = route_connector(&b, &a, true, &config);
        let gap = ab.midpoint().distance(ba.midpoint());
        prop_assert!(gap <= 2.0 * defaults::PAIR_OFFSET + TOL, "gap {}", gap);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Arrowheads
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arrowhead_is_symmetric(
        sx in -1000.0f64..1000.0, sy in -1000.0f64..1000.0,
        tx in -1000.0f64..1000.0, ty in -1000.0f64..1000.0,
    ) {
        let start = dvec2(sx, sy);
        let end = dvec2(tx, ty);
        prop_assume!(start.distance(end) > 1e-3);

        let head = build_arrowhead(start, end, &ArrowConfig::default());
        prop_assert_eq!(head.apex(), end);

        let d1 = end.distance(head.triangle[1]);
        let d2 = end.distance(head.triangle[2]);
        prop_assert!((d1 - d2).abs() < TOL);

        let dir = (end - start).normalize();
        let side1 = (head.triangle[1] - start).perp_dot(dir);
        let side2 = (head.triangle[2] - start).perp_dot(dir);
        prop_assert!((side1 + side2).abs() < 1e-4, "corners not mirrored");
        prop_assert!((head.base_midpoint() - start).perp_dot(dir).abs() < 1e-4);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-7. Layout
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ranks_increase_along_dag_edges((n, pairs) in graph_strategy()) {
        let dag: Vec<(usize, usize)> = pairs
            .into_iter()
            .filter(|(s, t)| s != t)
            .map(|(s, t)| (s.min(t), s.max(t)))
            .collect();
        let (nodes, edges) = build_graph(n, &dag);
        let layout = compute_layout(&nodes, &edges, &LayoutConfig::default());

        for edge in &edges {
            let source = layout.rank(&edge.source).unwrap();
            let target = layout.rank(&edge.target).unwrap();
            prop_assert!(
                target > source,
                "{} -> {}: {} !> {}",
                edge.source,
                edge.target,
                target,
                source
            );
        }
    }

    #[test]
    fn layout_is_deterministic_and_conflict_free((n, pairs) in graph_strategy()) {
        let (nodes, edges) = build_graph(n, &pairs);
        let config = LayoutConfig::default();
        let first = compute_layout(&nodes, &edges, &config);
        let second = compute_layout(&nodes, &edges, &config);
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(first.placements().len(), n);
        let mut slots = HashSet::new();
        for node in &nodes {
            let p = first.position(&node.id).unwrap();
            prop_assert!(p.is_finite());
            prop_assert!(slots.insert((p.x.to_bits(), p.y.to_bits())), "two nodes share {:?}", p);
        }
        let ids: HashSet<&NodeId> = first.placements().iter().map(|p| &p.id).collect();
        prop_assert_eq!(ids.len(), n);
    }
}
