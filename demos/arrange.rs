//! Auto-arranges a small diagram and prints it as SVG.
//!
//! Run with: RUST_LOG=debug cargo run --example arrange --features tracing

use std::fmt::Write as _;

use relgraph::geometry::fmt_num;
use relgraph::scene::bounds;
use relgraph::{
    ArrowConfig, Edge, LayoutConfig, Node, RankDirection, Rect, SceneConfig, build_scene,
    compute_layout,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let direction = match std::env::args().nth(1).as_deref() {
        Some("lr") => RankDirection::LeftToRight,
        _ => RankDirection::TopToBottom,
    };

    let nodes: Vec<Node> = ["person", "company", "project", "invoice", "archive"]
        .into_iter()
        .map(|id| Node::new(id, Rect::measured(0.0, 0.0, None, None)))
        .collect();
    let edges = vec![
        Edge::new("works-at", "person", "company").with_label("works at"),
        Edge::new("employs", "company", "person").with_label("employs"),
        Edge::new("runs", "company", "project"),
        Edge::new("bills", "project", "invoice").with_label("bills"),
        Edge::new("owes", "invoice", "company"),
        Edge::new("stored", "invoice", "archive"),
    ];

    let layout_config = LayoutConfig::new()
        .with_node_spacing(40.0)?
        .with_rank_spacing(90.0)?
        .with_direction(direction);
    let layout = compute_layout(&nodes, &edges, &layout_config);
    let nodes = layout.apply(&nodes);

    let scene_config = SceneConfig::new().with_arrow(ArrowConfig::default().with_width(6.0)?);
    let scene = build_scene(&nodes, &edges, &scene_config);

    tracing::info!(
        ranks = layout.rank_count(),
        crossings = layout.crossings(),
        connectors = scene.edges.len(),
        "arranged"
    );

    let view = bounds(&nodes).unwrap_or_default();
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        fmt_num(view.x - 20.0),
        fmt_num(view.y - 20.0),
        fmt_num(view.width + 40.0),
        fmt_num(view.height + 40.0)
    );
    for node in &nodes {
        let _ = writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black"/>"#,
            fmt_num(node.rect.x),
            fmt_num(node.rect.y),
            fmt_num(node.rect.width),
            fmt_num(node.rect.height)
        );
        let center = node.rect.center();
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" text-anchor="middle">{}</text>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            node.id
        );
    }
    for (edge, geometry) in edges.iter().filter_map(|edge| {
        scene.edge(&edge.id).map(|geometry| (edge, geometry))
    }) {
        let _ = writeln!(svg, r#"  <path d="{}" stroke="black"/>"#, geometry.line_path());
        let _ = writeln!(svg, r#"  <path d="{}" fill="black"/>"#, geometry.arrow_path());
        if let Some(label) = &edge.label {
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" text-anchor="middle">{}</text>"#,
                fmt_num(geometry.label_anchor.x),
                fmt_num(geometry.label_anchor.y),
                label
            );
        }
    }
    svg.push_str("</svg>");

    println!("{svg}");
    Ok(())
}
