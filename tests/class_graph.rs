use archgraph::core::class_graph::{summarize, ClassGraphBuilder};
use archgraph::core::{
    ArchitectureGraph, DependencyEdge, EdgeKind, MetricsSummary, TypeRecord,
};

fn record(simple: &str, qualified: Option<&str>, deps: Vec<DependencyEdge>) -> TypeRecord {
    TypeRecord {
        simple_name: simple.to_string(),
        qualified_name: qualified.map(str::to_string),
        is_interface: false,
        methods: vec![],
        metrics: MetricsSummary::default(),
        dependencies: deps,
    }
}

#[test]
fn targets_resolve_to_classes_or_external_nodes() {
    let document = ArchitectureGraph {
        project: "proj".to_string(),
        classes: vec![
            record(
                "Order",
                Some("shop.Order"),
                vec![DependencyEdge::new(EdgeKind::Inherit, "Entity")],
            ),
            record(
                "SpecialOrder",
                Some("shop.SpecialOrder"),
                vec![
                    DependencyEdge::new(EdgeKind::Inherit, "Order"),
                    DependencyEdge::new(EdgeKind::Call, "shop.Order"),
                    DependencyEdge::new(EdgeKind::Call, "Entity"),
                ],
            ),
        ],
    };

    let graph = ClassGraphBuilder::from_architecture(&document);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 4);

    let summary = summarize(&graph);
    assert_eq!(summary.classes, 2);
    assert_eq!(summary.external_targets, 1);
    assert_eq!(summary.internal_edges, 2);
    assert_eq!(summary.external_edges, 2);
}

#[test]
fn ambiguous_simple_names_stay_external() {
    let document = ArchitectureGraph {
        project: "proj".to_string(),
        classes: vec![
            record("Node", Some("a.Node"), vec![]),
            record("Node", Some("b.Node"), vec![]),
            record(
                "Tree",
                Some("c.Tree"),
                vec![DependencyEdge::new(EdgeKind::Reference, "Node")],
            ),
        ],
    };

    let builder_graph = ClassGraphBuilder::from_architecture(&document);
    let summary = summarize(&builder_graph);
    assert_eq!(summary.classes, 3);
    assert_eq!(summary.external_targets, 1);
    assert_eq!(summary.internal_edges, 0);
}
