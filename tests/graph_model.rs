//! Vertex, edge and graph container tests.

use textgraph::graph::{Graph, GraphBuilder};
use textgraph::types::edge::Edge;
use textgraph::types::error::GraphError;
use textgraph::types::graph_type::GraphType;
use textgraph::types::vertex::Vertex;

use std::collections::HashSet;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ==================== Vertex Tests ====================

#[test]
fn test_vertex_default_value() {
    let vertex = Vertex::new(7);
    assert_eq!(vertex.id(), 7);
    assert_eq!(vertex.value(), 0);
}

#[test]
fn test_vertex_equality_ignores_value() {
    let a = Vertex::with_value(1, 10);
    let b = Vertex::with_value(1, 20);
    let c = Vertex::with_value(2, 10);
    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<Vertex> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_vertex_set_value_keeps_identity() {
    let mut vertex = Vertex::new(3);
    let before = vertex;
    vertex.set_value(42);
    assert_eq!(vertex.value(), 42);
    assert_eq!(vertex, before);
}

#[test]
fn test_vertex_display_is_bare_id() {
    assert_eq!(Vertex::with_value(-12, 99).to_string(), "-12");
}

// ==================== Edge Tests ====================

#[test]
fn test_directed_edge_is_order_sensitive() {
    assert_eq!(Edge::directed(1, 2), Edge::directed(1, 2));
    assert_ne!(Edge::directed(1, 2), Edge::directed(2, 1));
}

#[test]
fn test_undirected_edge_matches_either_order() {
    assert_eq!(Edge::undirected(1, 2), Edge::undirected(2, 1));
    assert_ne!(Edge::undirected(1, 2), Edge::undirected(1, 3));
}

#[test]
fn test_cross_kind_edges_never_equal() {
    assert_ne!(Edge::directed(1, 2), Edge::undirected(1, 2));
    assert_ne!(Edge::undirected(1, 2), Edge::directed(1, 2));
    assert_ne!(Edge::directed(4, 4), Edge::undirected(4, 4));
}

#[test]
fn test_edge_hash_consistent_with_equality() {
    let set: HashSet<Edge> = [
        Edge::undirected(1, 2),
        Edge::undirected(2, 1),
        Edge::directed(1, 2),
        Edge::directed(2, 1),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn test_edge_contains_and_vertices() {
    let edge = Edge::directed(5, 6);
    assert!(edge.contains(5));
    assert!(edge.contains(6));
    assert!(!edge.contains(7));
    assert!(edge.contains(&Vertex::with_value(6, 100)));
    assert_eq!(edge.vertices(), [5, 6]);
    assert!(edge.is_directed());
    assert_eq!(edge.origin(), Some(5));
    assert_eq!(edge.destination(), Some(6));

    let edge = Edge::undirected(8, 9);
    assert!(!edge.is_directed());
    assert_eq!(edge.origin(), None);
    assert_eq!(edge.vertices(), [8, 9]);
}

#[test]
fn test_edge_from_vertices() {
    let a = Vertex::with_value(1, 5);
    let b = Vertex::with_value(2, 6);
    assert_eq!(Edge::undirected(&a, &b), Edge::undirected(2, 1));
}

#[test]
fn test_edge_display() {
    assert_eq!(Edge::directed(1, 2).to_string(), "(1, 2)");
    assert_eq!(Edge::undirected(3, 4).to_string(), "[3, 4]");
}

// ==================== Graph Insertion Tests ====================

#[test]
fn test_empty_graph() {
    let graph = Graph::new();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.graph_type(), GraphType::Unknown);
}

#[test]
fn test_add_vertex_twice_is_idempotent() {
    init_logger();
    let mut graph = Graph::new();
    assert!(graph.add_vertex(Vertex::with_value(1, 10)));
    assert!(!graph.add_vertex(Vertex::with_value(1, 20)));
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.vertex(0).unwrap().value(), 10);
}

#[test]
fn test_add_undirected_edge_both_orders() {
    let mut graph = Graph::new();
    graph.add_edge(Edge::undirected(1, 2));
    graph.add_edge(Edge::undirected(2, 1));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_directed_edge_both_orders() {
    let mut graph = Graph::new();
    graph.add_edge(Edge::directed(1, 2));
    graph.add_edge(Edge::directed(2, 1));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_directed_and_undirected_edges_coexist() {
    let mut graph = Graph::new();
    assert!(graph.add_edge(Edge::directed(1, 2)));
    assert!(graph.add_edge(Edge::undirected(1, 2)));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_add_edge_inserts_endpoints() {
    let mut graph = Graph::new();
    graph.add_edge(Edge::directed(5, 6));
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.vertex(0).unwrap().id(), 5);
    assert_eq!(graph.vertex(1).unwrap().id(), 6);
}

#[test]
fn test_add_edge_keeps_existing_vertex_value() {
    let mut graph = Graph::new();
    graph.add_vertex(Vertex::with_value(1, 7));
    graph.add_edge(Edge::undirected(&Vertex::with_value(1, 99), &Vertex::new(2)));

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.vertex_with_id(1).unwrap().value(), 7);
    assert_eq!(graph.vertex_with_id(2).unwrap().value(), 0);
}

#[test]
fn test_edge_from_vertex_keeps_only_id() {
    let mut graph = Graph::new();
    graph.add_edge(Edge::undirected(&Vertex::with_value(5, 9), &Vertex::new(6)));
    assert_eq!(graph.vertex_with_id(5).unwrap().value(), 0);

    // Adding the vertex first keeps its value.
    let mut graph = Graph::new();
    graph.add_vertex(Vertex::with_value(5, 9));
    graph.add_edge(Edge::undirected(&Vertex::with_value(5, 9), &Vertex::new(6)));
    assert_eq!(graph.vertex_with_id(5).unwrap().value(), 9);
}

#[test]
fn test_self_loop_adds_one_vertex() {
    let mut graph = Graph::new();
    graph.add_edge(Edge::directed(4, 4));
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_bulk_add_counts_insertions() {
    let mut graph = Graph::new();
    let inserted = graph.add_vertices([Vertex::new(1), Vertex::new(2), Vertex::new(1)]);
    assert_eq!(inserted, 2);

    let inserted = graph.add_edges([
        Edge::undirected(1, 2),
        Edge::undirected(2, 1),
        Edge::directed(2, 3),
    ]);
    assert_eq!(inserted, 2);
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn test_insertion_order_preserved() {
    let graph = Graph::from_vertices([Vertex::new(3), Vertex::new(1), Vertex::new(2)]);
    let ids: Vec<i32> = graph.vertices().iter().map(|v| v.id()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_from_edges() {
    let graph = Graph::from_edges([Edge::undirected(1, 2), Edge::directed(2, 3)]);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
}

// ==================== Lookup Tests ====================

#[test]
fn test_vertex_with_id() {
    let graph = Graph::from_vertices([Vertex::with_value(10, 1), Vertex::with_value(20, 2)]);
    assert_eq!(graph.vertex_with_id(20).unwrap().value(), 2);
    assert!(graph.vertex_with_id(30).is_none());
}

#[test]
fn test_vertex_with_id_mut_updates_value() {
    let mut graph = Graph::from_vertices([Vertex::new(10)]);
    graph.vertex_with_id_mut(10).unwrap().set_value(5);
    assert_eq!(graph.vertex(0).unwrap().value(), 5);

    graph.vertex_mut(0).unwrap().set_value(6);
    assert_eq!(graph.vertex_with_id(10).unwrap().value(), 6);
}

#[test]
fn test_vertex_index_one_past_end() {
    let graph = Graph::from_vertices([Vertex::new(1), Vertex::new(2)]);
    assert!(graph.vertex(1).is_ok());
    match graph.vertex(2).unwrap_err() {
        GraphError::IndexOutOfRange { index, len } => {
            assert_eq!(index, 2);
            assert_eq!(len, 2);
        }
        e => panic!("Expected IndexOutOfRange, got {:?}", e),
    }
}

#[test]
fn test_edge_index_one_past_end() {
    let graph = Graph::from_edges([Edge::undirected(1, 2)]);
    assert!(graph.edge(0).is_ok());
    assert!(matches!(
        graph.edge(1),
        Err(GraphError::IndexOutOfRange { index: 1, len: 1 })
    ));
}

#[test]
fn test_vertex_mut_out_of_range() {
    let mut graph = Graph::new();
    assert!(matches!(
        graph.vertex_mut(0),
        Err(GraphError::IndexOutOfRange { index: 0, len: 0 })
    ));
}

// ==================== Removal Tests ====================

#[test]
fn test_remove_vertex_cascades() {
    init_logger();
    let mut graph = Graph::from_vertices([Vertex::new(1), Vertex::new(2), Vertex::new(3)]);
    graph.add_edges([Edge::undirected(1, 2), Edge::undirected(2, 3)]);

    let removed = graph.remove_vertex(1).unwrap();
    assert_eq!(removed.id(), 2);
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_vertex_adjacent_edges_not_skipped() {
    let mut graph = GraphBuilder::new()
        .directed(1, 2)
        .directed(1, 3)
        .undirected(4, 1)
        .directed(2, 3)
        .directed(3, 1)
        .build();

    graph.remove_vertex(0).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(*graph.edge(0).unwrap(), Edge::directed(2, 3));
    assert!(graph.edges().iter().all(|e| !e.contains(1)));
}

#[test]
fn test_remove_vertex_out_of_range() {
    let mut graph = Graph::from_vertices([Vertex::new(1)]);
    assert!(matches!(
        graph.remove_vertex(1),
        Err(GraphError::IndexOutOfRange { index: 1, len: 1 })
    ));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_remove_edge() {
    let mut graph = Graph::from_edges([Edge::undirected(1, 2), Edge::directed(2, 3)]);
    let removed = graph.remove_edge(0).unwrap();
    assert_eq!(removed, Edge::undirected(1, 2));
    assert_eq!(graph.edge_count(), 1);
    // Endpoints stay behind.
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn test_remove_edge_out_of_range() {
    let mut graph = Graph::from_edges([Edge::undirected(1, 2)]);
    assert!(matches!(
        graph.remove_edge(5),
        Err(GraphError::IndexOutOfRange { index: 5, len: 1 })
    ));
}

// ==================== Graph Type Tests ====================

#[test]
fn test_graph_type_classification() {
    assert_eq!(
        Graph::from_edges([Edge::undirected(1, 2)]).graph_type(),
        GraphType::Undirected
    );
    assert_eq!(
        Graph::from_edges([Edge::directed(1, 2)]).graph_type(),
        GraphType::Directed
    );
    assert_eq!(
        Graph::from_edges([Edge::undirected(1, 2), Edge::directed(2, 3)]).graph_type(),
        GraphType::Mixed
    );
    assert_eq!(
        Graph::from_edges([Edge::directed(2, 3), Edge::undirected(1, 2)]).graph_type(),
        GraphType::Mixed
    );
    assert_eq!(
        Graph::from_vertices([Vertex::new(1)]).graph_type(),
        GraphType::Unknown
    );
}

#[test]
fn test_graph_type_stays_mixed() {
    let graph = Graph::from_edges([
        Edge::directed(1, 2),
        Edge::undirected(2, 3),
        Edge::directed(3, 4),
    ]);
    assert_eq!(graph.graph_type(), GraphType::Mixed);
}

#[test]
fn test_graph_type_after_removal() {
    let mut graph = Graph::from_edges([Edge::undirected(1, 2), Edge::directed(3, 4)]);
    assert_eq!(graph.graph_type(), GraphType::Mixed);
    graph.remove_edge(1).unwrap();
    assert_eq!(graph.graph_type(), GraphType::Undirected);
    graph.remove_edge(0).unwrap();
    assert_eq!(graph.graph_type(), GraphType::Unknown);
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_applies_dedup() {
    let graph = GraphBuilder::new()
        .vertex_with_value(1, 3)
        .vertex(1)
        .undirected(1, 2)
        .undirected(2, 1)
        .directed(2, 1)
        .build();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.vertex_with_id(1).unwrap().value(), 3);
}

// ==================== Display Tests ====================

#[test]
fn test_display_canonical_form() {
    let graph = GraphBuilder::new()
        .vertex(1)
        .vertex(2)
        .vertex(3)
        .undirected(1, 2)
        .directed(2, 3)
        .build();
    assert_eq!(graph.to_string(), "V = {1, 2, 3}\nE = {[1, 2], (2, 3)}");
}

#[test]
fn test_display_empty_graph() {
    assert_eq!(Graph::new().to_string(), "V = {}\nE = {}");
}

#[test]
fn test_json_serialization() {
    let graph = GraphBuilder::new()
        .vertex_with_value(1, 4)
        .directed(1, 2)
        .build();
    let value = serde_json::to_value(&graph).unwrap();
    assert_eq!(value["vertices"][0]["id"], 1);
    assert_eq!(value["vertices"][0]["value"], 4);
    assert_eq!(value["edges"][0]["kind"], "directed");
    assert_eq!(value["edges"][0]["origin"], 1);
    assert_eq!(value["edges"][0]["destination"], 2);
}
