use graphwalk::collections::ByKey;
use graphwalk::{status_code, DirectedGraph, GraphError};

#[derive(Debug, Clone, PartialEq)]
struct Station {
    id: u16,
    name: &'static str,
}

fn station(id: u16, name: &'static str) -> Station {
    Station { id, name }
}

#[test]
fn test_duplicate_vertex_under_custom_equivalence() {
    let mut graph = DirectedGraph::with_equivalence(ByKey(|s: &Station| s.id));
    let first = graph.insert_vertex(station(1, "north"));
    assert!(first.is_ok());

    let second = graph.insert_vertex(station(1, "south"));
    assert_eq!(second, Err(GraphError::DuplicateVertex));
    assert_eq!(status_code(&second), 1);
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.vertices().next().map(|s| s.name), Some("north"));
}

#[test]
fn test_status_codes_follow_convention() {
    let mut graph = DirectedGraph::new();
    assert_eq!(status_code(&graph.insert_vertex('a')), 0);
    assert_eq!(status_code(&graph.insert_vertex('a')), 1);
    assert_eq!(status_code(&graph.insert_edge(&'a', &'b')), -1);
    assert_eq!(status_code(&graph.remove_edge(&'a', &'a')), -1);
    assert_eq!(status_code(&graph.remove_vertex(&'z')), -1);
}

#[test]
fn test_insert_then_remove_vertex_round_trips() {
    let mut graph = DirectedGraph::new();
    graph.insert_vertex(1).unwrap();
    graph.insert_vertex(2).unwrap();
    graph.insert_edge(&1, &2).unwrap();
    let (vertices, edges) = (graph.vertex_count(), graph.edge_count());

    graph.insert_vertex(3).unwrap();
    let removed = graph.remove_vertex(&3).unwrap();
    assert_eq!(*removed, 3);
    assert_eq!((graph.vertex_count(), graph.edge_count()), (vertices, edges));
    assert!(graph.validate_invariants());
}

#[test]
fn test_remove_vertex_rejects_incident_edges() {
    let mut graph = DirectedGraph::new();
    for v in ["u", "v", "w"] {
        graph.insert_vertex(v).unwrap();
    }
    graph.insert_edge(&"u", &"v").unwrap();
    graph.insert_edge(&"v", &"w").unwrap();

    assert!(matches!(
        graph.remove_vertex(&"u"),
        Err(GraphError::IncidentEdges { incoming: 0, outgoing: 1 })
    ));
    assert!(matches!(
        graph.remove_vertex(&"w"),
        Err(GraphError::IncidentEdges { incoming: 1, outgoing: 0 })
    ));
    assert!(matches!(
        graph.remove_vertex(&"v"),
        Err(GraphError::IncidentEdges { incoming: 1, outgoing: 1 })
    ));
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    graph.remove_edge(&"u", &"v").unwrap();
    assert!(graph.remove_vertex(&"u").is_ok());
    assert!(graph.validate_invariants());
}

#[test]
fn test_cascading_removal_drops_incident_edges() {
    let mut graph = DirectedGraph::new();
    for v in 0..4 {
        graph.insert_vertex(v).unwrap();
    }
    graph.insert_edge(&0, &1).unwrap();
    graph.insert_edge(&1, &2).unwrap();
    graph.insert_edge(&3, &1).unwrap();
    graph.insert_edge(&0, &2).unwrap();

    let removed = graph.remove_vertex_with_edges(&1).unwrap();
    assert_eq!(*removed, 1);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_adjacent(&0, &2));
    assert!(graph.validate_invariants());
}

#[test]
fn test_duplicate_edge_policy() {
    let mut graph = DirectedGraph::new();
    graph.insert_vertex('x').unwrap();
    graph.insert_vertex('y').unwrap();
    graph.insert_edge(&'x', &'y').unwrap();

    let again = graph.insert_edge(&'x', &'y');
    assert_eq!(again, Err(GraphError::DuplicateEdge));
    assert_eq!(status_code(&again), 1);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.out_degree(&'x'), Some(1));
}

#[test]
fn test_remove_edge_and_adjacency() {
    let mut graph = DirectedGraph::new();
    graph.insert_vertex("a").unwrap();
    graph.insert_vertex("b").unwrap();
    graph.insert_edge(&"a", &"b").unwrap();
    assert!(graph.is_adjacent(&"a", &"b"));
    assert!(!graph.is_adjacent(&"b", &"a"));

    graph.remove_edge(&"a", &"b").unwrap();
    assert!(!graph.is_adjacent(&"a", &"b"));
    assert_eq!(graph.remove_edge(&"a", &"b"), Err(GraphError::EdgeNotFound));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_adjacency_lookup_lists_neighbors_in_edge_order() {
    let mut graph = DirectedGraph::new();
    for v in ["hub", "c", "a", "b"] {
        graph.insert_vertex(v).unwrap();
    }
    graph.insert_edge(&"hub", &"a").unwrap();
    graph.insert_edge(&"hub", &"b").unwrap();
    graph.insert_edge(&"hub", &"c").unwrap();

    let record = graph.adjacency(&"hub").unwrap();
    assert_eq!(*record.vertex(), "hub");
    assert_eq!(record.out_degree(), 3);
    assert_eq!(record.neighbors().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(graph.adjacency(&"nowhere").map(|_| ()), Err(GraphError::VertexNotFound));
}

#[test]
fn test_borrowed_vertices_are_not_owned() {
    let names = [String::from("left"), String::from("right")];
    let mut graph = DirectedGraph::new();
    for name in &names {
        graph.insert_vertex_ref(name).unwrap();
    }
    graph.insert_edge(&names[0], &names[1]).unwrap();

    assert!(graph.ownership().is_empty());
    assert!(!graph.has_ownership(&names[0]));
    assert_eq!(graph.edges().count(), 1);

    let removed = graph.remove_vertex_with_edges(&names[1]).unwrap();
    assert!(std::ptr::eq(removed.into_borrowed().unwrap(), &names[1]));
}

#[test]
fn test_empty_graph_queries() {
    let graph: DirectedGraph<'_, u8> = DirectedGraph::new();
    assert!(graph.is_empty());
    assert!(graph.adjacency_head().is_none());
    assert_eq!(graph.vertices().count(), 0);
    assert_eq!(graph.edges().count(), 0);
    assert!(!graph.is_adjacent(&1, &2));
    assert!(graph.validate_invariants());
}
