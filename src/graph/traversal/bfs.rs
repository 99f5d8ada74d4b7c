//! Breadth-first search with hop counts.

use crate::collections::{Equivalence, List, Queue};
use crate::error::{GraphError, GraphResult};
use crate::graph::directed::DirectedGraph;
use crate::graph::vertex::{Color, TraversalVertex, UNREACHED};
use crate::graph::VertexKey;
use crate::GhostToken;

/// Computes hop distances from `source` and lists every reached vertex.
///
/// Every vertex is reset to white and [`UNREACHED`]; the source becomes gray
/// at hop 0. Neighbors are discovered in edge insertion order from a FIFO
/// queue of adjacency records. Afterwards `reached` holds, in vertex
/// insertion order, every vertex whose hop count was set.
///
/// A self-loop is harmless: the vertex is already gray when it is seen again.
///
/// # Errors
/// [`GraphError::VertexNotFound`] if no vertex is equivalent to `source`;
/// nothing is repainted and `reached` is left as it was.
/// [`GraphError::DanglingNeighbor`] if a neighbor set names a vertex with
/// no record.
pub fn bfs<'g, 'a, 'brand, V, Q, R>(
    graph: &'g DirectedGraph<'a, V, Q>,
    token: &mut GhostToken<'brand>,
    source: &V,
    reached: &mut List<'g, V, R>,
) -> GraphResult<()>
where
    V: TraversalVertex<'brand>,
    Q: Equivalence<V>,
{
    let source_key = graph.find_vertex(source).ok_or(GraphError::VertexNotFound)?;

    for vertex in graph.vertices() {
        vertex.set_color(token, Color::White);
        vertex.set_hops(token, UNREACHED);
    }

    let origin = graph
        .vertex(source_key)
        .ok_or(GraphError::DanglingNeighbor(source_key))?;
    origin.set_color(token, Color::Gray);
    origin.set_hops(token, 0);

    let mut frontier: Queue<'_, VertexKey> = Queue::new();
    frontier.enqueue(source_key);

    while let Some(&front) = frontier.peek() {
        let record = graph
            .adjacency_by_key(front)
            .ok_or(GraphError::DanglingNeighbor(front))?;
        let hops = record.vertex().hops(token) + 1;

        for neighbor in record.neighbor_keys() {
            let vertex = graph.vertex(neighbor).ok_or(GraphError::DanglingNeighbor(neighbor))?;
            if vertex.color(token) == Color::White {
                vertex.set_color(token, Color::Gray);
                vertex.set_hops(token, hops);
                frontier.enqueue(neighbor);
                trace_op!("bfs discovered vertex at hop {}", hops);
            }
        }

        frontier.dequeue();
        record.vertex().set_color(token, Color::Black);
    }

    reached.clear();
    for vertex in graph.vertices() {
        if vertex.hops(token) != UNREACHED {
            reached.push_back_ref(vertex);
        }
    }
    debug_op!("bfs reached {} of {} vertices", reached.len(), graph.vertex_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TraversalNode;

    #[test]
    fn unreachable_vertices_stay_unreached() {
        GhostToken::new(|mut token| {
            let mut graph = DirectedGraph::new();
            graph.insert_vertex(TraversalNode::new('a')).unwrap();
            graph.insert_vertex(TraversalNode::new('b')).unwrap();
            graph.insert_vertex(TraversalNode::new('c')).unwrap();
            graph
                .insert_edge(&TraversalNode::new('b'), &TraversalNode::new('a'))
                .unwrap();

            let mut reached = List::new();
            bfs(&graph, &mut token, &TraversalNode::new('a'), &mut reached).unwrap();

            assert_eq!(reached.iter().map(|v| *v.data()).collect::<Vec<_>>(), vec!['a']);
            let hops: Vec<i64> = graph.vertices().map(|v| v.hops(&token)).collect();
            assert_eq!(hops, vec![0, UNREACHED, UNREACHED]);
            assert!(graph.vertices().all(|v| v.color(&token) != Color::Gray));
        });
    }

    #[test]
    fn self_loop_is_tolerated() {
        GhostToken::new(|mut token| {
            let mut graph = DirectedGraph::new();
            let a = graph.insert_vertex(TraversalNode::new(0)).unwrap();
            let b = graph.insert_vertex(TraversalNode::new(1)).unwrap();
            graph.insert_edge_by_key(a, a).unwrap();
            graph.insert_edge_by_key(a, b).unwrap();

            let mut reached = List::new();
            bfs(&graph, &mut token, &TraversalNode::new(0), &mut reached).unwrap();

            assert_eq!(reached.len(), 2);
            assert_eq!(graph.vertex(a).map(|v| v.hops(&token)), Some(0));
            assert_eq!(graph.vertex(b).map(|v| v.hops(&token)), Some(1));
        });
    }

    #[test]
    fn rerun_resets_previous_marks() {
        GhostToken::new(|mut token| {
            let mut graph = DirectedGraph::new();
            for label in ["x", "y"] {
                graph.insert_vertex(TraversalNode::new(label)).unwrap();
            }
            graph
                .insert_edge(&TraversalNode::new("x"), &TraversalNode::new("y"))
                .unwrap();

            let mut reached = List::new();
            bfs(&graph, &mut token, &TraversalNode::new("x"), &mut reached).unwrap();
            bfs(&graph, &mut token, &TraversalNode::new("y"), &mut reached).unwrap();

            assert_eq!(reached.len(), 1);
            let hops: Vec<i64> = graph.vertices().map(|v| v.hops(&token)).collect();
            assert_eq!(hops, vec![UNREACHED, 0]);
        });
    }
}
