//! Depth-first search emitting reverse finishing order.

use crate::alloc::NodeKey;
use crate::collections::List;
use crate::error::{GraphError, GraphResult};
use crate::graph::directed::DirectedGraph;
use crate::graph::vertex::{Color, TraversalVertex};
use crate::graph::VertexKey;
use crate::GhostToken;

/// A vertex being visited and the next neighbor entry to look at.
struct Frame {
    vertex: VertexKey,
    cursor: Option<NodeKey>,
}

/// Visits every vertex depth-first and lists them by reverse finishing time.
///
/// Roots are tried in vertex insertion order and neighbors in edge insertion
/// order. A vertex is prepended to `ordered` when it turns black, so on a DAG
/// the result is a topological order: for every edge `u -> v`, `u` precedes
/// `v`. The visit runs on an explicit stack, one frame per gray vertex.
///
/// # Errors
/// [`GraphError::DanglingNeighbor`] if a neighbor set names a vertex with no
/// record.
pub fn dfs<'g, 'a, 'brand, V, Q, R>(
    graph: &'g DirectedGraph<'a, V, Q>,
    token: &mut GhostToken<'brand>,
    ordered: &mut List<'g, V, R>,
) -> GraphResult<()>
where
    V: TraversalVertex<'brand>,
{
    for vertex in graph.vertices() {
        vertex.set_color(token, Color::White);
    }
    ordered.clear();

    let mut stack = Vec::new();
    for root in graph.adjacencies() {
        if root.vertex().color(token) != Color::White {
            continue;
        }
        root.vertex().set_color(token, Color::Gray);
        stack.push(Frame {
            vertex: root.key(),
            cursor: root.first_neighbor(),
        });

        while let Some(frame) = stack.last_mut() {
            let record = graph
                .adjacency_by_key(frame.vertex)
                .ok_or(GraphError::DanglingNeighbor(frame.vertex))?;

            let Some(cursor) = frame.cursor else {
                stack.pop();
                record.vertex().set_color(token, Color::Black);
                ordered.insert_ref(None, record.vertex());
                trace_op!("dfs finished vertex, depth {}", stack.len());
                continue;
            };
            frame.cursor = record.neighbor_after(cursor);

            let Some(next) = record.neighbor_at(cursor) else {
                continue;
            };
            let target = graph
                .adjacency_by_key(next)
                .ok_or(GraphError::DanglingNeighbor(next))?;
            if target.vertex().color(token) == Color::White {
                target.vertex().set_color(token, Color::Gray);
                stack.push(Frame {
                    vertex: next,
                    cursor: target.first_neighbor(),
                });
            }
        }
    }

    debug_op!("dfs ordered {} vertices", ordered.len());
    Ok(())
}
