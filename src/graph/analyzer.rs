//! Cycle detection, topological sorting and strongly connected components
//!
//! Every function takes the graph by shared reference and returns labels
//! borrowed from it. All traversals run on an explicit stack of
//! `(vertex, next successor)` frames, so graph depth is limited by memory
//! rather than by the call stack.

use super::LabeledDigraph;

/// Check whether the graph contains at least one directed cycle
///
/// Roots are tried in insertion order and the search stops at the first
/// edge that leads back onto the active path.
pub fn has_cycle(graph: &LabeledDigraph) -> bool {
    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut on_path = vec![false; vertex_count];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..vertex_count {
        if visited[root] {
            continue;
        }

        visited[root] = true;
        on_path[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            match graph.successors(vertex).get(cursor) {
                Some(&next) => {
                    frame.1 += 1;
                    if !visited[next] {
                        visited[next] = true;
                        on_path[next] = true;
                        stack.push((next, 0));
                    } else if on_path[next] {
                        return true;
                    }
                }
                None => {
                    on_path[vertex] = false;
                    stack.pop();
                }
            }
        }
    }

    false
}

/// Order the vertices so that every edge points forward
///
/// This is the reverse post-order of a depth-first search rooted at each
/// unvisited vertex in insertion order. The result is only a valid
/// topological order when [`has_cycle`] is false; on a cyclic graph it is
/// still a deterministic permutation of all vertices.
pub fn topological_order(graph: &LabeledDigraph) -> Vec<&str> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut finished = Vec::with_capacity(graph.vertex_count());

    for root in 0..graph.vertex_count() {
        post_order_from(graph, root, &mut visited, &mut finished);
    }

    finished
        .into_iter()
        .rev()
        .map(|index| graph.label(index))
        .collect()
}

/// Partition the graph into strongly connected components (Kosaraju)
///
/// Components come out in topological order of the condensation: an edge
/// between two components always points from the earlier one to the later
/// one. Member order inside a component is unspecified.
pub fn strongly_connected_components(graph: &LabeledDigraph) -> Vec<Vec<&str>> {
    let reversed = graph.reversed();
    let vertex_count = reversed.vertex_count();

    let mut visited = vec![false; vertex_count];
    let mut finished = Vec::with_capacity(vertex_count);
    for root in 0..vertex_count {
        post_order_from(&reversed, root, &mut visited, &mut finished);
    }

    // Latest finish in `reversed` lies in a sink component of `graph`, so
    // discovery runs sink-first.
    let mut visited = vec![false; graph.vertex_count()];
    let mut components = Vec::new();
    for &vertex in finished.iter().rev() {
        if visited[vertex] {
            continue;
        }

        let mut members = Vec::new();
        post_order_from(graph, vertex, &mut visited, &mut members);
        components.push(
            members
                .into_iter()
                .map(|index| graph.label(index))
                .collect::<Vec<_>>(),
        );
    }

    components.reverse();
    components
}

/// Depth-first search from `root` over unvisited vertices, appending each
/// vertex to `finished` once all of its successors are done
fn post_order_from(
    graph: &LabeledDigraph,
    root: usize,
    visited: &mut [bool],
    finished: &mut Vec<usize>,
) {
    if visited[root] {
        return;
    }

    visited[root] = true;
    let mut stack = vec![(root, 0usize)];

    while let Some(frame) = stack.last_mut() {
        let (vertex, cursor) = *frame;
        match graph.successors(vertex).get(cursor) {
            Some(&next) => {
                frame.1 += 1;
                if !visited[next] {
                    visited[next] = true;
                    stack.push((next, 0));
                }
            }
            None => {
                finished.push(vertex);
                stack.pop();
            }
        }
    }
}
