//! Split an undirected graph into its [connected components].
//!
//! [connected components]: https://en.wikipedia.org/wiki/Component_(graph_theory)

use fixedbitset::FixedBitSet;
use log::debug;

use crate::{common::VisitSet, core::id::IdType, storage::AdjList};

/// Returns the connected components of the graph.
///
/// Components are ordered by their first vertex in the vertex order of the
/// graph. Vertices within a component are in the order a depth-first
/// traversal from that first vertex discovers them.
///
/// # Examples
///
/// ```
/// use tourgrid::{algo::connected_components, storage::AdjList};
///
/// let mut graph = AdjList::new();
/// graph.add_edge('a', 'b');
/// graph.add_edge('c', 'd');
/// graph.add_edge('b', 'e');
///
/// assert_eq!(
///     connected_components(&graph),
///     vec![vec!['a', 'b', 'e'], vec!['c', 'd']]
/// );
/// ```
pub fn connected_components<VI: IdType>(graph: &AdjList<VI>) -> Vec<Vec<VI>> {
    let n = graph.vertex_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut components = Vec::new();
    let mut stack = Vec::new();

    for root in 0..n {
        if !visited.visit(root) {
            continue;
        }

        let mut component = Vec::new();
        stack.push(root);

        while let Some(index) = stack.pop() {
            if let Some(vertex) = graph.vertex(index) {
                component.push(vertex.clone());
            }

            // Reversed so that the first neighbor is visited first.
            for &next in graph.neighbor_indices(index).iter().rev() {
                if visited.visit(next) {
                    stack.push(next);
                }
            }
        }

        components.push(component);
    }

    debug!(
        "found {} components over {} vertices",
        components.len(),
        n
    );

    components
}
