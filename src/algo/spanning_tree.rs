//! Find a [minimum spanning tree] of an undirected weighted graph.
//!
//! Uses [Kruskal's algorithm]: edges are considered in the order of
//! ascending weight and an edge is accepted if and only if it connects two
//! different trees of the forest built so far. The sort is stable, so among
//! edges of equal weight the one that comes earlier in the edge list wins.
//!
//! If the graph is not connected, the result is a minimum spanning forest.
//!
//! [minimum spanning tree]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//! [Kruskal's algorithm]: https://en.wikipedia.org/wiki/Kruskal%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use tourgrid::{algo::SpanningTree, storage::EdgeList};
//!
//! let graph: EdgeList<_, u32> = [
//!     ("a", "b", 4),
//!     ("b", "c", 1),
//!     ("a", "c", 2),
//!     ("c", "d", 7),
//! ]
//! .into_iter()
//! .collect();
//!
//! let tree = SpanningTree::on(&graph).run();
//!
//! assert!(tree.is_tree());
//! assert_eq!(tree.total_weight(), 10);
//! ```

use crate::core::{Edge, Weight};

mod builder;
mod kruskal;

pub use builder::SpanningTreeBuilder;

/// Edges of a minimum spanning tree (or forest), in the order they were
/// accepted.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<VI, W> {
    edges: Vec<Edge<VI, W>>,
    vertex_count: usize,
}

impl<VI, W> SpanningTree<VI, W> {
    pub fn edges(&self) -> &[Edge<VI, W>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge<VI, W>> {
        self.edges
    }

    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of vertices of the input graph.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns `true` if the edges span all vertices, that is, the input graph
    /// was connected. A graph without vertices has no spanning tree.
    pub fn is_tree(&self) -> bool {
        self.vertex_count > 0 && self.edges.len() == self.vertex_count - 1
    }

    /// Number of trees in the spanning forest.
    pub fn component_count(&self) -> usize {
        self.vertex_count - self.edges.len()
    }

    /// Sum of the weights of all accepted edges.
    pub fn total_weight(&self) -> W
    where
        W: Weight,
    {
        self.edges
            .iter()
            .fold(W::zero(), |total, edge| total + edge.weight.clone())
    }
}

impl<VI, W> IntoIterator for SpanningTree<VI, W> {
    type Item = Edge<VI, W>;
    type IntoIter = std::vec::IntoIter<Edge<VI, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// A step of Kruskal's algorithm, reported to the
/// [observer](crate::core::Observer).
#[derive(Debug, Clone, PartialEq)]
pub enum SpanningEvent<VI, W> {
    /// The edge joined two trees of the forest.
    Accepted(Edge<VI, W>),
    /// The edge would close a cycle.
    Rejected(Edge<VI, W>),
}
