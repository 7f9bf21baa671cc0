//! Graph representations used by the algorithms.
//!
//! * [`Grid`] is an implicit graph over a square array of cells, used for
//!   shortest paths.
//! * [`EdgeList`] stores weighted edges in insertion order, used for spanning
//!   trees.
//! * [`AdjList`] stores ordered neighbor lists, used for tree traversals.

pub mod adj_list;
pub mod edge_list;
pub mod grid;

#[doc(inline)]
pub use self::{adj_list::AdjList, edge_list::EdgeList, grid::Grid};
