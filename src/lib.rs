//! Grid shortest paths, minimum spanning trees and multi-vehicle tours.
//!
//! * [`algo::ShortestPaths`] runs Dijkstra's algorithm (or breadth-first
//!   search) on a [`storage::Grid`] with barriers, or on any other graph
//!   implementing [`core::Neighbors`].
//! * [`algo::SpanningTree`] runs Kruskal's algorithm on a
//!   [`storage::EdgeList`], using [`common::DisjointSet`].
//! * [`algo::Routes`] plans a closed tour for every depot over a spanning tree
//!   of depots and targets.
//!
//! Every algorithm is configured by a builder and can report its individual
//! steps to an [`core::Observer`], for example to animate them.

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;
