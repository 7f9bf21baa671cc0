#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;
use tourgrid::{
    core::{Neighbors, Point, Site},
    storage::{EdgeList, Grid},
};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Square grid where each cell is a barrier with probability `density`. The
/// corners are always free.
pub fn random_grid(rows: usize, density: f32, rng: &mut Rng) -> Grid {
    let mut grid = Grid::new(rows);
    let corners = [Point::new(0, 0), Point::new(rows - 1, rows - 1)];

    for point in grid.points().collect::<Vec<_>>() {
        if !corners.contains(&point) && rng.f32() < density {
            grid.set_barrier(point).unwrap();
        }
    }

    grid
}

/// The same grid as a petgraph graph, with node indices in row-major order.
pub fn petgraph_grid(grid: &Grid) -> UnGraph<(), u32> {
    let n = grid.rows();
    let mut graph = UnGraph::with_capacity(grid.len(), 2 * grid.len());

    for _ in 0..grid.len() {
        graph.add_node(());
    }

    for point in grid.points().filter(|point| grid.is_passable(point)) {
        for next in grid.neighbors(&point) {
            // Each undirected edge once.
            if (next.row, next.col) > (point.row, point.col) {
                graph.add_edge(
                    NodeIndex::new(point.row * n + point.col),
                    NodeIndex::new(next.row * n + next.col),
                    1,
                );
            }
        }
    }

    graph
}

/// Edges of a random undirected graph where each pair is connected with
/// probability `density`.
pub fn random_edges(vertex_count: usize, density: f32, rng: &mut Rng) -> Vec<(usize, usize, f32)> {
    let mut edges = Vec::new();

    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.f32() < density {
                edges.push((u, v, rng.f32()));
            }
        }
    }

    edges
}

pub fn tourgrid_random(vertex_count: usize, density: f32, rng: &mut Rng) -> EdgeList<usize, f32> {
    let mut graph = EdgeList::new();
    graph.extend_vertices(0..vertex_count);
    graph.extend_with_edges(random_edges(vertex_count, density, rng));
    graph
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> UnGraph<(), f32> {
    let mut graph = UnGraph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    for (u, v, weight) in random_edges(vertex_count, density, rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), weight);
    }

    graph
}

pub fn random_sites(count: usize, rows: usize, depots: f32, rng: &mut Rng) -> Vec<Site> {
    (0..count)
        .map(|_| {
            let (row, col) = (rng.usize(0..rows), rng.usize(0..rows));
            if rng.f32() < depots {
                Site::depot(row, col)
            } else {
                Site::target(row, col)
            }
        })
        .collect()
}
