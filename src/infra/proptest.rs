use std::fmt::Debug;

use proptest::{collection::vec, prelude::*};

use crate::{
    core::{Site, Weight},
    storage::{EdgeList, Grid},
};

/// Square grids with the number of rows drawn from `rows` and each cell being
/// a barrier with probability `density`.
pub fn grid_with_barriers<R>(rows: R, density: f64) -> impl Strategy<Value = Grid>
where
    R: Strategy<Value = usize>,
{
    rows.prop_flat_map(move |n| (Just(n), vec(prop::bool::weighted(density), n * n)))
        .prop_map(|(n, barriers)| {
            let mut grid = Grid::new(n);
            let points = grid.points().collect::<Vec<_>>();

            for (point, barrier) in points.into_iter().zip(barriers) {
                if barrier {
                    grid.set_barrier(point).expect("point inside the grid");
                }
            }

            grid
        })
}

/// Graphs over vertices `0..n` with random, possibly parallel edges and
/// self-loops. The vertex count must be positive.
pub fn weighted_graph<S>(
    vertices: std::ops::RangeInclusive<usize>,
    weight: S,
) -> impl Strategy<Value = EdgeList<usize, S::Value>>
where
    S: Strategy + Clone,
    S::Value: Weight + Debug,
{
    vertices
        .prop_flat_map(move |n| {
            let edge = (0..n, 0..n, weight.clone());
            (Just(n), vec(edge, 0..=n * n))
        })
        .prop_map(|(n, edges)| {
            let mut graph = EdgeList::new();
            graph.extend_vertices(0..n);
            graph.extend_with_edges(edges);
            graph
        })
}

/// Routing sites on a `rows` × `rows` grid. About a third of them are depots.
/// Sites may repeat.
pub fn routing_sites(
    rows: usize,
    count: std::ops::RangeInclusive<usize>,
) -> impl Strategy<Value = Vec<Site>> {
    vec((0..rows, 0..rows, prop::bool::weighted(0.3)), count).prop_map(|sites| {
        sites
            .into_iter()
            .map(|(row, col, depot)| {
                if depot {
                    Site::depot(row, col)
                } else {
                    Site::target(row, col)
                }
            })
            .collect()
    })
}
