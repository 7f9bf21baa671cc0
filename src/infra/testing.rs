use std::collections::VecDeque;

use crate::{
    common::DisjointSet,
    core::{id::IdType, Edge, Point, Weight},
    storage::{EdgeList, Grid},
};

/// Checks that the path leads from `start` (exclusive) to `end` (inclusive)
/// through pairwise adjacent passable cells.
pub fn assert_valid_grid_path(grid: &Grid, start: &Point, end: &Point, path: &[Point]) {
    if start == end {
        assert!(path.is_empty(), "path from a point to itself is not empty");
        return;
    }

    assert_eq!(path.last(), Some(end), "path does not end at the end point");

    let mut prev = start;
    for point in path {
        assert!(
            grid.is_passable(point),
            "path goes through {point} which is not passable"
        );
        assert!(
            prev.is_adjacent(point),
            "{prev} and {point} on the path are not adjacent"
        );
        prev = point;
    }
}

/// Number of steps between two cells, computed by a plain breadth-first
/// search independent of the graph traits.
pub fn grid_distance(grid: &Grid, start: &Point, end: &Point) -> Option<usize> {
    let n = grid.rows();
    let mut dist = vec![None; n * n];
    let mut queue = VecDeque::new();

    if !grid.is_passable(start) {
        return None;
    }

    dist[start.row * n + start.col] = Some(0);
    queue.push_back(*start);

    while let Some(point) = queue.pop_front() {
        let d = dist[point.row * n + point.col]?;

        if &point == end {
            return Some(d);
        }

        let candidates = [
            (point.row + 1, point.col),
            (point.row.wrapping_sub(1), point.col),
            (point.row, point.col + 1),
            (point.row, point.col.wrapping_sub(1)),
        ];

        for (row, col) in candidates {
            let next = Point::new(row, col);
            if grid.is_passable(&next) && dist[row * n + col].is_none() {
                dist[row * n + col] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Returns `true` if the edges contain no cycle.
pub fn is_forest<VI: IdType, W>(edges: &[Edge<VI, W>]) -> bool {
    let mut sets = edges
        .iter()
        .flat_map(|edge| [edge.from.clone(), edge.to.clone()])
        .collect::<DisjointSet<_>>();

    edges.iter().all(|edge| sets.union(&edge.from, &edge.to))
}

/// Weight of a minimum spanning tree found by trying all subsets of `|V| - 1`
/// edges, or `None` if the graph is not connected. Only usable for tiny
/// graphs.
pub fn brute_force_mst_weight<VI: IdType, W: Weight>(graph: &EdgeList<VI, W>) -> Option<W> {
    let n = graph.vertex_count();
    if n == 0 {
        return None;
    }

    let mut best: Option<W> = None;
    let mut chosen = Vec::with_capacity(n - 1);

    visit_subsets(graph.edges(), n - 1, 0, &mut chosen, &mut |subset| {
        let mut sets = DisjointSet::new(graph.vertices().iter().cloned());
        if !subset.iter().all(|edge| sets.union(&edge.from, &edge.to)) {
            return;
        }

        let total = subset
            .iter()
            .fold(W::zero(), |total, edge| total + edge.weight.clone());

        match best {
            Some(ref current) if *current <= total => {}
            _ => best = Some(total),
        }
    });

    best
}

fn visit_subsets<'a, T>(
    items: &'a [T],
    k: usize,
    start: usize,
    chosen: &mut Vec<&'a T>,
    f: &mut dyn FnMut(&[&'a T]),
) {
    if chosen.len() == k {
        f(chosen);
        return;
    }

    for i in start..items.len() {
        if items.len() - i < k - chosen.len() {
            break;
        }

        chosen.push(&items[i]);
        visit_subsets(items, k, i + 1, chosen, f);
        chosen.pop();
    }
}
