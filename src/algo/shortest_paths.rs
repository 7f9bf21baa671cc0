//! Find [single source shortest paths] and their distances in a graph.
//!
//! The default algorithm is Dijkstra's algorithm with a priority queue keyed
//! by the distance and then by the order in which vertices were (re-)queued.
//! Among vertices at the same distance, the one improved first is expanded
//! first, which makes the search fully deterministic for a given neighbor
//! order. For graphs with constant edge weights, breadth-first search can be
//! selected with [`bfs`](ShortestPathsBuilder::bfs).
//!
//! Edge weights must not be negative. This is a precondition that is checked
//! only in debug builds.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//!
//! # Examples
//!
//! ```
//! use tourgrid::{algo::ShortestPaths, core::Point, storage::grid::GridMap};
//!
//! let map: GridMap = "S....\n.....\n##.##\n.....\n....E".parse().unwrap();
//!
//! let (start, end) = (map.start.unwrap(), map.end.unwrap());
//!
//! let paths = ShortestPaths::on(&map.grid).goal(end).run(start).unwrap();
//! let path = paths.path_to(&end).unwrap();
//!
//! assert_eq!(paths[end], 8);
//! assert!(path.contains(&Point::new(2, 2)));
//! ```

use std::{borrow::Borrow, ops::Index};

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::core::Neighbors;

mod bfs;
mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<W, G: Neighbors> {
    source: G::VertexId,
    // Using HashMaps because the algorithm supports early termination when
    // reaching given goal. It is likely that reaching goal means visiting a
    // subgraph which is significantly smaller than the whole graph.
    dist: FxHashMap<G::VertexId, W>,
    pred: FxHashMap<G::VertexId, G::VertexId>,
    open: FxHashSet<G::VertexId>,
    closed: FxHashSet<G::VertexId>,
}

impl<W, G> ShortestPaths<W, G>
where
    G: Neighbors,
{
    /// Source vertex where the search was started.
    pub fn source(&self) -> &G::VertexId {
        &self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if it's not known.
    ///
    /// There are two causes why the distance between two vertices is not
    /// known: (1) the vertices are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before visiting the
    /// given vertex. If the goal was reached while the vertex was still
    /// [open](Status::Open), the distance is only an upper bound.
    pub fn dist(&self, to: &G::VertexId) -> Option<&W> {
        self.dist.get(to)
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order. The given vertex itself is not
    /// included, the source is.
    pub fn reconstruct(&self, to: G::VertexId) -> PathReconstruction<'_, G> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Returns the path from the source to the given vertex, excluding the
    /// source and including the given vertex, or `None` if the vertex was not
    /// reached.
    pub fn path_to(&self, to: &G::VertexId) -> Option<Vec<G::VertexId>> {
        if to == &self.source {
            return Some(Vec::new());
        }

        if !self.dist.contains_key(to) {
            return None;
        }

        let mut path = self.reconstruct(to.clone()).collect::<Vec<_>>();
        path.reverse();
        // The first vertex is the source.
        path.remove(0);
        path.push(to.clone());

        Some(path)
    }

    /// Status of the vertex at the end of the search.
    pub fn status(&self, vertex: &G::VertexId) -> Status {
        if self.closed.contains(vertex) {
            Status::Closed
        } else if self.open.contains(vertex) {
            Status::Open
        } else {
            Status::Unvisited
        }
    }

    /// Number of vertices whose distance is final.
    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }
}

impl<W, G, VI> Index<VI> for ShortestPaths<W, G>
where
    G: Neighbors,
    VI: Borrow<G::VertexId>,
{
    type Output = W;

    fn index(&self, index: VI) -> &Self::Output {
        let vertex: &G::VertexId = index.borrow();
        match self.dist(vertex) {
            Some(dist) => dist,
            None => panic!("no distance known for {vertex:?}"),
        }
    }
}

/// Progress of a vertex during the search.
///
/// `Unvisited → Open → Closed`. A vertex is open while it waits in the queue
/// and closed once all its neighbors were relaxed, at which point its distance
/// is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Unvisited,
    Open,
    Closed,
}

/// A step of the search, reported to the [observer](crate::core::Observer).
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent<VI, W> {
    /// The vertex was queued with an improved distance.
    Opened { vertex: VI, dist: W },
    /// All neighbors of the vertex were relaxed. Not reported for the source.
    Closed { vertex: VI },
    /// The goal was taken from the queue, the search stops.
    Reached { vertex: VI, dist: W },
}

/// Available algorithms for finding shortest paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algo {
    /// Dijkstra's algorithm. Any non-negative weights.
    #[default]
    Dijkstra,
    /// Breadth-first search. Used only if the edge weight is constant,
    /// otherwise Dijkstra's algorithm runs instead.
    Bfs,
}

mod algo {
    #[derive(Debug)]
    pub struct Dijkstra;

    #[derive(Debug)]
    pub struct Bfs;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub super::Algo);
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The specified goal not reached. This is the regular outcome when there
    /// is no path between the source and the goal.
    #[error("specified goal not reached")]
    GoalNotReached,
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a, G: Neighbors> {
    curr: G::VertexId,
    pred: &'a FxHashMap<G::VertexId, G::VertexId>,
}

impl<G: Neighbors> Iterator for PathReconstruction<'_, G> {
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).cloned()?;
        Some(self.curr.clone())
    }
}

/// Finds a shortest path between two vertices with every step costing one.
///
/// The path excludes `start` and includes `end`. Returns `None` if `end` is
/// not reachable from `start`.
pub fn find_path<G>(graph: &G, start: G::VertexId, end: G::VertexId) -> Option<Vec<G::VertexId>>
where
    G: Neighbors,
{
    let paths = ShortestPaths::on(graph)
        .goal(end.clone())
        .run(start)
        .ok()?;
    paths.path_to(&end)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        core::{Edge, Point},
        infra::{
            proptest::grid_with_barriers,
            testing::{assert_valid_grid_path, grid_distance},
        },
        storage::{grid::GridMap, AdjList, Grid},
    };

    use super::*;

    fn p(row: usize, col: usize) -> Point {
        Point::new(row, col)
    }

    fn create_weighted_graph() -> AdjList<usize> {
        let edges = [
            Edge::new(0, 1, ()),
            Edge::new(0, 2, ()),
            Edge::new(1, 2, ()),
            Edge::new(1, 3, ()),
            Edge::new(1, 4, ()),
            Edge::new(2, 3, ()),
            Edge::new(3, 4, ()),
            Edge::new(4, 5, ()),
        ];
        AdjList::from_edges(&edges)
    }

    fn weight(u: &usize, v: &usize) -> u32 {
        match (u.min(v), u.max(v)) {
            (0, 1) => 3,
            (0, 2) => 2,
            (1, 2) => 2,
            (1, 3) => 2,
            (1, 4) => 7,
            (2, 3) => 5,
            (3, 4) => 3,
            (4, 5) => 10,
            _ => unreachable!(),
        }
    }

    #[test]
    fn empty_grid_manhattan() {
        let grid = Grid::new(5);
        let paths = ShortestPaths::on(&grid).goal(p(4, 4)).run(p(0, 0)).unwrap();

        let path = paths.path_to(&p(4, 4)).unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(paths[p(4, 4)], 8);
        assert_eq!(path.last(), Some(&p(4, 4)));
        assert_valid_grid_path(&grid, &p(0, 0), &p(4, 4), &path);

        // Down is preferred over right on ties.
        assert_eq!(path[0], p(1, 0));
    }

    #[test]
    fn forced_through_opening() {
        let mut grid = Grid::new(5);
        for col in [0, 1, 3, 4] {
            grid.set_barrier(p(2, col)).unwrap();
        }

        let path = find_path(&grid, p(0, 0), p(4, 4)).unwrap();

        assert!(path.contains(&p(2, 2)));
        assert_eq!(path.len(), 8);
        assert_valid_grid_path(&grid, &p(0, 0), &p(4, 4), &path);
    }

    #[test]
    fn detour_around_wall() {
        let map: GridMap = "\
        S.#..
        ..#..
        ..#..
        ..#..
        ....E"
            .parse()
            .unwrap();

        let (start, end) = (map.start.unwrap(), map.end.unwrap());
        let path = find_path(&map.grid, start, end).unwrap();

        assert_eq!(path.len(), 8);
        assert!(path.contains(&p(4, 2)));
        assert_valid_grid_path(&map.grid, &start, &end, &path);
    }

    #[test]
    fn no_path() {
        let map: GridMap = "\
        S.#..
        ..#..
        ###..
        .....
        ....E"
            .parse()
            .unwrap();

        let (start, end) = (map.start.unwrap(), map.end.unwrap());
        let paths = ShortestPaths::on(&map.grid).goal(end).run(start);

        assert_matches!(paths, Err(Error::GoalNotReached));
        assert_eq!(find_path(&map.grid, start, end), None);
    }

    #[test]
    fn start_is_end() {
        let grid = Grid::new(3);
        let paths = ShortestPaths::on(&grid).goal(p(1, 1)).run(p(1, 1)).unwrap();

        assert_eq!(paths[p(1, 1)], 0);
        assert_eq!(paths.path_to(&p(1, 1)), Some(Vec::new()));
        assert_eq!(paths.closed_count(), 1);
    }

    #[test]
    fn run_to_exhaustion() {
        let mut grid = Grid::new(3);
        grid.set_barrier(p(1, 1)).unwrap();

        let paths = ShortestPaths::on(&grid).run(p(0, 0)).unwrap();

        assert_eq!(paths[p(2, 2)], 4);
        assert_eq!(paths.dist(&p(1, 1)), None);
        assert_eq!(paths.status(&p(1, 1)), Status::Unvisited);
        assert_eq!(paths.status(&p(2, 2)), Status::Closed);
        assert_eq!(paths.closed_count(), 8);
    }

    #[test]
    fn early_termination_leaves_open_vertices() {
        let grid = Grid::new(5);
        let paths = ShortestPaths::on(&grid).goal(p(0, 1)).run(p(0, 0)).unwrap();

        assert_eq!(paths.status(&p(0, 0)), Status::Closed);
        assert_eq!(paths.status(&p(0, 1)), Status::Closed);
        assert_eq!(paths.status(&p(1, 0)), Status::Closed);
        assert_eq!(paths.status(&p(2, 0)), Status::Open);
        assert_eq!(paths.status(&p(4, 4)), Status::Unvisited);
        assert_eq!(paths.dist(&p(4, 4)), None);
    }

    #[test]
    fn observer_sees_every_step() {
        let grid = Grid::new(2);
        let mut events = Vec::new();

        ShortestPaths::on(&grid)
            .goal(p(1, 1))
            .observe(|e: SearchEvent<Point, u32>| events.push(e))
            .run(p(0, 0))
            .unwrap();

        assert_eq!(
            events,
            vec![
                SearchEvent::Opened {
                    vertex: p(1, 0),
                    dist: 1
                },
                SearchEvent::Opened {
                    vertex: p(0, 1),
                    dist: 1
                },
                SearchEvent::Opened {
                    vertex: p(1, 1),
                    dist: 2
                },
                SearchEvent::Closed { vertex: p(1, 0) },
                SearchEvent::Closed { vertex: p(0, 1) },
                SearchEvent::Reached {
                    vertex: p(1, 1),
                    dist: 2
                },
            ]
        );
    }

    #[test]
    fn dijkstra_weighted() {
        let graph = create_weighted_graph();
        let paths = ShortestPaths::on(&graph)
            .edge_weight_fn(weight)
            .run(0)
            .unwrap();

        assert_eq!(paths.dist(&4), Some(&8));
        assert_eq!(paths.reconstruct(4).collect::<Vec<_>>(), vec![3, 1, 0]);
        assert_eq!(paths.path_to(&4), Some(vec![1, 3, 4]));
        assert_eq!(paths.dist(&2), Some(&2));
        assert_eq!(paths.dist(&5), Some(&18));
    }

    #[test]
    fn dijkstra_reenqueues_improved_vertex() {
        let mut graph = AdjList::new();
        graph.add_edge('s', 'a');
        graph.add_edge('s', 'b');
        graph.add_edge('b', 'a');

        let mut opened = Vec::new();
        let paths = ShortestPaths::on(&graph)
            .edge_weight_fn(|u: &char, v: &char| match (u.min(v), u.max(v)) {
                ('a', 's') => 10u32,
                ('b', 's') => 1,
                _ => 2,
            })
            .observe(|e: SearchEvent<char, u32>| {
                if let SearchEvent::Opened { vertex, dist } = e {
                    opened.push((vertex, dist));
                }
            })
            .run('s')
            .unwrap();

        assert_eq!(paths.dist(&'a'), Some(&3));
        assert_eq!(paths.path_to(&'a'), Some(vec!['b', 'a']));
        assert_eq!(opened, vec![('a', 10), ('b', 1), ('a', 3)]);
    }

    #[test]
    fn bfs_basic() {
        let graph = create_weighted_graph();
        let paths = ShortestPaths::on(&graph).bfs().run(0).unwrap();

        assert_eq!(paths.dist(&4), Some(&2));
        assert_eq!(paths.reconstruct(4).collect::<Vec<_>>(), vec![1, 0]);
        assert_eq!(paths.dist(&2), Some(&1));
    }

    #[test]
    fn specific_algo() {
        let graph = create_weighted_graph();

        let paths = ShortestPaths::on(&graph).using(Algo::Bfs).run(0).unwrap();
        assert_eq!(paths.dist(&4), Some(&2));

        // Not a constant weight, falls back to Dijkstra.
        let paths = ShortestPaths::on(&graph)
            .edge_weight_fn(weight)
            .using(Algo::Bfs)
            .run(0)
            .unwrap();
        assert_eq!(paths.dist(&4), Some(&8));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative edge weight")]
    fn negative_weight() {
        let graph = create_weighted_graph();
        let _ = ShortestPaths::on(&graph)
            .edge_weight_fn(|_: &usize, v: &usize| if *v == 3 { -1i32 } else { 1 })
            .run(0);
    }

    #[test]
    fn bfs_goal_not_reached() {
        let mut grid = Grid::new(3);
        grid.set_barrier(p(0, 1)).unwrap();
        grid.set_barrier(p(1, 0)).unwrap();

        let paths = ShortestPaths::on(&grid).goal(p(2, 2)).bfs().run(p(0, 0));

        assert_matches!(paths, Err(Error::GoalNotReached));
    }

    #[test]
    fn bfs_early_termination() {
        let graph = create_weighted_graph();
        let paths = ShortestPaths::on(&graph).goal(4).bfs().run(0).unwrap();

        assert!(paths.dist(&5).is_none());
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_grid_path_valid_and_shortest(grid in grid_with_barriers(2..12usize, 0.3), a in any::<(usize, usize)>(), b in any::<(usize, usize)>()) {
            let n = grid.rows();
            let start = p(a.0 % n, a.1 % n);
            let end = p(b.0 % n, b.1 % n);
            prop_assume!(grid.is_passable(&start) && grid.is_passable(&end));

            let expected = grid_distance(&grid, &start, &end);

            match find_path(&grid, start, end) {
                Some(path) => {
                    assert_valid_grid_path(&grid, &start, &end, &path);
                    prop_assert_eq!(Some(path.len()), expected);
                }
                None => prop_assert_eq!(expected, None),
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_unobstructed_is_manhattan(n in 1..16usize, a in any::<(usize, usize)>(), b in any::<(usize, usize)>()) {
            let grid = Grid::new(n);
            let start = p(a.0 % n, a.1 % n);
            let end = p(b.0 % n, b.1 % n);

            let path = find_path(&grid, start, end).unwrap();
            prop_assert_eq!(path.len(), start.manhattan(&end));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dijkstra_bfs_agree(grid in grid_with_barriers(1..12usize, 0.25), a in any::<(usize, usize)>()) {
            let n = grid.rows();
            let source = p(a.0 % n, a.1 % n);

            let paths_d = ShortestPaths::on(&grid).run(source).unwrap();
            let paths_bfs = ShortestPaths::on(&grid).bfs().run(source).unwrap();

            for v in grid.points() {
                prop_assert_eq!(paths_d.dist(&v), paths_bfs.dist(&v));
                // With unit weights, the insertion order tie-break makes
                // Dijkstra expand vertices in the same order as BFS.
                prop_assert_eq!(paths_d.path_to(&v), paths_bfs.path_to(&v));
            }
        }
    }
}
