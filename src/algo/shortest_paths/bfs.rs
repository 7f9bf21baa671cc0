use std::collections::{HashSet, VecDeque};
use std::hash::BuildHasherDefault;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    common::VisitSet,
    core::{weight::Weight, Neighbors, Observer},
};

use super::{Error, SearchEvent, ShortestPaths};

/// Breadth-first search where every edge costs `step`.
///
/// Vertices are discovered in the same order as Dijkstra's algorithm with the
/// insertion order tie-break would discover them, so the resulting paths are
/// identical.
pub fn bfs<G, W, O>(
    graph: &G,
    source: G::VertexId,
    goal: Option<G::VertexId>,
    step: W,
    mut observer: O,
) -> Result<ShortestPaths<W, G>, Error>
where
    G: Neighbors,
    W: Weight,
    O: Observer<SearchEvent<G::VertexId, W>>,
{
    debug_assert!(W::is_unsigned() || step >= W::zero(), "negative edge weight");

    let mut closed: FxHashSet<_> = HashSet::with_capacity_and_hasher(
        graph.vertex_count_hint().unwrap_or(32),
        BuildHasherDefault::default(),
    );
    let mut open = FxHashSet::default();

    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = VecDeque::new();

    dist.insert(source.clone(), W::zero());
    open.insert(source.clone());
    queue.push_back((source.clone(), W::zero()));

    while let Some((vertex, vertex_dist)) = queue.pop_front() {
        open.remove(&vertex);

        if goal.as_ref() == Some(&vertex) {
            trace!("reached goal {vertex:?}");
            closed.visit(vertex.clone());
            observer.notify(SearchEvent::Reached {
                vertex,
                dist: vertex_dist,
            });
            break;
        }

        for next in graph.neighbors(&vertex) {
            // With a constant weight, the first discovery is the best one.
            if dist.contains_key(&next) {
                continue;
            }

            let next_dist = vertex_dist.clone() + step.clone();

            dist.insert(next.clone(), next_dist.clone());
            pred.insert(next.clone(), vertex.clone());
            open.insert(next.clone());
            queue.push_back((next.clone(), next_dist.clone()));

            observer.notify(SearchEvent::Opened {
                vertex: next,
                dist: next_dist,
            });
        }

        closed.visit(vertex.clone());

        if vertex != source {
            observer.notify(SearchEvent::Closed { vertex });
        }
    }

    debug!(
        "bfs from {source:?} closed {} vertices, {} left open",
        closed.visited_count(),
        open.len()
    );

    if let Some(ref goal) = goal {
        if !closed.is_visited(goal) {
            return Err(Error::GoalNotReached);
        }
    }

    Ok(ShortestPaths {
        source,
        dist,
        pred,
        open,
        closed,
    })
}
