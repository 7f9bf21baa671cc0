use std::{
    cmp::Reverse,
    collections::{hash_map::Entry, BinaryHeap, HashSet},
    hash::BuildHasherDefault,
};

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    common::VisitSet,
    core::{
        weight::{GetWeight, Weight, Weighted},
        Neighbors, Observer,
    },
};

use super::{Error, SearchEvent, ShortestPaths};

pub fn dijkstra<G, W, F, O>(
    graph: &G,
    source: G::VertexId,
    goal: Option<G::VertexId>,
    edge_weight: F,
    mut observer: O,
) -> Result<ShortestPaths<W, G>, Error>
where
    G: Neighbors,
    W: Weight,
    F: GetWeight<G::VertexId, W>,
    O: Observer<SearchEvent<G::VertexId, W>>,
{
    // Not using FixedBitSet because the algorithm supports early termination
    // when reaching given goal.
    let mut closed: FxHashSet<_> = HashSet::with_capacity_and_hasher(
        graph.vertex_count_hint().unwrap_or(32),
        BuildHasherDefault::default(),
    );
    let mut open = FxHashSet::default();

    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = BinaryHeap::new();

    // Ties in distance are broken by the order of insertion into the queue.
    let mut order = 0u64;

    dist.insert(source.clone(), W::zero());
    open.insert(source.clone());
    queue.push(Reverse(Weighted(
        source.clone(),
        (W::Ord::from(W::zero()), order),
    )));

    while let Some(Reverse(Weighted(vertex, (vertex_dist, _)))) = queue.pop() {
        let vertex_dist: W = vertex_dist.into();

        // This can happen due to duplication of vertices when doing relaxation
        // in our implementation.
        if closed.is_visited(&vertex) {
            continue;
        }

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
            if closed.is_visited(&next) {
                continue;
            }

            let edge_dist = edge_weight.get(&vertex, &next);

            debug_assert!(
                W::is_unsigned() || edge_dist >= W::zero(),
                "negative edge weight between {vertex:?} and {next:?}"
            );

            let next_dist = vertex_dist.clone() + edge_dist;

            match dist.entry(next.clone()) {
                Entry::Occupied(curr_dist) => {
                    if next_dist < *curr_dist.get() {
                        *curr_dist.into_mut() = next_dist.clone();
                    } else {
                        continue;
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(next_dist.clone());
                }
            }

            // A textbook version of the algorithm would update the priority of
            // `next`. Adding it as a new item leaves a stale duplicate behind,
            // which is skipped when popped.
            order += 1;
            queue.push(Reverse(Weighted(
                next.clone(),
                (next_dist.clone().into(), order),
            )));
            pred.insert(next.clone(), vertex.clone());
            open.insert(next.clone());

            trace!("opened {next:?} at {order}");
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
        "dijkstra from {source:?} closed {} vertices, {} left open",
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
