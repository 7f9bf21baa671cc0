use log::{debug, trace};

use crate::{
    common::DisjointSet,
    core::{id::IdType, Observer, Weight},
    storage::EdgeList,
};

use super::{SpanningEvent, SpanningTree};

pub fn kruskal<VI, W, O>(graph: &EdgeList<VI, W>, mut observer: O) -> SpanningTree<VI, W>
where
    VI: IdType,
    W: Weight,
    O: Observer<SpanningEvent<VI, W>>,
{
    let vertex_count = graph.vertex_count();
    let target = vertex_count.saturating_sub(1);

    let mut sets = DisjointSet::new(graph.vertices().iter().cloned());

    let mut sorted = graph.edges().iter().collect::<Vec<_>>();
    // Stable sort, equal weights keep the order of the edge list.
    sorted.sort_by_key(|edge| W::Ord::from(edge.weight.clone()));

    let mut edges = Vec::with_capacity(target);

    for edge in sorted {
        if edges.len() == target {
            break;
        }

        if sets.union(&edge.from, &edge.to) {
            trace!("accepted {:?} - {:?}", edge.from, edge.to);
            edges.push(edge.clone());
            observer.notify(SpanningEvent::Accepted(edge.clone()));
        } else {
            observer.notify(SpanningEvent::Rejected(edge.clone()));
        }
    }

    debug!(
        "kruskal accepted {} of {} edges over {} vertices",
        edges.len(),
        graph.edge_count(),
        vertex_count
    );

    SpanningTree {
        edges,
        vertex_count,
    }
}
