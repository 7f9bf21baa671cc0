use crate::{
    core::{id::IdType, Observer, Silent, Weight},
    storage::EdgeList,
};

use super::{kruskal::kruskal, SpanningEvent, SpanningTree};

pub struct SpanningTreeBuilder<'a, VI, W, O> {
    graph: &'a EdgeList<VI, W>,
    observer: O,
}

impl<VI, W> SpanningTree<VI, W>
where
    VI: IdType,
{
    pub fn on(graph: &EdgeList<VI, W>) -> SpanningTreeBuilder<'_, VI, W, Silent> {
        SpanningTreeBuilder {
            graph,
            observer: Silent,
        }
    }
}

impl<'a, VI, W, O> SpanningTreeBuilder<'a, VI, W, O>
where
    VI: IdType,
{
    /// Reports every considered edge to the observer.
    pub fn observe<O2>(self, observer: O2) -> SpanningTreeBuilder<'a, VI, W, O2> {
        SpanningTreeBuilder {
            graph: self.graph,
            observer,
        }
    }

    pub fn run(self) -> SpanningTree<VI, W>
    where
        W: Weight,
        O: Observer<SpanningEvent<VI, W>>,
    {
        kruskal(self.graph, self.observer)
    }
}
