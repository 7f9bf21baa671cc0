use std::marker::PhantomData;

use crate::core::{
    weight::{self, GetWeight, IsConstWeight},
    Neighbors, Observer, Silent, Weight,
};

use super::{algo, bfs::bfs, dijkstra::dijkstra, Algo, Error, SearchEvent, ShortestPaths};

pub struct ShortestPathsBuilder<'a, W, G, F, A, O>
where
    G: Neighbors,
{
    graph: &'a G,
    goal: Option<G::VertexId>,
    edge_weight: F,
    algo: A,
    observer: O,
    ty: PhantomData<fn() -> W>,
}

impl<W, G> ShortestPaths<W, G>
where
    G: Neighbors,
{
    /// Starts building a search on the graph. Every step costs one unless
    /// specified otherwise.
    pub fn on(graph: &G) -> ShortestPathsBuilder<'_, W, G, weight::Unit, algo::Dijkstra, Silent> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            edge_weight: weight::Unit,
            algo: algo::Dijkstra,
            observer: Silent,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, F, A, O> ShortestPathsBuilder<'a, W, G, F, A, O>
where
    G: Neighbors,
{
    /// Stops the search as soon as the goal is closed.
    pub fn goal(self, goal: G::VertexId) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn edge_weight<F2>(self, edge_weight: F2) -> ShortestPathsBuilder<'a, W, G, F2, A, O>
    where
        F2: GetWeight<G::VertexId, W>,
        W: Weight,
    {
        ShortestPathsBuilder {
            edge_weight,
            graph: self.graph,
            goal: self.goal,
            algo: self.algo,
            observer: self.observer,
            ty: PhantomData,
        }
    }

    /// Weight of the edge between two adjacent vertices given by a closure.
    pub fn edge_weight_fn<F2>(self, edge_weight: F2) -> ShortestPathsBuilder<'a, W, G, F2, A, O>
    where
        F2: Fn(&G::VertexId, &G::VertexId) -> W,
        W: Weight,
    {
        self.edge_weight(edge_weight)
    }

    pub fn unit_weight(self) -> ShortestPathsBuilder<'a, W, G, weight::Unit, A, O> {
        ShortestPathsBuilder {
            edge_weight: weight::Unit,
            graph: self.graph,
            goal: self.goal,
            algo: self.algo,
            observer: self.observer,
            ty: PhantomData,
        }
    }

    pub fn dijkstra(self) -> ShortestPathsBuilder<'a, W, G, F, algo::Dijkstra, O> {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            edge_weight: self.edge_weight,
            algo: algo::Dijkstra,
            observer: self.observer,
            ty: PhantomData,
        }
    }

    pub fn bfs(self) -> ShortestPathsBuilder<'a, W, G, F, algo::Bfs, O>
    where
        F: IsConstWeight,
    {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            edge_weight: self.edge_weight,
            algo: algo::Bfs,
            observer: self.observer,
            ty: PhantomData,
        }
    }

    pub fn using(self, algo: Algo) -> ShortestPathsBuilder<'a, W, G, F, algo::SpecificAlgo, O> {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            edge_weight: self.edge_weight,
            algo: algo::SpecificAlgo(algo),
            observer: self.observer,
            ty: PhantomData,
        }
    }

    /// Reports every step of the search to the observer.
    pub fn observe<O2>(self, observer: O2) -> ShortestPathsBuilder<'a, W, G, F, A, O2> {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: self.goal,
            edge_weight: self.edge_weight,
            algo: self.algo,
            observer,
            ty: PhantomData,
        }
    }
}

impl<'a, W, G, F, O> ShortestPathsBuilder<'a, W, G, F, algo::Dijkstra, O>
where
    G: Neighbors,
{
    pub fn run(self, start: G::VertexId) -> Result<ShortestPaths<W, G>, Error>
    where
        F: GetWeight<G::VertexId, W>,
        W: Weight,
        O: Observer<SearchEvent<G::VertexId, W>>,
    {
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            observer,
            ..
        } = self;

        dijkstra(graph, start, goal, edge_weight, observer)
    }
}

impl<'a, W, G, F, O> ShortestPathsBuilder<'a, W, G, F, algo::Bfs, O>
where
    G: Neighbors,
{
    pub fn run(self, start: G::VertexId) -> Result<ShortestPaths<W, G>, Error>
    where
        F: GetWeight<G::VertexId, W> + IsConstWeight,
        W: Weight,
        O: Observer<SearchEvent<G::VertexId, W>>,
    {
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            observer,
            ..
        } = self;

        match edge_weight.get_const() {
            Some(step) => bfs(graph, start, goal, step, observer),
            None => dijkstra(graph, start, goal, edge_weight, observer),
        }
    }
}

impl<'a, W, G, F, O> ShortestPathsBuilder<'a, W, G, F, algo::SpecificAlgo, O>
where
    G: Neighbors,
{
    pub fn run(self, start: G::VertexId) -> Result<ShortestPaths<W, G>, Error>
    where
        F: GetWeight<G::VertexId, W>,
        W: Weight,
        O: Observer<SearchEvent<G::VertexId, W>>,
    {
        let ShortestPathsBuilder {
            graph,
            goal,
            edge_weight,
            algo,
            observer,
            ..
        } = self;

        match (algo.0, edge_weight.get_const()) {
            (Algo::Bfs, Some(step)) => bfs(graph, start, goal, step, observer),
            _ => dijkstra(graph, start, goal, edge_weight, observer),
        }
    }
}
