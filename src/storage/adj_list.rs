use rustc_hash::FxHashMap;

use crate::core::{id::IdType, Edge, Neighbors};

/// Undirected graph stored as ordered neighbor lists.
///
/// Vertices get dense indices in the order they are added. Neighbors of a
/// vertex are kept in the order their edges were added, which is the order in
/// which traversals visit them.
#[derive(Debug, Clone)]
pub struct AdjList<VI> {
    vertices: Vec<VI>,
    index: FxHashMap<VI, usize>,
    neighbors: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<VI: IdType> AdjList<VI> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            neighbors: Vec::new(),
            edge_count: 0,
        }
    }

    /// Builds the adjacency list of the edges, in their order.
    pub fn from_edges<'a, W: 'a, T>(edges: T) -> Self
    where
        VI: 'a,
        T: IntoIterator<Item = &'a Edge<VI, W>>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge.from.clone(), edge.to.clone());
        }
        graph
    }

    /// Adds a vertex if not present. Returns its dense index.
    pub fn add_vertex(&mut self, vertex: VI) -> usize {
        if let Some(&index) = self.index.get(&vertex) {
            return index;
        }

        let index = self.vertices.len();
        self.index.insert(vertex.clone(), index);
        self.vertices.push(vertex);
        self.neighbors.push(Vec::new());
        index
    }

    /// Adds an undirected edge, registering its endpoints if needed.
    pub fn add_edge(&mut self, from: VI, to: VI) {
        let u = self.add_vertex(from);
        let v = self.add_vertex(to);

        self.neighbors[u].push(v);
        // Self-loop is reported only once.
        if u != v {
            self.neighbors[v].push(u);
        }
        self.edge_count += 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertices(&self) -> &[VI] {
        &self.vertices
    }

    pub fn contains_vertex(&self, vertex: &VI) -> bool {
        self.index.contains_key(vertex)
    }

    /// Vertex with the dense index.
    pub fn vertex(&self, index: usize) -> Option<&VI> {
        self.vertices.get(index)
    }

    /// Neighbors of the vertex with the dense index, as dense indices.
    pub fn neighbor_indices(&self, index: usize) -> &[usize] {
        self.neighbors.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<VI: IdType> Default for AdjList<VI> {
    fn default() -> Self {
        Self::new()
    }
}

impl<VI: IdType> Neighbors for AdjList<VI> {
    type VertexId = VI;

    type NeighborsIter<'a> = AdjNeighbors<'a, VI>
    where
        Self: 'a;

    fn neighbors(&self, from: &VI) -> Self::NeighborsIter<'_> {
        let indices = self
            .index
            .get(from)
            .map(|&index| self.neighbors[index].as_slice())
            .unwrap_or(&[]);

        AdjNeighbors {
            vertices: &self.vertices,
            indices: indices.iter(),
        }
    }

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertex_count())
    }
}

pub struct AdjNeighbors<'a, VI> {
    vertices: &'a [VI],
    indices: std::slice::Iter<'a, usize>,
}

impl<VI: Clone> Iterator for AdjNeighbors<'_, VI> {
    type Item = VI;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices
            .next()
            .map(|&index| self.vertices[index].clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}
