use rustc_hash::FxHashSet;

use crate::core::{id::IdType, Edge};

/// Undirected weighted graph stored as a vertex list and an edge list.
///
/// Both lists keep the insertion order. For spanning trees the edge order is
/// significant: it breaks ties between edges of equal weight.
#[derive(Debug, Clone)]
pub struct EdgeList<VI, W> {
    vertices: Vec<VI>,
    present: FxHashSet<VI>,
    edges: Vec<Edge<VI, W>>,
}

impl<VI: IdType, W> EdgeList<VI, W> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            present: FxHashSet::default(),
            edges: Vec::new(),
        }
    }

    /// Complete graph over the given vertices.
    ///
    /// Edges are generated for pairs `(i, j)` with `i < j` in the order of the
    /// vertices. Repeated vertices are kept only once.
    pub fn complete<T, F>(vertices: T, mut weight: F) -> Self
    where
        T: IntoIterator<Item = VI>,
        F: FnMut(&VI, &VI) -> W,
    {
        let mut graph = Self::new();
        graph.extend_vertices(vertices);

        let n = graph.vertices.len();
        graph.edges.reserve(n * n.saturating_sub(1) / 2);

        for i in 0..n {
            for j in (i + 1)..n {
                let u = &graph.vertices[i];
                let v = &graph.vertices[j];
                let edge = Edge::new(u.clone(), v.clone(), weight(u, v));
                graph.edges.push(edge);
            }
        }

        graph
    }

    /// Adds a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: VI) -> bool {
        if self.present.insert(vertex.clone()) {
            self.vertices.push(vertex);
            true
        } else {
            false
        }
    }

    pub fn extend_vertices<T>(&mut self, vertices: T)
    where
        T: IntoIterator<Item = VI>,
    {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Adds an edge, registering its endpoints as vertices if needed.
    pub fn add_edge(&mut self, from: VI, to: VI, weight: W) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        self.edges.push(Edge::new(from, to, weight));
    }

    pub fn extend_with_edges<T, E>(&mut self, edges: T)
    where
        T: IntoIterator<Item = E>,
        E: Into<Edge<VI, W>>,
    {
        for edge in edges {
            let Edge { from, to, weight } = edge.into();
            self.add_edge(from, to, weight);
        }
    }

    pub fn vertices(&self) -> &[VI] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge<VI, W>] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, vertex: &VI) -> bool {
        self.present.contains(vertex)
    }
}

impl<VI: IdType, W> Default for EdgeList<VI, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<VI: IdType, W, E> FromIterator<E> for EdgeList<VI, W>
where
    E: Into<Edge<VI, W>>,
{
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut graph = Self::new();
        graph.extend_with_edges(iter);
        graph
    }
}
