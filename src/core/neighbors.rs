use super::id::IdType;

/// Graphs whose vertices can enumerate their neighbors.
///
/// The order in which neighbors are reported is part of the contract of each
/// implementation: algorithms visit neighbors in this order, which decides how
/// ties between equally good choices are broken.
pub trait Neighbors {
    type VertexId: IdType;

    type NeighborsIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    fn neighbors(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_>;

    /// Number of vertices, if it's known upfront. Used for preallocation only.
    fn vertex_count_hint(&self) -> Option<usize> {
        None
    }
}

impl<G> Neighbors for &G
where
    G: Neighbors,
{
    type VertexId = G::VertexId;

    type NeighborsIter<'a> = G::NeighborsIter<'a>
    where
        Self: 'a;

    fn neighbors(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_> {
        (**self).neighbors(from)
    }

    fn vertex_count_hint(&self) -> Option<usize> {
        (**self).vertex_count_hint()
    }
}
