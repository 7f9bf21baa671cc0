use fixedbitset::FixedBitSet;

use crate::{common::VisitSet, core::id::IdType, storage::AdjList};

use super::Direction;

/// Walks every edge of the tree containing `root` twice, first away from the
/// root and then back, visiting neighbors in adjacency list order.
///
/// Vertices are dense indices of the adjacency list. Uses an explicit stack,
/// so the depth of the tree is not limited by the call stack.
pub fn double_tree<VI: IdType>(graph: &AdjList<VI>, root: usize) -> Vec<(usize, usize, Direction)> {
    let mut legs = Vec::new();

    if root >= graph.vertex_count() {
        return legs;
    }

    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    visited.visit(root);

    // Vertex and the position of the next neighbor to try.
    let mut stack = vec![(root, 0)];

    while let Some(top) = stack.last_mut() {
        let (vertex, pos) = *top;
        let neighbors = graph.neighbor_indices(vertex);

        match neighbors[pos..].iter().position(|&next| !visited.is_visited(&next)) {
            Some(offset) => {
                let next = neighbors[pos + offset];
                top.1 = pos + offset + 1;

                visited.visit(next);
                legs.push((vertex, next, Direction::Outbound));
                stack.push((next, 0));
            }
            None => {
                stack.pop();

                if let Some(&(parent, _)) = stack.last() {
                    legs.push((vertex, parent, Direction::Return));
                }
            }
        }
    }

    legs
}

#[cfg(test)]
mod tests {
    use crate::algo::routing::Direction::{Outbound, Return};

    use super::*;

    #[test]
    fn star() {
        let mut graph = AdjList::new();
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);

        assert_eq!(
            double_tree(&graph, 0),
            vec![(0, 1, Outbound), (1, 0, Return), (0, 2, Outbound), (2, 0, Return)]
        );
        assert_eq!(
            double_tree(&graph, 1),
            vec![(1, 0, Outbound), (0, 2, Outbound), (2, 0, Return), (0, 1, Return)]
        );
    }

    #[test]
    fn isolated_and_unknown_root() {
        let mut graph = AdjList::new();
        graph.add_vertex('a');

        assert!(double_tree(&graph, 0).is_empty());
        assert!(double_tree(&graph, 5).is_empty());
    }

    #[test]
    fn deep_path_does_not_recurse() {
        let mut graph = AdjList::new();
        for i in 0..100_000u32 {
            graph.add_edge(i, i + 1);
        }

        let legs = double_tree(&graph, 0);
        assert_eq!(legs.len(), 200_000);
        assert_eq!(legs.last(), Some(&(1, 0, Return)));
    }
}
