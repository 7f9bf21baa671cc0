use fixedbitset::FixedBitSet;

use crate::{common::VisitSet, core::id::IdType, storage::AdjList};

use super::Direction;

/// Visits the tree containing `root` in depth-first preorder, moving directly
/// from one vertex to the next, and returns to the root at the end.
///
/// A leg is [`Direction::Return`] if its destination was visited before. A
/// root with no other vertex in its tree gets no legs at all, not even a
/// return to itself.
pub fn shortcut<VI: IdType>(graph: &AdjList<VI>, root: usize) -> Vec<(usize, usize, Direction)> {
    let order = preorder(graph, root);

    if order.len() < 2 {
        return Vec::new();
    }

    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    visited.visit(root);

    order
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .chain(order.last().map(|&last| (last, root)))
        .map(|(from, to)| {
            let direction = if !visited.visit(to) {
                Direction::Return
            } else {
                Direction::Outbound
            };
            (from, to, direction)
        })
        .collect()
}

fn preorder<VI: IdType>(graph: &AdjList<VI>, root: usize) -> Vec<usize> {
    let mut order = Vec::new();

    if root >= graph.vertex_count() {
        return order;
    }

    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut stack = vec![root];

    while let Some(vertex) = stack.pop() {
        if !visited.visit(vertex) {
            continue;
        }

        order.push(vertex);

        // Reversed so that the first neighbor is visited first.
        for &next in graph.neighbor_indices(vertex).iter().rev() {
            if !visited.is_visited(&next) {
                stack.push(next);
            }
        }
    }

    order
}
