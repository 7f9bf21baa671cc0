use std::{collections::HashSet, hash::BuildHasher};

use fixedbitset::FixedBitSet;

use crate::core::id::{IdType, IntegerIdType};

/// A set of visited vertices.
pub trait VisitSet<I: IdType> {
    /// Marks the element as visited.
    ///
    /// Returns `true` when this is the first time the element is visited.
    fn visit(&mut self, id: I) -> bool;

    /// Returns `true` if the element is marked as visited.
    fn is_visited(&self, id: &I) -> bool;

    /// Returns the number of visited elements.
    fn visited_count(&self) -> usize;
}

impl<I: IdType, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }
}

impl<I: IntegerIdType> VisitSet<I> for FixedBitSet {
    fn visit(&mut self, id: I) -> bool {
        if self.len() <= id.as_usize() {
            self.grow(id.as_usize() + 1);
        }
        !self.put(id.as_usize())
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id.as_usize())
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    fn exercise<S: VisitSet<usize>>(mut set: S) {
        assert!(set.visit(3));
        assert!(!set.visit(3));
        assert!(set.visit(70));
        assert!(set.is_visited(&3));
        assert!(!set.is_visited(&4));
        assert_eq!(set.visited_count(), 2);
    }

    #[test]
    fn bit_set_grows() {
        exercise(FixedBitSet::with_capacity(4));
    }

    #[test]
    fn hash_set() {
        exercise(FxHashSet::default());
    }
}
