//! [Disjoint-set](https://en.wikipedia.org/wiki/Disjoint-set_data_structure)
//! forest with path compression and union by rank.
//!
//! # Examples
//!
//! ```
//! use tourgrid::common::DisjointSet;
//!
//! let mut sets = DisjointSet::new(["a", "b", "c", "d"]);
//!
//! sets.union(&"a", &"b");
//! sets.union(&"c", &"d");
//!
//! assert!(sets.same(&"a", &"b"));
//! assert!(!sets.same(&"b", &"c"));
//! assert_eq!(sets.set_count(), 2);
//! ```

use rustc_hash::FxHashMap;

use crate::core::id::IdType;

/// Partition of a set of elements into disjoint subsets.
///
/// Elements are stored in an arena and referred to by their position
/// internally, so the element type only needs to be hashable and comparable,
/// not addressable. The parent relation is always a forest: every `find`
/// terminates at a self-parented root, the set representative.
#[derive(Debug, Clone)]
pub struct DisjointSet<I> {
    items: Vec<I>,
    index: FxHashMap<I, usize>,
    parent: Vec<usize>,
    // Upper bound on the height of the subtree. Not exact once paths got
    // compressed.
    rank: Vec<u32>,
    sets: usize,
}

impl<I: IdType> DisjointSet<I> {
    /// Makes every element its own singleton set of rank 0. Repeated elements
    /// are registered once.
    pub fn new<T>(items: T) -> Self
    where
        T: IntoIterator<Item = I>,
    {
        let items = items.into_iter();
        let mut this = Self::with_capacity(items.size_hint().0);
        for item in items {
            this.insert(item);
        }
        this
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(capacity);

        Self {
            items: Vec::with_capacity(capacity),
            index,
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Registers a new singleton set. Returns `false` if the element was
    /// already registered, in which case nothing changes.
    pub fn insert(&mut self, item: I) -> bool {
        if self.index.contains_key(&item) {
            return false;
        }

        let position = self.items.len();
        self.index.insert(item.clone(), position);
        self.items.push(item);
        self.parent.push(position);
        self.rank.push(0);
        self.sets += 1;

        true
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn contains(&self, item: &I) -> bool {
        self.index.contains_key(item)
    }

    /// Returns the representative of the set containing the element, or `None`
    /// if the element was never registered.
    ///
    /// Every element on the walk to the root is re-parented directly to the
    /// root.
    pub fn find(&mut self, item: &I) -> Option<&I> {
        let position = *self.index.get(item)?;
        let root = self.find_root(position);
        Some(&self.items[root])
    }

    /// Merges the sets containing the two elements.
    ///
    /// Returns `true` if two different sets were merged, `false` if the
    /// elements already shared a set or one of them is not registered.
    pub fn union(&mut self, a: &I, b: &I) -> bool {
        let (Some(&a), Some(&b)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };

        let root_a = self.find_root(a);
        let root_b = self.find_root(b);

        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        self.sets -= 1;
        true
    }

    /// Returns `true` if both elements are registered and belong to the same
    /// set.
    pub fn same(&mut self, a: &I, b: &I) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&a), Some(&b)) => self.find_root(a) == self.find_root(b),
            _ => false,
        }
    }

    /// Rank of the set representative of the element.
    pub fn rank(&mut self, item: &I) -> Option<u32> {
        let position = *self.index.get(item)?;
        let root = self.find_root(position);
        Some(self.rank[root])
    }

    fn find_root(&mut self, position: usize) -> usize {
        let mut root = position;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = position;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }
}

impl<I: IdType> FromIterator<I> for DisjointSet<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter)
    }
}
