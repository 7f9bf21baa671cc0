//! Traits used for identifying vertices in graphs.
//!
//! Any type that is cloneable, totally ordered, hashable and debuggable can be
//! used as a vertex identifier ([`IdType`]). Grid cells use
//! [`Point`](crate::core::Point), routing uses indices into the list of sites.
//! Algorithms that want to store per-vertex data in contiguous arrays or bit
//! sets additionally require [`IntegerIdType`].

use std::{fmt::Debug, hash::Hash};

/// A unique identification of a vertex in a graph.
///
/// Identity is explicit: two vertices are the same if and only if their IDs
/// compare equal, never because they share an address.
pub trait IdType: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> IdType for T {}

/// Marker that an ID type is representable by a dense
/// integer.
///
/// All integer values up to some upper bound should be valid IDs and there
/// should be no discontinuity, so that the IDs can index a contiguous array.
pub trait IntegerIdType: IdType + Copy {
    /// Converts an ID into the corresponding `usize`.
    fn as_usize(&self) -> usize;
}

macro_rules! impl_integer_id {
    ($ty:ty) => {
        impl IntegerIdType for $ty {
            #[inline]
            fn as_usize(&self) -> usize {
                *self as usize
            }
        }
    };
}

impl_integer_id!(usize);
