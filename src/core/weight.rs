use std::{cmp::Ordering, ops::Add};

mod ordered_float;

pub use ordered_float::OrderedFloat;

/// A type usable as an edge weight and a path distance.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    /// Totally ordered counterpart used in priority queues and sorting.
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;
    fn inf() -> Self;
    fn is_unsigned() -> bool;
}

/// Weight of the edge between two adjacent vertices.
pub trait GetWeight<V, W>
where
    W: Weight,
{
    fn get(&self, from: &V, to: &V) -> W;

    fn get_const(&self) -> Option<W> {
        None
    }

    fn is_const(&self) -> bool {
        self.get_const().is_some()
    }
}

pub trait IsConstWeight {}

impl<F, V, W> GetWeight<V, W> for F
where
    F: Fn(&V, &V) -> W,
    W: Weight,
{
    fn get(&self, from: &V, to: &V) -> W {
        (self)(from, to)
    }
}

/// Every step costs one.
#[derive(Debug, Clone, Copy)]
pub struct Unit;

impl<V> GetWeight<V, u32> for Unit {
    fn get(&self, _from: &V, _to: &V) -> u32 {
        1
    }

    fn get_const(&self) -> Option<u32> {
        Some(1)
    }
}

impl IsConstWeight for Unit {}

/// Pairs a value with a weight, comparing only by the weight.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_ignores_payload() {
        assert_eq!(Weighted("a", 1), Weighted("b", 1));
        assert!(Weighted("z", 1) < Weighted("a", 2));
    }

    #[test]
    fn float_ord_is_total() {
        let mut weights = vec![2.0f64, f64::INFINITY, 0.5, 1.0];
        weights.sort_by_key(|w| <f64 as Weight>::Ord::from(*w));
        assert_eq!(weights, vec![0.5, 1.0, 2.0, f64::INFINITY]);
    }

    #[test]
    fn unit_is_const() {
        assert_eq!(GetWeight::<(), u32>::get_const(&Unit), Some(1));
        assert!(!GetWeight::<(), u32>::is_const(&|_: &(), _: &()| 2u32));
    }
}
