//! # Comparers
//!
//! Every comparison-based engine in this crate is parameterized by a [`Comparer`]: a
//! total order over `T`. Closures of the shape `Fn(&T, &T) -> Ordering` are comparers,
//! so `sort_by`-style call sites work unchanged:
//!
//! ```rust
//! use orderstat::cs::compare::{Comparer, NaturalOrder, Reversed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `T`.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// `a <= b` under this order.
    fn le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ascending order through `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the wrapped comparer. Selecting index `k` under `Reversed(NaturalOrder)`
/// yields the `k`-th largest element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_and_reversed() {
        assert_eq!(NaturalOrder.compare(&3, &3), Ordering::Equal);
        assert!(NaturalOrder.le(&3, &4));
        assert!(!Reversed(NaturalOrder).le(&3, &4));
        assert!(Reversed(NaturalOrder).le(&4, &4));
    }

    #[test]
    fn closure_comparer() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.compare(&-5, &3), Ordering::Greater);
        assert_eq!(Reversed(by_abs).compare(&-5, &3), Ordering::Less);
    }
}
