//! Comparator abstraction shared by every container in this crate.
//!
//! Containers never rely on `Ord` directly. The ordering is a value bound at
//! construction, which lets the same element type be kept in ascending order
//! in one container and descending (or by a projected field) in another.
//!
//! Any `Fn(&T, &T) -> Ordering` is a comparator:
//!
//! ```
//! use std::cmp::Ordering;
//! use tile_collections::Comparator;
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
//! ```

use core::cmp::Ordering;

/// A total order over `T`.
///
/// Implementations must be pure: containers call `compare` many times per
/// operation and assume the answer for a given pair never changes while the
/// pair is stored. The order must be reflexive, antisymmetric and transitive.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` orders strictly before `b`.
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_lt()
    }

    /// Returns `true` if `a` and `b` compare equal.
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_eq()
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ascending order as defined by `T: Ord`.
///
/// ```
/// use tile_collections::{Comparator, Natural};
///
/// assert!(Natural.less(&1.to_string(), &2.to_string()));
/// assert!(Natural.equal(&7u64, &7u64));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Numeric types with a total order, floats included.
///
/// Integers use their usual order. `f32` and `f64` use `total_cmp`, which
/// places `-0.0` before `0.0` and sorts NaNs to the ends, so every value has
/// a fixed position.
pub trait RealNumber: Copy {
    /// Compares `self` with `other`.
    fn real_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_real_number_for_int {
    ($($ty:ty),*) => {
        $(
            impl RealNumber for $ty {
                #[inline]
                fn real_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_real_number_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl RealNumber for f32 {
    #[inline]
    fn real_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl RealNumber for f64 {
    #[inline]
    fn real_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Ascending order over any [`RealNumber`], floats included.
///
/// ```
/// use tile_collections::{Comparator, Numeric};
///
/// assert!(Numeric.less(&-1.5f64, &0.25));
/// assert!(Numeric.equal(&3u8, &3u8));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Numeric;

impl<T: RealNumber> Comparator<T> for Numeric {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.real_cmp(b)
    }
}

/// Flips the order of the wrapped comparator.
///
/// Wrapping the comparator of a [`PriorityQueue`](crate::PriorityQueue) turns
/// it from a min-queue into a max-queue.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Converts a signum-style comparison result (`< 0`, `0`, `> 0`) into an
/// [`Ordering`].
///
/// ```
/// use std::cmp::Ordering;
/// use tile_collections::compare::from_sign;
///
/// assert_eq!(from_sign(-3), Ordering::Less);
/// assert_eq!(from_sign(0), Ordering::Equal);
/// assert_eq!(from_sign(1), Ordering::Greater);
/// ```
#[inline]
pub const fn from_sign(sign: i32) -> Ordering {
    if sign < 0 {
        Ordering::Less
    } else if sign == 0 {
        Ordering::Equal
    } else {
        Ordering::Greater
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_orders_ascending() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn numeric_orders_integers() {
        assert_eq!(Numeric.compare(&-4i64, &2i64), Ordering::Less);
        assert_eq!(Numeric.compare(&7u16, &7u16), Ordering::Equal);
        assert_eq!(Numeric.compare(&u128::MAX, &0u128), Ordering::Greater);
    }

    #[test]
    fn numeric_orders_floats() {
        assert_eq!(Numeric.compare(&1.5f64, &2.0), Ordering::Less);
        assert_eq!(Numeric.compare(&0.1f32, &0.1f32), Ordering::Equal);
        assert!(Numeric.less(&f64::NEG_INFINITY, &f64::MIN));
        assert!(Numeric.less(&-0.0f64, &0.0));
        assert!(Numeric.less(&f64::INFINITY, &f64::NAN));
        assert!(Numeric.equal(&f64::NAN, &f64::NAN));
    }

    #[test]
    fn reverse_flips() {
        let cmp = Reverse(Natural);
        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
        assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
        assert!(cmp.less(&5, &4));
    }

    #[test]
    fn closure_is_comparator() {
        let by_abs = |a: &i64, b: &i64| a.abs().cmp(&b.abs());
        assert!(by_abs.equal(&-3, &3));
        assert!(by_abs.less(&-1, &2));
    }

    #[test]
    fn signum_closure_adapts() {
        let legacy = |a: &i32, b: &i32| from_sign(a - b);
        assert!(legacy.less(&1, &9));
        assert!(legacy.equal(&4, &4));
    }
}
