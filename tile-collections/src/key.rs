//! Handles into node storage.
//!
//! Linked structures in this crate store links as integer handles rather
//! than references. A reserved sentinel (`MAX`) stands for "no link", which
//! keeps a link the size of the integer instead of `Option<usize>`.

/// An integer handle with a sentinel "none" value.
///
/// # Example
///
/// ```
/// use tile_collections::Key;
///
/// let key: u32 = 5;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::from_usize(7).as_usize(), 7);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value meaning "no node".
    const NONE: Self;

    /// Number of slots addressable without colliding with [`NONE`](Self::NONE).
    const MAX_SLOTS: usize;

    /// Creates a key from a slot number.
    fn from_usize(val: usize) -> Self;

    /// Returns the slot number.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this refers to a slot.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;
                const MAX_SLOTS: usize = if (<$ty>::MAX as u128) < (usize::MAX as u128) {
                    <$ty>::MAX as usize
                } else {
                    usize::MAX
                };

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as $ty
                }

                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel() {
        assert!(u16::NONE.is_none());
        assert!(u32::NONE.is_none());
        assert!(u64::NONE.is_none());
        assert!(usize::NONE.is_none());
        assert!(0u32.is_some());
    }

    #[test]
    fn slot_limits() {
        assert_eq!(u16::MAX_SLOTS, u16::MAX as usize);
        assert_eq!(u32::MAX_SLOTS, u32::MAX as usize);
        assert_eq!(usize::MAX_SLOTS, usize::MAX);
    }

    #[test]
    fn slot_numbers_survive_conversion() {
        for i in [0usize, 1, 63, 64, 4095] {
            assert_eq!(u16::from_usize(i).as_usize(), i);
            assert_eq!(u32::from_usize(i).as_usize(), i);
        }
    }
}
