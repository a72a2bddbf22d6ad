//! Error types for container operations.
//!
//! Every failure is local and recoverable: the container is left exactly as
//! it was before the failing call.

use core::fmt;

/// Errors reported by [`SkipList`](crate::SkipList) and
/// [`PriorityQueue`](crate::PriorityQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The container holds no elements.
    EmptyContainer,
    /// A positional lookup was outside `0..length`.
    IndexOutOfRange {
        /// Number of elements at the time of the call.
        length: usize,
        /// The index that was requested.
        index: usize,
    },
    /// A bounded container was already at capacity.
    CapacityExceeded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyContainer => write!(f, "container is empty"),
            Error::IndexOutOfRange { length, index } => {
                write!(f, "index out of range: length {}, index {}", length, index)
            }
            Error::CapacityExceeded => write!(f, "capacity exceeded"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Returned when a bounded queue is full. Gives the rejected value back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded<T>(pub T);

impl<T> CapacityExceeded<T> {
    /// Returns the value that could not be stored.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for CapacityExceeded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity exceeded")
    }
}

impl<T: fmt::Debug> std::error::Error for CapacityExceeded<T> {}

impl<T> From<CapacityExceeded<T>> for Error {
    fn from(_: CapacityExceeded<T>) -> Self {
        Error::CapacityExceeded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::EmptyContainer.to_string(), "container is empty");
        assert_eq!(
            Error::IndexOutOfRange {
                length: 6,
                index: 6
            }
            .to_string(),
            "index out of range: length 6, index 6"
        );
        assert_eq!(CapacityExceeded(3).to_string(), "capacity exceeded");
    }

    #[test]
    fn rejected_value_converts() {
        fn push(full: bool) -> Result<()> {
            if full {
                return Err(CapacityExceeded("late").into());
            }
            Ok(())
        }

        assert_eq!(push(false), Ok(()));
        assert_eq!(push(true), Err(Error::CapacityExceeded));
        assert_eq!(CapacityExceeded(9).into_inner(), 9);
    }
}
