//! Binary min-heap priority queue, bounded or unbounded.
//!
//! Elements live in a dense `Vec` laid out as a complete binary tree: the
//! parent of slot `i` is `(i - 1) / 2` and its children are `2i + 1` and
//! `2i + 2`. Every element compares less than or equal to both children.
//!
//! # Capacity modes
//!
//! | Mode | Constructed with | Storage |
//! |------|------------------|---------|
//! | Unbounded | capacity `0` | starts at 64 slots, grows on demand, shrinks as it drains |
//! | Bounded | capacity `n > 0` | exactly `n` slots, allocated once, never resized |
//!
//! # Example
//!
//! ```
//! use tile_collections::{Error, Natural, PriorityQueue};
//!
//! let mut pq = PriorityQueue::new(2, Natural);
//! pq.enqueue(5).unwrap();
//! pq.enqueue(1).unwrap();
//! assert!(pq.enqueue(3).is_err()); // bounded at 2
//!
//! assert_eq!(pq.dequeue(), Ok(1));
//! assert_eq!(pq.dequeue(), Ok(5));
//! assert_eq!(pq.dequeue(), Err(Error::EmptyContainer));
//! ```
//!
//! Ties dequeue in no particular order.

use core::fmt;

use crate::compare::Comparator;
use crate::error::{CapacityExceeded, Error, Result};

/// Initial backing capacity of an unbounded queue.
pub const UNBOUNDED_INITIAL_CAPACITY: usize = 64;

/// Backing capacity at or below which an unbounded queue never shrinks.
const SHRINK_FLOOR: usize = 64;

/// Above this capacity the queue shrinks more eagerly but by less.
const SHRINK_LARGE: usize = 2048;

/// A min-priority queue ordered by a [`Comparator`].
pub struct PriorityQueue<T, C> {
    /// Heap-ordered elements; `data[0]` is the minimum.
    data: Vec<T>,
    /// Fixed bound, or 0 when unbounded.
    capacity: usize,
    cmp: C,
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates a queue ordered by `cmp`.
    ///
    /// `capacity == 0` makes the queue unbounded. Any other value bounds it
    /// and allocates exactly that many slots up front.
    pub fn new(capacity: usize, cmp: C) -> Self {
        let slots = if capacity == 0 {
            UNBOUNDED_INITIAL_CAPACITY
        } else {
            capacity
        };
        Self {
            data: Vec::with_capacity(slots),
            capacity,
            cmp,
        }
    }

    /// Creates an unbounded queue ordered by `cmp`.
    #[inline]
    pub fn unbounded(cmp: C) -> Self {
        Self::new(0, cmp)
    }

    /// Creates a queue holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn bounded(capacity: usize, cmp: C) -> Self {
        assert!(capacity > 0, "bounded capacity must be > 0");
        Self::new(capacity, cmp)
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the bound, or 0 for an unbounded queue.
    #[inline]
    pub fn cap(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the queue has no bound.
    #[inline]
    pub fn is_boundless(&self) -> bool {
        self.capacity == 0
    }

    /// Returns `true` if the queue is bounded and at its bound.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.data.len() == self.capacity
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the minimum element without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(Error::EmptyContainer)
    }

    /// Adds an element.
    ///
    /// # Errors
    ///
    /// Returns the value inside [`CapacityExceeded`] if the queue is bounded
    /// and full. The queue is left unchanged.
    pub fn enqueue(&mut self, value: T) -> core::result::Result<(), CapacityExceeded<T>> {
        if self.is_full() {
            return Err(CapacityExceeded(value));
        }

        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    /// Removes and returns the minimum element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(Error::EmptyContainer);
        }

        // Moves the last element into the root slot
        let min = self.data.swap_remove(0);
        self.shrink_if_needed();
        self.sift_down(0);
        Ok(min)
    }

    /// Returns an iterator over the elements in heap order (not sorted).
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes all elements. Backing storage is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the queue, returning the elements in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.cmp.less(&self.data[pos], &self.data[parent]) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();

        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut min = pos;

            if left < len && self.cmp.less(&self.data[left], &self.data[min]) {
                min = left;
            }
            if right < len && self.cmp.less(&self.data[right], &self.data[min]) {
                min = right;
            }
            if min == pos {
                break;
            }

            self.data.swap(pos, min);
            pos = min;
        }
    }

    /// Releases backing storage of an unbounded queue once it is mostly idle.
    fn shrink_if_needed(&mut self) {
        if !self.is_boundless() {
            return;
        }

        let capacity = self.data.capacity();
        if let Some(target) = shrink_target(capacity, self.data.len()) {
            self.data.shrink_to(target);
            tracing::trace!(
                from = capacity,
                to = self.data.capacity(),
                len = self.data.len(),
                "priority queue storage shrunk"
            );
        }
    }
}

/// Returns the capacity to shrink to, if any.
///
/// - up to 64 slots: never
/// - up to 2048 slots: halve once at most a quarter is used
/// - above 2048 slots: drop to 5/8 once at most half is used
fn shrink_target(capacity: usize, len: usize) -> Option<usize> {
    if capacity <= SHRINK_FLOOR {
        return None;
    }
    let ratio = if len == 0 { usize::MAX } else { capacity / len };
    if capacity <= SHRINK_LARGE {
        (ratio >= 4).then_some(capacity / 2)
    } else {
        (ratio >= 2).then_some(capacity / 8 * 5)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .field("cap", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
