//! Skip list - a probabilistic ordered sequence over a node arena.
//!
//! A skip list keeps elements in comparator order with O(log n) expected time
//! for insert, search and removal, without any rebalancing. Positional access
//! walks the bottom level and is O(n).
//!
//! # Design
//!
//! Nodes live in a [`Storage`] owned by the list and link to each other by
//! [`Key`]. The header is not a node: it is the `head` array of the list,
//! one link per level, and a predecessor of `Key::NONE` means "the header".
//!
//! ```text
//! Level 2:  HEAD ─────────────────────► 50 ──────────────────► NIL
//!             │                          │
//! Level 1:  HEAD ────────► 20 ──────────► 50 ──────────────────► NIL
//!             │            │              │
//! Level 0:  HEAD ──► 10 ──► 20 ──► 30 ──► 50 ──► 60 ──► NIL
//! ```
//!
//! Equal elements are kept as distinct nodes. A new element lands
//! immediately before the first existing element that is not strictly less
//! than it.
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use tile_collections::{Natural, SkipList};
//!
//! let rng = SmallRng::seed_from_u64(12345);
//! let mut list: SkipList<u64, _, _> = SkipList::new(Natural, rng);
//!
//! list.insert(100);
//! list.insert(50);
//! list.insert(50);
//!
//! assert_eq!(list.to_vec(), vec![50, 50, 100]);
//! assert!(list.contains(&100));
//! assert_eq!(list.get(2), Ok(&100));
//! ```

use core::fmt;
use core::marker::PhantomData;

use rand_core::RngCore;

use crate::compare::Comparator;
use crate::error::{Error, Result};
use crate::key::Key;
use crate::storage::{Arena, Storage};

/// Default level cap. Enough for 4^32 elements at the default ratio.
pub const DEFAULT_MAX_LEVEL: usize = 32;

/// Default level ratio: a node reaches the next level with p = 1/4.
pub const DEFAULT_LEVEL_RATIO: u32 = 4;

// ============================================================================
// SkipNode
// ============================================================================

/// A node in the skip list: one value and its forward links.
///
/// `forward[i]` is the next node at level `i`. The number of links is the
/// node's level, fixed when it is inserted.
#[derive(Debug, Clone)]
pub struct SkipNode<T, Idx: Key> {
    value: T,
    forward: Box<[Idx]>,
}

impl<T, Idx: Key> SkipNode<T, Idx> {
    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the number of levels this node participates in.
    #[inline]
    pub fn level(&self) -> usize {
        self.forward.len()
    }
}

// ============================================================================
// Level sampling
// ============================================================================

/// Draws a node level from a geometric distribution.
///
/// Starts at level 1 and promotes with probability `1 / 2^level_divisor`
/// per trial, by counting trailing ones of one random word. The result is
/// clamped to `max_level`.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use tile_collections::skiplist::random_level;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// for _ in 0..1000 {
///     let level = random_level(&mut rng, 2, 8);
///     assert!((1..=8).contains(&level));
/// }
/// ```
#[inline]
pub fn random_level<R: RngCore + ?Sized>(rng: &mut R, level_divisor: u32, max_level: usize) -> usize {
    let trials = rng.next_u64().trailing_ones() / level_divisor.max(1);
    (1 + trials as usize).min(max_level)
}

// ============================================================================
// SkipList
// ============================================================================

/// A probabilistic ordered sequence.
///
/// # Type Parameters
///
/// - `T`: element type
/// - `C`: [`Comparator`] over `T`, bound at construction
/// - `R`: random source implementing [`RngCore`], used for node levels
/// - `Idx`: handle type for nodes, defaults to `u32`
/// - `S`: node [`Storage`], defaults to [`Arena`]
/// - `MAX_LEVEL`: level cap, defaults to 32
pub struct SkipList<
    T,
    C,
    R,
    Idx = u32,
    S = Arena<SkipNode<T, Idx>, Idx>,
    const MAX_LEVEL: usize = DEFAULT_MAX_LEVEL,
> where
    Idx: Key,
{
    /// Header links. `head[i]` is the first node at level `i`.
    head: [Idx; MAX_LEVEL],
    storage: S,
    cmp: C,
    rng: R,
    /// Number of levels in use, counted from 1.
    level: usize,
    len: usize,
    /// log2 of the level ratio; see [`random_level`].
    level_divisor: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T, C, R, Idx, S, const MAX_LEVEL: usize> SkipList<T, C, R, Idx, S, MAX_LEVEL>
where
    C: Comparator<T>,
    R: RngCore,
    Idx: Key,
    S: Storage<SkipNode<T, Idx>, Key = Idx> + Default,
{
    /// Creates an empty skip list ordered by `cmp`.
    ///
    /// Nodes are promoted with probability 1/4.
    pub fn new(cmp: C, rng: R) -> Self {
        Self::with_level_ratio(cmp, rng, DEFAULT_LEVEL_RATIO)
    }

    /// Creates an empty skip list with a custom level ratio.
    ///
    /// A node reaches the next level with probability `1 / level_ratio`:
    /// - 2: p = 0.5, about 2 links per node
    /// - 4: p = 0.25, about 1.33 links per node
    ///
    /// Must be a power of 2 and >= 2. Other values are rounded up to the
    /// next valid value, saturating at 2^31.
    pub fn with_level_ratio(cmp: C, rng: R, level_ratio: u32) -> Self {
        const { assert!(MAX_LEVEL > 0, "MAX_LEVEL must be at least 1") };

        let level_ratio = level_ratio
            .max(2)
            .checked_next_power_of_two()
            .unwrap_or(1 << 31);
        Self {
            head: [Idx::NONE; MAX_LEVEL],
            storage: S::default(),
            cmp,
            rng,
            level: 1,
            len: 0,
            level_divisor: level_ratio.trailing_zeros(),
            _marker: PhantomData,
        }
    }

    /// Creates a skip list holding `values`, inserted one at a time in
    /// iteration order.
    pub fn from_values<I>(values: I, cmp: C, rng: R) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new(cmp, rng);
        list.extend(values);
        list
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of levels currently in use (at least 1).
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts `value` before the first element not strictly less than it.
    ///
    /// Equal elements are never merged.
    pub fn insert(&mut self, value: T) {
        let mut update = [Idx::NONE; MAX_LEVEL];
        self.search(&value, &mut update);

        let new_level = random_level(&mut self.rng, self.level_divisor, MAX_LEVEL);
        if new_level > self.level {
            // update[self.level..new_level] is still NONE: the header
            tracing::trace!(from = self.level, to = new_level, "skip list level raised");
            self.level = new_level;
        }

        let forward: Box<[Idx]> = (0..new_level)
            .map(|i| self.next_of(update[i], i))
            .collect();
        let idx = self.storage.insert(SkipNode { value, forward });

        for (i, &prev) in update.iter().enumerate().take(new_level) {
            self.set_next(prev, i, idx);
        }

        self.len += 1;
    }

    /// Returns `true` if an element comparing equal to `value` is present.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes one element comparing equal to `value`.
    ///
    /// Returns `true` whether or not anything was removed: an absent value
    /// counts as nothing left to delete. Use [`take`](Self::take) to learn
    /// whether a node was unlinked.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value);
        true
    }

    /// Removes the first element comparing equal to `value` and returns it,
    /// or `None` if there is none.
    ///
    /// The candidate node is looked up once to compare and again to detach
    /// it, so a miss leaves storage untouched.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let mut update = [Idx::NONE; MAX_LEVEL];
        let target = self.search(value, &mut update);
        if target.is_none() || !self.cmp.equal(&self.node(target).value, value) {
            return None;
        }

        // Second lookup of the same slot: storage only releases a node by key
        let node = self.storage.remove(target).expect("dangling skip list link");

        for (i, &next) in node.forward.iter().enumerate() {
            if self.next_of(update[i], i) != target {
                break;
            }
            self.set_next(update[i], i, next);
        }

        let old_level = self.level;
        while self.level > 1 && self.head[self.level - 1].is_none() {
            self.level -= 1;
        }
        if self.level != old_level {
            tracing::trace!(from = old_level, to = self.level, "skip list level lowered");
        }

        self.len -= 1;
        Some(node.value)
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        if self.head[0].is_none() {
            return Err(Error::EmptyContainer);
        }
        Ok(&self.node(self.head[0]).value)
    }

    /// Returns the element at position `index` in order.
    ///
    /// Walks the bottom level, so this is O(n).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let out_of_range = Error::IndexOutOfRange {
            length: self.len,
            index,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        self.iter().nth(index).ok_or(out_of_range)
    }

    /// Returns every element in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, Idx, S> {
        Iter {
            storage: &self.storage,
            current: self.head[0],
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.head = [Idx::NONE; MAX_LEVEL];
        self.level = 1;
        self.len = 0;
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    #[inline]
    fn node(&self, idx: Idx) -> &SkipNode<T, Idx> {
        self.storage.get(idx).expect("dangling skip list link")
    }

    /// Forward link of `at` at `level`, where `NONE` is the header.
    #[inline]
    fn next_of(&self, at: Idx, level: usize) -> Idx {
        if at.is_none() {
            self.head[level]
        } else {
            self.node(at).forward[level]
        }
    }

    #[inline]
    fn set_next(&mut self, at: Idx, level: usize, to: Idx) {
        if at.is_none() {
            self.head[level] = to;
        } else {
            self.storage
                .get_mut(at)
                .expect("dangling skip list link")
                .forward[level] = to;
        }
    }

    /// Finds the first node not strictly less than `value` without
    /// recording predecessors. Used by read-only lookups.
    #[inline]
    fn find(&self, value: &T) -> Option<Idx> {
        let mut current = Idx::NONE;

        for i in (0..self.level).rev() {
            let mut next = self.next_of(current, i);
            while next.is_some() {
                let node = self.node(next);
                if !self.cmp.less(&node.value, value) {
                    break;
                }
                current = next;
                next = node.forward[i];
            }
        }

        let next = self.next_of(current, 0);
        if next.is_some() && self.cmp.equal(&self.node(next).value, value) {
            Some(next)
        } else {
            None
        }
    }

    /// Fills `update` with the rightmost node strictly less than `value` at
    /// each level in use and returns the level-0 successor of that path
    /// (`NONE` at the end of the list).
    #[inline]
    fn search(&self, value: &T, update: &mut [Idx; MAX_LEVEL]) -> Idx {
        let mut current = Idx::NONE;

        for i in (0..self.level).rev() {
            let mut next = self.next_of(current, i);
            while next.is_some() {
                let node = self.node(next);
                if !self.cmp.less(&node.value, value) {
                    break;
                }
                current = next;
                next = node.forward[i];
            }
            update[i] = current;
        }

        self.next_of(current, 0)
    }
}

impl<T, C, R, Idx, S, const MAX_LEVEL: usize> Extend<T> for SkipList<T, C, R, Idx, S, MAX_LEVEL>
where
    C: Comparator<T>,
    R: RngCore,
    Idx: Key,
    S: Storage<SkipNode<T, Idx>, Key = Idx> + Default,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C, R, Idx, S, const MAX_LEVEL: usize> IntoIterator
    for &'a SkipList<T, C, R, Idx, S, MAX_LEVEL>
where
    C: Comparator<T>,
    R: RngCore,
    Idx: Key,
    S: Storage<SkipNode<T, Idx>, Key = Idx> + Default,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, Idx, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C, R, Idx, S, const MAX_LEVEL: usize> fmt::Debug for SkipList<T, C, R, Idx, S, MAX_LEVEL>
where
    T: fmt::Debug,
    C: Comparator<T>,
    R: RngCore,
    Idx: Key,
    S: Storage<SkipNode<T, Idx>, Key = Idx> + Default,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// An iterator over skip list elements in order.
pub struct Iter<'a, T, Idx, S>
where
    Idx: Key,
    S: Storage<SkipNode<T, Idx>, Key = Idx>,
{
    storage: &'a S,
    current: Idx,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T: 'a, Idx, S> Iterator for Iter<'a, T, Idx, S>
where
    Idx: Key + 'a,
    S: Storage<SkipNode<T, Idx>, Key = Idx>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let node = self.storage.get(self.current)?;
        self.current = node.forward[0];
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, Idx, S> ExactSizeIterator for Iter<'a, T, Idx, S>
where
    Idx: Key + 'a,
    S: Storage<SkipNode<T, Idx>, Key = Idx>,
{
}
