//! Handle-keyed node storage.
//!
//! Linked structures keep their nodes in a [`Storage`] and link them by
//! [`Key`] instead of by reference. Rewiring a link is an integer write,
//! and a removed node leaves no dangling pointer behind: its handle simply
//! stops resolving.
//!
//! # Implementations
//!
//! - [`Arena`] - growable slot vector with a free list (in this crate)
//! - `slab::Slab<T>` - the `slab` crate (feature `slab`)

use crate::Key;

/// Slab-like storage with stable handles.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable handles**: a handle resolves to the same value until it is removed
/// - **O(1)** insert, remove, get
/// - **Slot reuse**: removed slots can be handed out again by later inserts
pub trait Storage<T> {
    /// Handle type for this storage.
    type Key: Key;

    /// Stores a value and returns its handle.
    fn insert(&mut self, value: T) -> Self::Key;

    /// Removes and returns the value behind `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value behind `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value behind `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored value.
    fn clear(&mut self);
}

// =============================================================================
// Arena - growable, free-list slot reuse
// =============================================================================

#[derive(Debug, Clone)]
enum Slot<T, K> {
    Occupied(T),
    /// Vacant slot holding the next free slot (or `K::NONE`).
    Vacant(K),
}

/// Growable storage that recycles removed slots.
///
/// Slots live in one `Vec`. Vacant slots form an intrusive free stack, so
/// insert after remove reuses memory instead of growing.
///
/// # Example
///
/// ```
/// use tile_collections::{Arena, Storage};
///
/// let mut arena: Arena<&str> = Arena::new();
/// let a = arena.insert("a");
/// let b = arena.insert("b");
///
/// assert_eq!(arena.remove(a), Some("a"));
/// assert_eq!(arena.get(a), None);
///
/// // The freed slot is reused
/// let c = arena.insert("c");
/// assert_eq!(c, a);
/// assert_eq!(arena.get(b), Some(&"b"));
/// ```
#[derive(Debug, Clone)]
pub struct Arena<T, K: Key = u32> {
    slots: Vec<Slot<T, K>>,
    /// Top of the free stack.
    free: K,
    len: usize,
}

impl<T, K: Key> Default for Arena<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> Arena<T, K> {
    /// Creates an empty arena.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: K::NONE,
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` values before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of slots allocated, occupied or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<T, K: Key> Storage<T> for Arena<T, K> {
    type Key = K;

    /// # Panics
    ///
    /// Panics if every slot addressable by `K` is occupied.
    fn insert(&mut self, value: T) -> K {
        self.len += 1;

        if self.free.is_some() {
            let key = self.free;
            let slot = &mut self.slots[key.as_usize()];
            if let Slot::Vacant(next) = *slot {
                self.free = next;
            }
            *slot = Slot::Occupied(value);
            return key;
        }

        let i = self.slots.len();
        assert!(i < K::MAX_SLOTS, "arena exhausted key space");
        self.slots.push(Slot::Occupied(value));
        K::from_usize(i)
    }

    fn remove(&mut self, key: K) -> Option<T> {
        let slot = self.slots.get_mut(key.as_usize())?;
        if matches!(slot, Slot::Vacant(_)) {
            return None;
        }

        let Slot::Occupied(value) = core::mem::replace(slot, Slot::Vacant(self.free)) else {
            unreachable!()
        };
        self.free = key;
        self.len -= 1;
        Some(value)
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        match self.slots.get(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free = K::NONE;
        self.len = 0;
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn insert(&mut self, value: T) -> usize {
        slab::Slab::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        slab::Slab::get(self, key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        slab::Slab::get_mut(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        slab::Slab::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut arena: Arena<u64> = Arena::new();

        let k = arena.insert(42);
        assert_eq!(arena.get(k), Some(&42));
        assert_eq!(arena.len(), 1);

        assert_eq!(arena.remove(k), Some(42));
        assert_eq!(arena.get(k), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn double_remove_is_none() {
        let mut arena: Arena<u64> = Arena::new();

        let k = arena.insert(1);
        assert_eq!(arena.remove(k), Some(1));
        assert_eq!(arena.remove(k), None);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn out_of_bounds_and_sentinel() {
        let mut arena: Arena<u64> = Arena::new();
        arena.insert(1);

        assert_eq!(arena.get(99), None);
        assert_eq!(arena.get(u32::NONE), None);
        assert_eq!(arena.remove(u32::NONE), None);
    }

    #[test]
    fn free_slots_reused_lifo() {
        let mut arena: Arena<u64> = Arena::with_capacity(4);

        let a = arena.insert(1);
        let b = arena.insert(2);
        let c = arena.insert(3);

        arena.remove(a);
        arena.remove(c);

        // Most recently freed first
        assert_eq!(arena.insert(30), c);
        assert_eq!(arena.insert(10), a);
        assert_eq!(arena.get(b), Some(&2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn get_mut_modifies() {
        let mut arena: Arena<String, u16> = Arena::new();

        let k = arena.insert("hello".into());
        arena.get_mut(k).unwrap().push_str(" world");
        assert_eq!(arena.get(k).map(String::as_str), Some("hello world"));
    }

    #[test]
    fn clear_drops_everything() {
        let mut arena: Arena<u64> = Arena::new();
        for i in 0..10 {
            arena.insert(i);
        }

        arena.clear();

        assert!(arena.is_empty());
        assert_eq!(arena.insert(7), 0);
    }

    #[cfg(feature = "slab")]
    mod slab_tests {
        use super::*;

        #[test]
        fn insert_get_remove() {
            let mut storage: slab::Slab<u64> = slab::Slab::new();

            let k = Storage::insert(&mut storage, 42);
            assert_eq!(Storage::get(&storage, k), Some(&42));
            assert_eq!(Storage::remove(&mut storage, k), Some(42));
            assert_eq!(Storage::remove(&mut storage, k), None);
        }
    }
}
