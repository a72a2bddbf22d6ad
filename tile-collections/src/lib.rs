//! Comparator-driven ordered containers.
//!
//! Two independent building blocks, both ordered by a [`Comparator`] bound
//! at construction rather than by `Ord`:
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`SkipList`] | Ordered, searchable, indexable sequence | O(log n) expected insert/search/remove, O(n) positional get |
//! | [`PriorityQueue`] | Min-priority queue, bounded or unbounded | O(log n) enqueue/dequeue, O(1) peek |
//!
//! # Quick Start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use tile_collections::{Error, Natural, PriorityQueue, SkipList};
//!
//! let list: SkipList<i32, _, _> =
//!     SkipList::from_values([5, 3, 8, 1, 9, 3], Natural, SmallRng::seed_from_u64(1));
//! assert_eq!(list.to_vec(), vec![1, 3, 3, 5, 8, 9]);
//! assert_eq!(list.get(6), Err(Error::IndexOutOfRange { length: 6, index: 6 }));
//!
//! let mut pq = PriorityQueue::new(0, |a: &i32, b: &i32| a.cmp(b));
//! pq.enqueue(4).unwrap();
//! pq.enqueue(2).unwrap();
//! assert_eq!(pq.dequeue(), Ok(2));
//! ```
//!
//! # Design Notes
//!
//! The skip list keeps its nodes in a [`Storage`] arena and links them by
//! integer [`Key`] handles. The header is a plain array of links owned by
//! the list. Node levels come from an injected [`rand_core::RngCore`], so a
//! seeded generator makes a list's shape reproducible.
//!
//! Neither container synchronizes internally. Share them across threads
//! behind a lock.
//!
//! # Errors
//!
//! Failures never leave a container half-modified:
//!
//! - [`Error::EmptyContainer`] - `peek`/`dequeue` on an empty container
//! - [`Error::IndexOutOfRange`] - skip list `get` past the end
//! - [`Error::CapacityExceeded`] / [`CapacityExceeded`] - bounded queue full
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`, usable as skip list
//!   node storage

#![warn(missing_docs)]

pub mod compare;
pub mod error;
pub mod key;
pub mod priority_queue;
pub mod skiplist;
pub mod storage;

pub use compare::{Comparator, Natural, Numeric, RealNumber, Reverse};
pub use error::{CapacityExceeded, Error, Result};
pub use key::Key;
pub use priority_queue::PriorityQueue;
pub use skiplist::{SkipList, SkipNode};
pub use storage::{Arena, Storage};
