//! Indexed Collections
//!
//! This crate provides two independent, array-backed data structures built
//! around cheap position bookkeeping:
//!
//! - **[`IndexedHeap`]**: a binary heap that pairs the backing array with a
//!   handle-to-index position map, so any element (not just the root) can be
//!   tested for membership in O(1) and removed in O(log n)
//! - **[`UnionFind`]**: a disjoint-set forest with full path compression and
//!   union-by-size, giving amortized O(α(n)) find/unify
//!
//! Both structures are purely sequential and in-memory: no I/O, no blocking,
//! no internal locking. Concurrent callers must provide their own external
//! synchronization (e.g. a mutex per instance).
//!
//! # Example
//!
//! ```rust
//! use indexed_collections::{HeapOrder, IndexedHeap, UnionFind};
//!
//! let mut heap = IndexedHeap::with_order(HeapOrder::Min);
//! let handle = heap.push(12);
//! heap.push(3);
//! assert_eq!(heap.remove(handle), Some(12)); // O(log n), anywhere in the heap
//! assert_eq!(heap.pop().map(|(_, n)| n), Some(3));
//!
//! let mut forest = UnionFind::new(4)?;
//! forest.unify(0, 1);
//! assert!(forest.connected(0, 1));
//! assert_eq!(forest.count_components(), 3);
//! # Ok::<(), indexed_collections::Error>(())
//! ```

pub mod indexed_heap;
pub mod traits;
pub mod union_find;

pub use indexed_heap::{EntryKey, HeapOrder, IndexedHeap};
pub use traits::{Error, Handle, PriorityQueue};
pub use union_find::UnionFind;
