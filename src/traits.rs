//! Common trait and error types for the collections in this crate
//!
//! The [`PriorityQueue`] trait covers the handle-based queue surface
//! implemented by [`IndexedHeap`](crate::indexed_heap::IndexedHeap):
//! every insertion returns an opaque handle, and any element can later be
//! removed through its handle in O(log n) without a scan.

use std::fmt;

/// Error type for fallible collection operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The handle is no longer valid (element was removed)
    InvalidHandle,
    /// A structure over a fixed universe was constructed with zero elements
    ZeroSize,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidHandle => {
                write!(f, "handle is no longer valid (element was removed)")
            }
            Error::ZeroSize => {
                write!(f, "universe size must be at least 1")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A handle to an element in a priority queue
///
/// This is an opaque token identifying a specific inserted element,
/// independent of the element's value. Two insertions of equal values
/// receive distinct handles, so duplicates are unambiguous.
pub trait Handle: Copy + PartialEq + Eq {}

/// Trait for priority queues with handle-based element access
///
/// Unlike `std::collections::BinaryHeap`, which only exposes its root,
/// implementations of this trait can test membership and remove arbitrary
/// elements through the handle returned at insertion time.
///
/// # Example
///
/// ```rust
/// use indexed_collections::{IndexedHeap, PriorityQueue};
///
/// let mut queue = IndexedHeap::new();
/// let three = queue.push(3);
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.remove(three), Some(3));
/// assert_eq!(queue.pop().map(|(_, n)| n), Some(1));
/// assert_eq!(queue.pop().map(|(_, n)| n), Some(2));
/// ```
pub trait PriorityQueue<T: Ord> {
    /// The handle type identifying inserted elements
    type Handle: Handle;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element, returning a handle for later lookup or removal
    ///
    /// # Time Complexity
    /// O(log n); O(1) when the new element does not need to move.
    fn push(&mut self, element: T) -> Self::Handle;

    /// Returns the front element and its handle without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(Self::Handle, &T)>;

    /// Removes and returns the front element and its handle
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(Self::Handle, T)>;

    /// Returns true if the handle refers to an element still in the queue
    ///
    /// # Time Complexity
    /// O(1) — a position-map lookup, never a scan.
    fn contains(&self, handle: Self::Handle) -> bool;

    /// Removes the element behind the handle, wherever it sits in the queue
    ///
    /// Returns `None` without mutating anything if the handle is stale.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove(&mut self, handle: Self::Handle) -> Option<T>;
}
