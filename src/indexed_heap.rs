//! Indexed binary heap with handle-based arbitrary-element removal
//!
//! A plain binary heap only exposes its root; removing anything else costs a
//! linear scan to even locate it. This heap keeps a secondary position map
//! from an opaque [`EntryKey`] handle to the element's current array index,
//! so membership tests are O(1) and removal of *any* element is O(log n).
//!
//! The position map is keyed by handle rather than by element value, so
//! duplicate-valued elements are fully supported: each insertion mints a
//! fresh generational key, and a stale key can never alias a live one.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `push`      | O(log n)   |
//! | `peek`      | O(1)       |
//! | `pop`       | O(log n)   |
//! | `contains`  | O(1)       |
//! | `remove`    | O(log n)   |
//! | `update`    | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use indexed_collections::IndexedHeap;
//!
//! let mut heap = IndexedHeap::new();
//! for n in [5, 7, 8, 10, 12, 15] {
//!     heap.push(n);
//! }
//! let twelve = heap.push(12); // duplicates are fine
//!
//! assert_eq!(heap.peek().map(|(_, n)| *n), Some(5));
//! assert_eq!(heap.remove(twelve), Some(12));
//! assert_eq!(heap.pop().map(|(_, n)| n), Some(5));
//! ```

use crate::traits::{Handle, PriorityQueue};
use crate::Error;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to an element in an [`IndexedHeap`]
    ///
    /// Returned by [`IndexedHeap::push`]. Keys are generational: once the
    /// element is removed the key is permanently stale, even if the slot is
    /// later reused by another insertion.
    pub struct EntryKey;
}

impl Handle for EntryKey {}

/// Which end of the total order surfaces first
///
/// Both orientations run the identical algorithm; only the direction of the
/// element comparison flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeapOrder {
    /// Smallest element at the root (min-heap)
    #[default]
    Min,
    /// Largest element at the root (max-heap)
    Max,
}

/// An array-backed binary heap with an element-to-index position map
///
/// The backing vector is interpreted as a complete binary tree: the root
/// lives at index 0, the children of index `i` at `2i + 1` and `2i + 2`,
/// and its parent at `(i - 1) / 2`. Alongside each element the heap stores
/// its [`EntryKey`], and a slot map records each live key's current index.
/// Every internal swap updates both sides, so the map is exactly consistent
/// with the array after every operation.
///
/// Ties between equal elements are broken arbitrarily; there is no
/// stability guarantee across equal-priority elements.
#[derive(Debug, Clone)]
pub struct IndexedHeap<T: Ord> {
    /// The complete binary tree: `(handle, element)` pairs, root at index 0
    heap: Vec<(EntryKey, T)>,
    /// Position map: live handle -> current index in `heap`
    slots: SlotMap<EntryKey, usize>,
    order: HeapOrder,
}

impl<T: Ord> IndexedHeap<T> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_order(HeapOrder::Min)
    }

    /// Creates an empty heap with the given orientation
    pub fn with_order(order: HeapOrder) -> Self {
        Self {
            heap: Vec::new(),
            slots: SlotMap::with_key(),
            order,
        }
    }

    /// Creates an empty heap with space reserved for `capacity` elements
    pub fn with_capacity(capacity: usize, order: HeapOrder) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            slots: SlotMap::with_capacity_and_key(capacity),
            order,
        }
    }

    /// Returns the orientation this heap was constructed with
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes all elements, leaving an empty heap and an empty position map
    ///
    /// Every previously issued [`EntryKey`] becomes stale.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
    }

    /// Inserts an element, returning a handle for later lookup or removal
    ///
    /// The element is appended at the bottom of the tree, its index is
    /// recorded in the position map, and it is sifted up until the heap
    /// invariant holds.
    ///
    /// # Time Complexity
    /// O(log n); O(1) when the new element does not need to move.
    pub fn push(&mut self, element: T) -> EntryKey {
        let index = self.heap.len();
        let key = self.slots.insert(index);
        self.heap.push((key, element));
        self.sift_up(index);
        key
    }

    /// Returns the root element and its handle without removing it
    pub fn peek(&self) -> Option<(EntryKey, &T)> {
        self.heap.first().map(|(key, element)| (*key, element))
    }

    /// Removes and returns the root element and its handle
    ///
    /// Returns `None` if the heap is empty. Delegates to removal at index 0.
    pub fn pop(&mut self) -> Option<(EntryKey, T)> {
        if self.heap.is_empty() {
            None
        } else {
            Some(self.remove_at(0))
        }
    }

    /// Returns true if the handle refers to an element still in the heap
    ///
    /// A position-map lookup, never a scan.
    pub fn contains(&self, key: EntryKey) -> bool {
        self.slots.contains_key(key)
    }

    /// Returns a reference to the element behind a live handle
    pub fn get(&self, key: EntryKey) -> Option<&T> {
        self.slots.get(key).map(|&index| &self.heap[index].1)
    }

    /// Returns the current array index of a live handle
    ///
    /// The index is only valid until the next mutating operation.
    pub fn position(&self, key: EntryKey) -> Option<usize> {
        self.slots.get(key).copied()
    }

    /// Removes the element behind the handle, wherever it sits in the heap
    ///
    /// Returns `None` without mutating anything if the handle is stale or
    /// belongs to another heap. Otherwise the element's index is located
    /// through the position map and removal proceeds there.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove(&mut self, key: EntryKey) -> Option<T> {
        let index = self.slots.get(key).copied()?;
        Some(self.remove_at(index).1)
    }

    /// Removes and returns the element at `index`, with its handle
    ///
    /// The target is swapped with the last element, the vector shrinks by
    /// one, and the displaced handle leaves the position map. If the vacated
    /// index still holds an element, that element is sifted down; if sinking
    /// did not move it at all, it is sifted up instead. Exactly one of the
    /// two restores the invariant after a single-point perturbation.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`. An out-of-range index is a programming
    /// error, not a recoverable condition.
    pub fn remove_at(&mut self, index: usize) -> (EntryKey, T) {
        assert!(
            index < self.heap.len(),
            "removal index (is {index}) should be < len (is {})",
            self.heap.len()
        );
        let (key, element) = self.heap.swap_remove(index);
        self.slots.remove(key);

        if index < self.heap.len() {
            // The displaced last element landed at `index`; repoint its
            // slot before re-establishing the heap invariant around it.
            self.slots[self.heap[index].0] = index;
            if !self.sift_down(index) {
                self.sift_up(index);
            }
        }

        (key, element)
    }

    /// Replaces the element behind a live handle, returning the old element
    ///
    /// The replacement may order in either direction relative to the old
    /// element; the invariant is restored by sifting down and, if that did
    /// not move it, sifting up.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHandle`] if the handle is stale; nothing is
    /// mutated in that case.
    pub fn update(&mut self, key: EntryKey, element: T) -> Result<T, Error> {
        let index = self.slots.get(key).copied().ok_or(Error::InvalidHandle)?;
        let old = std::mem::replace(&mut self.heap[index].1, element);
        if !self.sift_down(index) {
            self.sift_up(index);
        }
        Ok(old)
    }

    /// Visits every element with its handle, in arbitrary (array) order
    pub fn iter(&self) -> impl Iterator<Item = (EntryKey, &T)> {
        self.heap.iter().map(|(key, element)| (*key, element))
    }

    /// Recursively verifies the heap invariant for the subtree at `index`
    ///
    /// Returns true for an index outside the tree (an empty subtree).
    /// Intended for verification and testing, not for hot paths; the heap
    /// maintains the invariant through every mutating operation.
    pub fn is_heap(&self, index: usize) -> bool {
        if index >= self.heap.len() {
            return true;
        }
        let left = 2 * index + 1;
        let right = 2 * index + 2;

        if left < self.heap.len() && self.precedes(&self.heap[left].1, &self.heap[index].1) {
            return false;
        }
        if right < self.heap.len() && self.precedes(&self.heap[right].1, &self.heap[index].1) {
            return false;
        }

        self.is_heap(left) && self.is_heap(right)
    }

    /// True if `a` must surface before `b` under this heap's orientation
    fn precedes(&self, a: &T, b: &T) -> bool {
        match self.order {
            HeapOrder::Min => a < b,
            HeapOrder::Max => b < a,
        }
    }

    /// Swaps two positions and repoints both slots
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.slots[self.heap[i].0] = i;
        self.slots[self.heap[j].0] = j;
    }

    /// Moves the element at `index` toward the root until the invariant
    /// holds. Returns true if the element moved.
    fn sift_up(&mut self, mut index: usize) -> bool {
        let start = index;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.precedes(&self.heap[index].1, &self.heap[parent].1) {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index != start
    }

    /// Moves the element at `index` toward the leaves, always descending
    /// into the child that must surface first. Returns true if the element
    /// moved.
    fn sift_down(&mut self, mut index: usize) -> bool {
        let start = index;
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut first = index;

            if left < len && self.precedes(&self.heap[left].1, &self.heap[first].1) {
                first = left;
            }
            if right < len && self.precedes(&self.heap[right].1, &self.heap[first].1) {
                first = right;
            }

            if first == index {
                break;
            }
            self.swap(index, first);
            index = first;
        }
        index != start
    }
}

impl<T: Ord> Default for IndexedHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for IndexedHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for IndexedHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> PriorityQueue<T> for IndexedHeap<T> {
    type Handle = EntryKey;

    fn len(&self) -> usize {
        IndexedHeap::len(self)
    }

    fn push(&mut self, element: T) -> EntryKey {
        IndexedHeap::push(self, element)
    }

    fn peek(&self) -> Option<(EntryKey, &T)> {
        IndexedHeap::peek(self)
    }

    fn pop(&mut self) -> Option<(EntryKey, T)> {
        IndexedHeap::pop(self)
    }

    fn contains(&self, handle: EntryKey) -> bool {
        IndexedHeap::contains(self, handle)
    }

    fn remove(&mut self, handle: EntryKey) -> Option<T> {
        IndexedHeap::remove(self, handle)
    }
}
