use crate::index::{left, parent, right};
use log::trace;
use thiserror::Error;

/// A broken heap property found by [`BinaryHeap::check_invariants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapViolation {
    #[error("element at index {parent} is greater than its child at index {child}")]
    Order { parent: usize, child: usize },
}

/// Min-heap over a `Vec`, root at index `0`.
///
/// Every public method leaves `data[parent(i)] <= data[i]` for all `i > 0`. The shape stays a
/// complete tree because elements only enter at the end and only leave from the end.
#[derive(Clone, Debug)]
pub struct BinaryHeap<E: Ord> {
    data: Vec<E>,
}

impl<E: Ord> Default for BinaryHeap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ord> BinaryHeap<E> {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Same as [`len`](Self::len).
    ///
    /// O(1)
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// O(1)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more insertions.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// The minimum, `None` if the heap is empty.
    ///
    /// O(1)
    #[inline]
    pub fn peek(&self) -> Option<&E> {
        self.data.first()
    }

    /// O(log n)
    pub fn insert(&mut self, element: E) {
        self.data.push(element);
        self.sift_up(self.len() - 1);
    }

    /// Removes and returns the minimum, `None` if the heap is empty.
    ///
    /// O(log n)
    pub fn extract_min(&mut self) -> Option<E> {
        let last = match self.len().checked_sub(1) {
            Some(last) => last,
            None => {
                trace!("extract_min on an empty heap");
                return None;
            }
        };

        self.data.swap(0, last);
        let min = self.data.pop();
        self.sift_down(0);

        min
    }

    /// Compares with `==`, not with the ordering.
    ///
    /// O(n)
    pub fn contains(&self, element: &E) -> bool {
        self.data.contains(element)
    }

    /// Removes one element equal to `element`. Returns `false` and leaves the heap untouched if
    /// there is none.
    ///
    /// When several elements are equal, which of them gets removed is unspecified.
    ///
    /// O(n)
    pub fn remove(&mut self, element: &E) -> bool {
        let hole = match self.data.iter().position(|x| x == element) {
            Some(hole) => hole,
            None => {
                trace!("remove: no matching element among {}", self.len());
                return false;
            }
        };

        // The last element fills the hole, unless the hole was the last slot.
        self.data.swap_remove(hole);
        if hole < self.len() && self.sift_up(hole) == hole {
            self.sift_down(hole);
        }
        trace!("removed element at index {}, {} left", hole, self.len());

        true
    }

    /// Walks the whole array and reports the first parent that is greater than its child.
    ///
    /// O(n)
    pub fn check_invariants(&self) -> Result<(), HeapViolation> {
        for child in 1..self.len() {
            let up = parent(child);
            if self.data[child] < self.data[up] {
                return Err(HeapViolation::Order { parent: up, child });
            }
        }

        Ok(())
    }

    /// Returns the final position of the node.
    ///
    /// O(log n)
    fn sift_up(&mut self, mut node: usize) -> usize {
        while node != 0 {
            let up = parent(node);

            if self.data[node] < self.data[up] {
                self.data.swap(up, node);
                node = up;
            } else {
                break;
            }
        }

        node
    }

    /// O(log n)
    fn sift_down(&mut self, mut node: usize) {
        let len = self.len();
        loop {
            let left = left(node);
            if len <= left {
                break;
            }

            let right = right(node);
            let min = if right < len && self.data[right] < self.data[left] {
                right
            } else {
                left
            };

            if self.data[min] < self.data[node] {
                self.data.swap(node, min);
                node = min;
            } else {
                break;
            }
        }
    }
}
