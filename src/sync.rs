use crate::heap::BinaryHeap;
use log::debug;
use parking_lot::Mutex;

/// [`BinaryHeap`] behind one lock. Each method holds the lock until the heap is consistent again,
/// so other threads never observe a half-finished sift.
#[derive(Debug)]
pub struct SyncBinaryHeap<E: Ord> {
    heap: Mutex<BinaryHeap<E>>,
}

impl<E: Ord> Default for SyncBinaryHeap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ord> SyncBinaryHeap<E> {
    #[inline]
    pub fn new() -> Self {
        Self {
            heap: Mutex::new(BinaryHeap::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        debug!("shared heap with capacity {}", capacity);
        Self {
            heap: Mutex::new(BinaryHeap::with_capacity(capacity)),
        }
    }

    pub fn insert(&self, element: E) {
        self.heap.lock().insert(element);
    }

    pub fn extract_min(&self) -> Option<E> {
        self.heap.lock().extract_min()
    }

    pub fn contains(&self, element: &E) -> bool {
        self.heap.lock().contains(element)
    }

    pub fn remove(&self, element: &E) -> bool {
        self.heap.lock().remove(element)
    }

    pub fn len(&self) -> usize {
        self.heap.lock().len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.lock().is_empty()
    }

    pub fn into_inner(self) -> BinaryHeap<E> {
        self.heap.into_inner()
    }
}

impl<E: Ord + Clone> SyncBinaryHeap<E> {
    /// A copy of the minimum: a reference can't outlive the lock.
    pub fn peek(&self) -> Option<E> {
        self.heap.lock().peek().cloned()
    }
}

impl<E: Ord> From<BinaryHeap<E>> for SyncBinaryHeap<E> {
    fn from(heap: BinaryHeap<E>) -> Self {
        Self {
            heap: Mutex::new(heap),
        }
    }
}
