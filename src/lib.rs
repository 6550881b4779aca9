//! A binary min-heap priority queue.
//!
//! ```
//! use minpq::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! for x in [5, 3, 8, 1, 4] {
//!     heap.insert(x);
//! }
//! assert_eq!(heap.peek(), Some(&1));
//! assert!(heap.remove(&3));
//! assert_eq!(heap.extract_min(), Some(1));
//! assert_eq!(heap.size(), 3);
//! ```

pub mod index;

mod heap;
#[cfg(feature = "sync")]
mod sync;

pub use heap::{BinaryHeap, HeapViolation};
#[cfg(feature = "sync")]
pub use sync::SyncBinaryHeap;
