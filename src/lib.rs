//! Mergeable priority queue built on the two-pass pairing heap
//!
//! This crate implements the pairing heap of Fredman, Sedgewick, Sleator, and
//! Tarjan: a heap-ordered multi-way tree whose only structural primitive is
//! the comparison-link, giving excellent amortized bounds with very little
//! machinery:
//!
//! - **Insert**: O(1) amortized
//! - **Peek / len / is_empty**: O(1)
//! - **Meld** (union of two heaps): O(1) amortized
//! - **Extract**: O(log n) amortized, via two-pass child pairing
//! - **Adjust-key**: o(log n) amortized, via cut-and-relink
//! - **Delete** (arbitrary node): O(log n) amortized
//!
//! Ordering is configurable per heap through a [`Policy`]: a custom
//! comparator, a key projection applied before comparing, and a reverse flag
//! that turns the min-heap into a max-heap. [`PairingHeap::insert`] returns a
//! [`NodeHandle`] that can later adjust or delete that exact element, the
//! operations that make this structure suitable for Dijkstra-style
//! algorithms.
//!
//! All fallible operations return [`HeapError`] values rather than
//! panicking, and a failed call never leaves a partially mutated heap behind.
//! The heap is a single-threaded structure; wrap it in external
//! synchronization if it must be shared.
//!
//! # Example
//!
//! ```rust
//! use pairing_heap::{HeapError, PairingHeap};
//!
//! let mut heap: PairingHeap<i32> = [5, 3, 8, 1, 4].into_iter().collect();
//! assert_eq!(*heap.peek()?, 1);
//!
//! let mut other: PairingHeap<i32> = [2, 6].into_iter().collect();
//! heap.meld(&mut other)?;
//! assert!(other.is_empty());
//!
//! assert_eq!(heap.extract_all(), vec![1, 2, 3, 4, 5, 6, 8]);
//! # Ok::<(), HeapError>(())
//! ```

pub mod error;
pub mod pairing;
pub mod policy;

pub use error::HeapError;
pub use pairing::{NodeHandle, PairingHeap};
pub use policy::{Comparator, KeyFn, Policy};
