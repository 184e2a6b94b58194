//! Error type for heap operations
//!
//! Every fallible operation on [`PairingHeap`](crate::PairingHeap) either
//! fully succeeds or leaves the heap (and, for `meld`, both heaps) unchanged;
//! the error value alone reports what went wrong.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek`/`extract`/`extract_n` was called with fewer items in the heap
    /// than required
    Underflow,
    /// The handle does not refer to a live node of this heap (the node was
    /// already extracted or deleted, or it belongs to another heap)
    WrongHeap,
    /// `meld` was called on heaps with different comparison policies
    IncompatibleHeaps,
    /// `adjust_key` tried to move a key away from the top of the heap
    /// (an increase on a min-heap, or a decrease on a max-heap)
    WrongAdjustKeyDirection,
    /// A structural invariant was violated; indicates a bug in this crate,
    /// not a caller error
    Internal,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Underflow => {
                write!(f, "heap has fewer items than the operation requires")
            }
            HeapError::WrongHeap => {
                write!(f, "handle does not refer to a live node of this heap")
            }
            HeapError::IncompatibleHeaps => {
                write!(f, "cannot meld heaps with different comparison policies")
            }
            HeapError::WrongAdjustKeyDirection => {
                write!(f, "adjusted key must not compare worse than the current key")
            }
            HeapError::Internal => {
                write!(f, "internal heap invariant violated (this is a bug)")
            }
        }
    }
}

impl std::error::Error for HeapError {}
