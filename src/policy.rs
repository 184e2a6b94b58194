//! Comparison policy for heap ordering
//!
//! A [`Policy`] decides which of two items sits closer to the top of the
//! heap. It is the Rust rendering of the classic `(cmp, key, reverse)`
//! triple:
//!
//! - an optional **key projection** applied to both items before comparing,
//! - an optional **comparator** used in place of the key type's `Ord`,
//! - a **reverse** flag that turns the min-heap into a max-heap.
//!
//! The policy is fixed when the heap is constructed and never changes for the
//! heap's lifetime. Two heaps can only [`meld`](crate::PairingHeap::meld) if
//! their policies are equal: same comparator, same key projection (both by
//! function identity), and same reverse flag.
//!
//! All three pieces are plain function pointers rather than closures so that
//! policies stay `Copy`, comparable, and free of captured state.

use std::cmp::Ordering;
use std::fmt;

/// Three-way comparison function over extracted keys
pub type Comparator<K: ?Sized> = fn(&K, &K) -> Ordering;

/// Key projection applied to items before comparison
///
/// Returning a borrowed key keeps projection allocation-free and lets keys
/// point into the item itself (a struct field, a slice of a string, ...).
pub type KeyFn<T, K: ?Sized> = fn(&T) -> &K;

fn identity<T>(item: &T) -> &T {
    item
}

/// Item ordering for a [`PairingHeap`](crate::PairingHeap)
///
/// # Example
///
/// ```rust
/// use pairing_heap::{PairingHeap, Policy};
///
/// // Natural min-heap ordering, reversed into a max-heap.
/// let mut heap = PairingHeap::with_policy(Policy::natural().reversed());
/// heap.extend([5, 3, 8, 1, 4]);
/// assert_eq!(heap.extract_all(), vec![8, 5, 4, 3, 1]);
/// ```
pub struct Policy<T, K: ?Sized = T> {
    key: KeyFn<T, K>,
    comparator: Option<Comparator<K>>,
    reverse: bool,
}

impl<T> Policy<T> {
    /// Policy using the item type's own `Ord`, smallest item on top.
    pub fn natural() -> Self {
        Policy {
            key: identity,
            comparator: None,
            reverse: false,
        }
    }

    /// Policy using a custom comparator over whole items.
    pub fn with_comparator(comparator: Comparator<T>) -> Self {
        Policy {
            key: identity,
            comparator: Some(comparator),
            reverse: false,
        }
    }
}

impl<T, K: ?Sized> Policy<T, K> {
    /// Policy that compares items by a projected key.
    ///
    /// ```rust
    /// use pairing_heap::{PairingHeap, Policy};
    ///
    /// struct Job {
    ///     cost: u32,
    ///     name: &'static str,
    /// }
    ///
    /// fn cost(job: &Job) -> &u32 {
    ///     &job.cost
    /// }
    ///
    /// let mut heap = PairingHeap::with_policy(Policy::keyed(cost));
    /// heap.insert(Job { cost: 7, name: "b" });
    /// heap.insert(Job { cost: 2, name: "a" });
    /// assert_eq!(heap.extract().unwrap().name, "a");
    /// ```
    pub fn keyed(key: KeyFn<T, K>) -> Self {
        Policy {
            key,
            comparator: None,
            reverse: false,
        }
    }

    /// Replaces the key type's `Ord` with a custom comparator over keys.
    pub fn comparator(mut self, comparator: Comparator<K>) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Flips the ordering, turning a min-heap policy into a max-heap policy
    /// and vice versa.
    pub fn reversed(mut self) -> Self {
        self.reverse = !self.reverse;
        self
    }

    /// True if this policy orders the largest item on top.
    pub fn is_reversed(&self) -> bool {
        self.reverse
    }
}

impl<T, K: ?Sized + Ord> Policy<T, K> {
    /// Compares two items under this policy.
    ///
    /// `Ordering::Less` means `a` sits closer to the top of the heap than
    /// `b`. The result already accounts for key projection, the custom
    /// comparator, and the reverse flag.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let (ka, kb) = ((self.key)(a), (self.key)(b));
        let ord = match self.comparator {
            Some(comparator) => comparator(ka, kb),
            None => ka.cmp(kb),
        };
        if self.reverse {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl<T> Default for Policy<T> {
    fn default() -> Self {
        Policy::natural()
    }
}

// Manual impls: the derived versions would demand `T: Clone`/`T: Eq` even
// though a policy only holds function pointers and a flag.
impl<T, K: ?Sized> Clone for Policy<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K: ?Sized> Copy for Policy<T, K> {}

impl<T, K: ?Sized> PartialEq for Policy<T, K> {
    /// Policies are equal when the comparator, key projection, and reverse
    /// flag all match. Functions are compared by address, the same identity
    /// check the original heap used for meld compatibility.
    fn eq(&self, other: &Self) -> bool {
        self.key as usize == other.key as usize
            && self.comparator.map(|f| f as usize) == other.comparator.map(|f| f as usize)
            && self.reverse == other.reverse
    }
}

impl<T, K: ?Sized> Eq for Policy<T, K> {}

impl<T, K: ?Sized> fmt::Debug for Policy<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("key", &(self.key as usize as *const ()))
            .field("comparator", &self.comparator.map(|c| c as usize as *const ()))
            .field("reverse", &self.reverse)
            .finish()
    }
}
