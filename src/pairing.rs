//! Pairing Heap implementation
//!
//! A pairing heap is a heap-ordered multi-way tree with:
//! - O(1) amortized insert and meld
//! - O(log n) amortized extract
//! - o(log n) amortized adjust_key
//!
//! This is the classic two-pass variant of Fredman, Sedgewick, Sleator, and
//! Tarjan (Algorithmica 1:111-129, 1986). Its single structural primitive is
//! the *comparison-link*: compare two roots and attach the worse one as the
//! new leftmost child of the other. Insert and meld are one link each.
//! Extract detaches the root's children, links them pairwise left to right,
//! then folds the survivors right to left into the new root. Adjust-key and
//! delete cut a subtree out of its parent's child list and link it back
//! against the root.
//!
//! Nodes are reference-counted with weak parent back-links, so a
//! [`NodeHandle`] can always tell whether its node is still live: using a
//! handle after its node was extracted or deleted reports
//! [`HeapError::WrongHeap`] instead of touching freed memory. The heap is
//! single-threaded by construction (`Rc` keeps it `!Send` and `!Sync`).

use crate::error::HeapError;
use crate::policy::Policy;
use std::cell::{Ref, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::{Rc, Weak};

type NodeRef<T> = Rc<RefCell<Node<T>>>;

struct Node<T> {
    item: T,
    child: Option<NodeRef<T>>,
    sibling: Option<NodeRef<T>>,
    parent: Weak<RefCell<Node<T>>>,
}

impl<T> Node<T> {
    fn new(item: T) -> NodeRef<T> {
        Rc::new(RefCell::new(Node {
            item,
            child: None,
            sibling: None,
            parent: Weak::new(),
        }))
    }
}

/// Handle to an element in a pairing heap
///
/// Returned by [`PairingHeap::insert`] and accepted by
/// [`PairingHeap::adjust_key`] and [`PairingHeap::delete`]. A handle does not
/// keep its node alive: once the node is extracted or deleted, every handle
/// to it goes stale and further use reports [`HeapError::WrongHeap`].
///
/// Passing a live handle to a *different* heap is detected on a best-effort
/// basis only (see [`PairingHeap::adjust_key`]).
pub struct NodeHandle<T> {
    node: Weak<RefCell<Node<T>>>,
}

impl<T> Clone for NodeHandle<T> {
    fn clone(&self) -> Self {
        NodeHandle {
            node: self.node.clone(),
        }
    }
}

impl<T> PartialEq for NodeHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node.ptr_eq(&other.node)
    }
}

impl<T> Eq for NodeHandle<T> {}

impl<T> fmt::Debug for NodeHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeHandle").field(&self.node.as_ptr()).finish()
    }
}

/// Pairing Heap
///
/// A mergeable priority queue over items of type `T`, ordered by a
/// [`Policy`] fixed at construction. `K` is the key type the policy projects
/// items to; it defaults to `T` itself.
///
/// # Example
///
/// ```rust
/// use pairing_heap::PairingHeap;
///
/// let mut heap: PairingHeap<i32> = [5, 3, 8, 1, 4].into_iter().collect();
/// let handle = heap.insert(10);
///
/// assert_eq!(*heap.peek().unwrap(), 1);
/// heap.adjust_key(&handle, 0).unwrap();
/// assert_eq!(*heap.peek().unwrap(), 0);
/// assert_eq!(heap.extract_all(), vec![0, 1, 3, 4, 5, 8]);
/// ```
pub struct PairingHeap<T, K: ?Sized = T> {
    root: Option<NodeRef<T>>,
    len: usize,
    policy: Policy<T, K>,
}

impl<T: Ord> PairingHeap<T> {
    /// Creates an empty min-heap using `T`'s natural ordering.
    pub fn new() -> Self {
        Self::with_policy(Policy::natural())
    }
}

impl<T: Ord> Default for PairingHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for PairingHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, K: ?Sized> PairingHeap<T, K> {
    /// Creates an empty heap ordered by `policy`.
    pub fn with_policy(policy: Policy<T, K>) -> Self {
        PairingHeap {
            root: None,
            len: 0,
            policy,
        }
    }

    /// The comparison policy this heap was constructed with.
    pub fn policy(&self) -> &Policy<T, K> {
        &self.policy
    }

    /// True if there is nothing in the heap.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of items in the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns, but does not remove, the top of the heap.
    ///
    /// # Errors
    /// [`HeapError::Underflow`] if the heap is empty.
    pub fn peek(&self) -> Result<Ref<'_, T>, HeapError> {
        let root = self.root.as_ref().ok_or(HeapError::Underflow)?;
        Ok(Ref::map(root.borrow(), |node| &node.item))
    }

    /// Returns an unsorted snapshot of every item currently in the heap.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        let mut pending = Vec::new();
        if let Some(root) = &self.root {
            pending.push(Rc::clone(root));
        }
        while let Some(node) = pending.pop() {
            let node = node.borrow();
            out.push(node.item.clone());
            if let Some(child) = &node.child {
                pending.push(Rc::clone(child));
            }
            if let Some(sibling) = &node.sibling {
                pending.push(Rc::clone(sibling));
            }
        }
        out
    }
}

impl<T, K: ?Sized + Ord> Extend<T> for PairingHeap<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T, K: ?Sized + Ord> PairingHeap<T, K> {
    /// Inserts an item, returning a handle for later
    /// [`adjust_key`](Self::adjust_key) or [`delete`](Self::delete) calls.
    ///
    /// O(1): one comparison-link against the current root.
    pub fn insert(&mut self, item: T) -> NodeHandle<T> {
        let node = Node::new(item);
        let handle = NodeHandle {
            node: Rc::downgrade(&node),
        };
        let root = self.root.take();
        self.root = self.link(Some(node), root);
        self.len += 1;
        handle
    }

    /// Removes and returns the top of the heap.
    ///
    /// The root's children are rebuilt into a new root by the two-pass
    /// pairing strategy: link adjacent children left to right, then fold the
    /// survivors right to left. O(log n) amortized.
    ///
    /// # Errors
    /// [`HeapError::Underflow`] if the heap is empty.
    pub fn extract(&mut self) -> Result<T, HeapError> {
        let root = self.root.take().ok_or(HeapError::Underflow)?;
        let children = root.borrow_mut().child.take();
        self.root = self.two_pass_merge(children);
        self.len -= 1;
        Self::into_item(root)
    }

    /// Removes and returns the top `n` items, best first.
    ///
    /// Checked up front: if the heap holds fewer than `n` items, nothing is
    /// removed.
    ///
    /// # Errors
    /// [`HeapError::Underflow`] if `n > self.len()`.
    pub fn extract_n(&mut self, n: usize) -> Result<Vec<T>, HeapError> {
        if n > self.len {
            return Err(HeapError::Underflow);
        }
        (0..n).map(|_| self.extract()).collect()
    }

    /// Empties the heap into a vector sorted under the policy.
    pub fn extract_all(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        while let Ok(item) = self.extract() {
            out.push(item);
        }
        out
    }

    /// Merges another heap into this one, leaving `other` empty.
    ///
    /// O(1): a single comparison-link of the two roots. Every node formerly
    /// owned by `other` belongs to `self` afterwards, and live handles into
    /// `other` remain usable against `self`.
    ///
    /// # Errors
    /// [`HeapError::IncompatibleHeaps`] if the two heaps were constructed
    /// with different policies; neither heap is changed.
    pub fn meld(&mut self, other: &mut Self) -> Result<(), HeapError> {
        if self.policy != other.policy {
            return Err(HeapError::IncompatibleHeaps);
        }
        let absorbed = other.root.take();
        let root = self.root.take();
        self.root = self.link(absorbed, root);
        self.len += other.len;
        other.len = 0;
        Ok(())
    }

    /// Replaces the item behind `handle` with one that compares the same or
    /// better under the policy (a decrease on a min-heap, an increase on a
    /// max-heap).
    ///
    /// A non-root node is cut out of its parent's child list together with
    /// its subtree and linked back against the root. o(log n) amortized.
    ///
    /// # Errors
    /// - [`HeapError::WrongHeap`] if the node behind `handle` was already
    ///   extracted or deleted. A live node of *another* heap is also caught
    ///   whenever it is that heap's root; a parented foreign node cannot be
    ///   told apart from one of ours without an O(n) ownership walk, so that
    ///   misuse stays undetected.
    /// - [`HeapError::WrongAdjustKeyDirection`] if `new_item` compares worse
    ///   than the current item. The heap is left unchanged.
    pub fn adjust_key(&mut self, handle: &NodeHandle<T>, new_item: T) -> Result<(), HeapError> {
        let node = self.live_node(handle)?;
        if self.policy.compare(&node.borrow().item, &new_item) == Ordering::Less {
            return Err(HeapError::WrongAdjustKeyDirection);
        }
        node.borrow_mut().item = new_item;
        if self.is_root(&node) {
            return Ok(());
        }
        Self::cut(&node)?;
        let root = self.root.take();
        self.root = self.link(Some(node), root);
        Ok(())
    }

    /// Removes the node behind `handle` from anywhere in the heap and
    /// returns its item.
    ///
    /// The root case is exactly [`extract`](Self::extract). Otherwise the
    /// node is cut from its parent, its own children are rebuilt by the
    /// two-pass strategy, and the resulting subtree is linked back against
    /// the root.
    ///
    /// # Errors
    /// [`HeapError::WrongHeap`] under the same conditions as
    /// [`adjust_key`](Self::adjust_key).
    pub fn delete(&mut self, handle: &NodeHandle<T>) -> Result<T, HeapError> {
        let node = self.live_node(handle)?;
        if self.is_root(&node) {
            // Drop the extra strong reference so extract can unwrap the Rc.
            drop(node);
            return self.extract();
        }
        Self::cut(&node)?;
        let children = node.borrow_mut().child.take();
        let replacement = self.two_pass_merge(children);
        let root = self.root.take();
        self.root = self.link(replacement, root);
        self.len -= 1;
        Self::into_item(node)
    }

    /// Upgrades a handle and checks that its node is live in this heap:
    /// either it is our root, or it still has a parent.
    fn live_node(&self, handle: &NodeHandle<T>) -> Result<NodeRef<T>, HeapError> {
        let node = handle.node.upgrade().ok_or(HeapError::WrongHeap)?;
        if self.is_root(&node) || node.borrow().parent.upgrade().is_some() {
            Ok(node)
        } else {
            Err(HeapError::WrongHeap)
        }
    }

    fn is_root(&self, node: &NodeRef<T>) -> bool {
        self.root.as_ref().is_some_and(|root| Rc::ptr_eq(root, node))
    }

    /// Comparison-link: the root that compares worse becomes the new leftmost
    /// child of the other. Ties keep the first argument as the child.
    fn link(&self, a: Option<NodeRef<T>>, b: Option<NodeRef<T>>) -> Option<NodeRef<T>> {
        match (a, b) {
            (Some(a), Some(b)) => Some(self.link_roots(a, b)),
            (a, None) => a,
            (None, b) => b,
        }
    }

    fn link_roots(&self, a: NodeRef<T>, b: NodeRef<T>) -> NodeRef<T> {
        if self.policy.compare(&a.borrow().item, &b.borrow().item) == Ordering::Less {
            Self::add_child(&a, b);
            a
        } else {
            Self::add_child(&b, a);
            b
        }
    }

    fn add_child(parent: &NodeRef<T>, child: NodeRef<T>) {
        {
            let mut c = child.borrow_mut();
            c.parent = Rc::downgrade(parent);
            c.sibling = parent.borrow_mut().child.take();
        }
        parent.borrow_mut().child = Some(child);
    }

    /// Rebuilds a detached child list into a single tree: pair adjacent
    /// siblings left to right, then fold the survivors right to left.
    fn two_pass_merge(&self, first: Option<NodeRef<T>>) -> Option<NodeRef<T>> {
        let mut paired = Vec::new();
        let mut cursor = first;
        while let Some(node) = cursor {
            match Self::detach(&node) {
                Some(partner) => {
                    cursor = Self::detach(&partner);
                    paired.push(self.link_roots(node, partner));
                }
                None => {
                    paired.push(node);
                    cursor = None;
                }
            }
        }
        let mut root = paired.pop()?;
        while let Some(tree) = paired.pop() {
            root = self.link_roots(root, tree);
        }
        Some(root)
    }

    /// Clears a node's parent link and splits it from the rest of its
    /// sibling chain, returning the next sibling.
    fn detach(node: &NodeRef<T>) -> Option<NodeRef<T>> {
        let mut n = node.borrow_mut();
        n.parent = Weak::new();
        n.sibling.take()
    }

    /// Cuts a parented node (and its subtree) out of its parent's child list
    /// by re-splicing the sibling chain around it. The node comes out a
    /// standalone root: no parent, no sibling, children untouched.
    fn cut(node: &NodeRef<T>) -> Result<(), HeapError> {
        let parent = node.borrow().parent.upgrade().ok_or(HeapError::Internal)?;
        let after = node.borrow_mut().sibling.take();
        let first = parent.borrow().child.clone().ok_or(HeapError::Internal)?;
        if Rc::ptr_eq(&first, node) {
            parent.borrow_mut().child = after;
        } else {
            let mut cursor = first;
            loop {
                let next = cursor.borrow().sibling.clone().ok_or(HeapError::Internal)?;
                if Rc::ptr_eq(&next, node) {
                    cursor.borrow_mut().sibling = after;
                    break;
                }
                cursor = next;
            }
        }
        node.borrow_mut().parent = Weak::new();
        Ok(())
    }

    /// Unwraps a fully detached node and moves its item out. The node must
    /// hold the only remaining strong reference.
    fn into_item(node: NodeRef<T>) -> Result<T, HeapError> {
        match Rc::try_unwrap(node) {
            Ok(cell) => Ok(cell.into_inner().item),
            Err(_) => Err(HeapError::Internal),
        }
    }
}

impl<T, K: ?Sized> Drop for PairingHeap<T, K> {
    fn drop(&mut self) {
        // Unlink with an explicit worklist; dropping the Rc chain directly
        // would recurse once per tree level and sibling.
        let mut pending = Vec::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }
        while let Some(node) = pending.pop() {
            let mut node = node.borrow_mut();
            if let Some(child) = node.child.take() {
                pending.push(child);
            }
            if let Some(sibling) = node.sibling.take() {
                pending.push(sibling);
            }
        }
    }
}
