//! # CircularList: a managed, position-indexed circular doubly linked list
//!
//! This module implements a list manager that owns a contiguous backing store
//! of nodes and maintains circular next/previous links among them, plus cached
//! head and tail positions.
//!
//! Links are stored as indices into the backing vector rather than as
//! references. Every insertion or deletion resizes the store (which may move
//! it in memory) and then re-derives every node's position and links in a
//! single relink pass, so no link is ever stale after a relocation.
//!
//! Payloads are caller-owned: the list stores at most one value per node and
//! hands a payload back to the caller whenever an operation would displace it.
//! It never drops one on its own.
//!
//! ## Example
//!
//! ```rust
//! use ringlist::circular_list::CircularList;
//!
//! // Create a list of 3 nodes labelled "jobs".
//! let mut list: CircularList<u32> = CircularList::new(3, "jobs").unwrap();
//! assert_eq!(list.len(), 3);
//!
//! // Attach a payload, then grow the list at the front.
//! list.set_node_data(1, 42).unwrap();
//! list.insert_at_beginning().unwrap();
//!
//! // The payload followed its node one position to the right.
//! assert_eq!(list.node(2).unwrap().data(), Some(&42));
//!
//! // The chain stays circular: the tail's next wraps to the head.
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.tail().next(), 0);
//! assert_eq!(list.head().prev(), 3);
//! ```

use std::fmt;

use log::{error, warn};

use crate::error::ListError;

/// Maximum length, in bytes, of a list label. Longer labels are truncated on
/// a character boundary at creation.
pub const LABEL_CAPACITY: usize = 29;

/// One element of the list: a payload slot, its logical position, and the
/// indices of its circular neighbors.
///
/// Nodes are created, relocated, and destroyed only by list-level operations;
/// they have no lifecycle of their own. A `&Node` borrowed from the list is
/// tied to that borrow and cannot outlive the next mutating call, which is
/// exactly the lifetime the relocating backing store permits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    data: Option<T>,
    position: usize,
    next: usize,
    prev: usize,
}

impl<T> Node<T> {
    fn empty(position: usize) -> Self {
        Self {
            data: None,
            position,
            next: position,
            prev: position,
        }
    }

    /// Returns the stored payload, or `None` if the slot is empty.
    #[inline]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Returns this node's logical position, which always equals its offset
    /// in the backing store.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the position of the next node in the chain. The tail's next
    /// wraps to position 0.
    #[inline]
    pub fn next(&self) -> usize {
        self.next
    }

    /// Returns the position of the previous node in the chain. The head's
    /// prev wraps to the last position.
    #[inline]
    pub fn prev(&self) -> usize {
        self.prev
    }
}

impl<T> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node({}, next: {}, prev: {})",
            self.position, self.next, self.prev
        )
    }
}

/// The owning handle for one list instance.
///
/// Bundles the backing store of nodes with cached head/tail positions and an
/// identifying label. The store is exclusively owned; dropping the list
/// releases it together with any payloads still attached.
///
/// A list always holds at least one node. Creation rejects a zero count, and
/// deletes reject shrinking below one node.
pub struct CircularList<T> {
    label: String,
    nodes: Vec<Node<T>>,
    head: usize,
    tail: usize,
}

impl<T> CircularList<T> {
    /// Creates a list of `count` empty nodes with circular links already in
    /// place: node `i` points forward to `i + 1` and back to `i - 1`, with
    /// the ends wrapping to each other.
    ///
    /// `label` is truncated to [`LABEL_CAPACITY`] bytes on a character
    /// boundary. Fails with [`ListError::InvalidCount`] when `count` is zero
    /// and with [`ListError::AllocationFailure`] when the backing store
    /// cannot be allocated; nothing is left behind in either case.
    pub fn new(count: usize, label: &str) -> Result<Self, ListError> {
        if count == 0 {
            warn!("rejected list creation: node count must be at least 1");
            return Err(ListError::InvalidCount);
        }

        let mut nodes = Vec::new();
        if nodes.try_reserve_exact(count).is_err() {
            error!("failed to allocate backing store for {count} nodes");
            return Err(ListError::AllocationFailure { requested: count });
        }
        for i in 0..count {
            nodes.push(Node::empty(i));
        }

        let mut list = Self {
            label: truncate_label(label),
            nodes,
            head: 0,
            tail: count - 1,
        };
        list.relink();
        Ok(list)
    }

    /// Returns the list's identifying label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the current number of nodes. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the node at position 0.
    #[inline]
    pub fn head(&self) -> &Node<T> {
        &self.nodes[self.head]
    }

    /// Returns the node at the last position.
    #[inline]
    pub fn tail(&self) -> &Node<T> {
        &self.nodes[self.tail]
    }

    /// Returns the node at `position`, or `None` if it is out of range.
    #[inline]
    pub fn node(&self, position: usize) -> Option<&Node<T>> {
        self.nodes.get(position)
    }

    /// Appends an empty node after the current tail and returns it.
    ///
    /// The new node becomes the tail: the old tail's next points to it, and
    /// its own next wraps to the head. On [`ListError::AllocationFailure`]
    /// the list is untouched.
    pub fn insert_at_end(&mut self) -> Result<&Node<T>, ListError> {
        self.reserve_one()?;
        let position = self.nodes.len();
        self.nodes.push(Node::empty(position));
        self.relink();
        Ok(&self.nodes[self.tail])
    }

    /// Inserts an empty node at position 0 and returns it.
    ///
    /// Every existing node shifts one position to the right, carrying its
    /// payload with it. The new node becomes the head; the old head is now at
    /// position 1. On [`ListError::AllocationFailure`] the list is untouched.
    pub fn insert_at_beginning(&mut self) -> Result<&Node<T>, ListError> {
        self.reserve_one()?;
        self.nodes.insert(0, Node::empty(0));
        self.relink();
        Ok(&self.nodes[self.head])
    }

    /// Inserts an empty node at `position` and returns it.
    ///
    /// Valid positions run from 0 through `len()` inclusive: 0 inserts a new
    /// head, `len()` appends a new tail, and anything between inserts before
    /// the node currently at that position, shifting it and everything after
    /// it one position to the right.
    pub fn insert_at_position(&mut self, position: usize) -> Result<&Node<T>, ListError> {
        let count = self.nodes.len();
        if position > count {
            warn!(
                "rejected insert at position {position}: valid range is 0..={count} \
                 for list {:?}",
                self.label
            );
            return Err(ListError::OutOfRange { position, count });
        }
        if position == 0 {
            return self.insert_at_beginning();
        }
        if position == count {
            return self.insert_at_end();
        }

        self.reserve_one()?;
        self.nodes.insert(position, Node::empty(position));
        self.relink();
        Ok(&self.nodes[position])
    }

    /// Removes the tail node and returns its payload, if it held one.
    ///
    /// Fails with [`ListError::MinimumSize`] when only one node remains; a
    /// list cannot be shrunk below one node, only dropped.
    pub fn delete_at_end(&mut self) -> Result<Option<T>, ListError> {
        self.check_not_last()?;
        let node = self.nodes.pop().expect("list holds at least two nodes");
        self.shrink_and_relink();
        Ok(node.data)
    }

    /// Removes the head node and returns its payload, if it held one.
    ///
    /// Every remaining node shifts one position to the left; the old node at
    /// position 1 becomes the head. Same minimum-size rule as
    /// [`CircularList::delete_at_end`].
    pub fn delete_at_beginning(&mut self) -> Result<Option<T>, ListError> {
        self.check_not_last()?;
        let node = self.nodes.remove(0);
        self.shrink_and_relink();
        Ok(node.data)
    }

    /// Removes the node at `position` and returns its payload, if any.
    ///
    /// Valid positions run from 0 through `len() - 1`: 0 deletes the head,
    /// `len() - 1` deletes the tail, and anything between closes the gap by
    /// shifting the nodes after it one position to the left.
    pub fn delete_at_position(&mut self, position: usize) -> Result<Option<T>, ListError> {
        let count = self.nodes.len();
        if position >= count {
            warn!(
                "rejected delete at position {position}: valid range is 0..{count} \
                 for list {:?}",
                self.label
            );
            return Err(ListError::OutOfRange { position, count });
        }
        if position == 0 {
            return self.delete_at_beginning();
        }
        if position == count - 1 {
            return self.delete_at_end();
        }

        self.check_not_last()?;
        let node = self.nodes.remove(position);
        self.shrink_and_relink();
        Ok(node.data)
    }

    /// Stores `data` in the node at `position`, returning the payload it
    /// displaced, if any.
    ///
    /// The payload is stored as-is; the list never inspects or copies it.
    pub fn set_node_data(&mut self, position: usize, data: T) -> Result<Option<T>, ListError> {
        let node = self.checked_node_mut(position)?;
        Ok(node.data.replace(data))
    }

    /// Clears the payload slot of the node at `position`, returning whatever
    /// it held.
    ///
    /// The node itself stays in place; only its slot is emptied.
    pub fn empty_node_data(&mut self, position: usize) -> Result<Option<T>, ListError> {
        let node = self.checked_node_mut(position)?;
        Ok(node.data.take())
    }

    /// Reserves room for one more node without touching the existing store.
    ///
    /// Called before every grow so an allocation failure surfaces while the
    /// prior state is still fully intact.
    fn reserve_one(&mut self) -> Result<(), ListError> {
        let requested = self.nodes.len() + 1;
        if self.nodes.try_reserve(1).is_err() {
            error!(
                "failed to grow backing store of list {:?} to {requested} nodes",
                self.label
            );
            return Err(ListError::AllocationFailure { requested });
        }
        Ok(())
    }

    fn check_not_last(&self) -> Result<(), ListError> {
        if self.nodes.len() == 1 {
            warn!(
                "rejected delete on list {:?}: the last node cannot be removed",
                self.label
            );
            return Err(ListError::MinimumSize);
        }
        Ok(())
    }

    fn checked_node_mut(&mut self, position: usize) -> Result<&mut Node<T>, ListError> {
        let count = self.nodes.len();
        match self.nodes.get_mut(position) {
            Some(node) => Ok(node),
            None => {
                warn!(
                    "rejected data access at position {position}: valid range is \
                     0..{count} for list {:?}",
                    self.label
                );
                Err(ListError::OutOfRange { position, count })
            }
        }
    }

    /// Re-derives every node's position and links plus the cached head/tail
    /// after a structural change. Growing or shrinking the store may relocate
    /// it wholesale, so the entire chain is rebuilt from the store's current
    /// layout rather than patched around the changed slot.
    fn relink(&mut self) {
        let count = self.nodes.len();
        for (i, node) in self.nodes.iter_mut().enumerate() {
            node.position = i;
            node.next = (i + 1) % count;
            node.prev = (i + count - 1) % count;
        }
        self.head = 0;
        self.tail = count - 1;
    }

    fn shrink_and_relink(&mut self) {
        self.nodes.shrink_to_fit();
        self.relink();
    }
}

impl<T> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularList")
            .field("label", &self.label)
            .field("len", &self.nodes.len())
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}

fn truncate_label(label: &str) -> String {
    if label.len() <= LABEL_CAPACITY {
        return label.to_string();
    }
    let mut end = LABEL_CAPACITY;
    while !label.is_char_boundary(end) {
        end -= 1;
    }
    label[..end].to_string()
}
