//! Order level management for entries sharing one order key.
//!
//! ## Design
//!
//! An `OrderLevel` holds every entry with a single order key. Entries are
//! kept in a doubly-linked list in insertion order, which gives the
//! stable tie-break the list iterates with.
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) <-> entry2 <-> entry3 <-> tail (newest)
//! ```
//!
//! - New entries are appended at the tail
//! - Iteration and `remove_at` start from the head
//! - Any entry can be unlinked in O(1) using its slab key

use slab::Slab;

use crate::list::EntryNode;

/// A level containing entries at a single order key.
///
/// Entry data lives in the slab; this struct only holds queue metadata.
#[derive(Debug, Clone)]
pub struct OrderLevel {
    /// Order key for this level
    pub order: i32,

    /// Head of the queue (oldest entry, slab key)
    pub head: Option<usize>,

    /// Tail of the queue (newest entry, slab key)
    pub tail: Option<usize>,

    /// Number of entries at this level
    pub len: usize,
}

impl OrderLevel {
    /// Create a new empty level
    pub fn new(order: i32) -> Self {
        Self {
            order,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Check if the level is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a node to the tail of the queue
    ///
    /// Keys missing from the slab are ignored.
    pub fn push_back<T>(&mut self, key: usize, slab: &mut Slab<EntryNode<T>>) {
        let Some(node) = slab.get_mut(key) else {
            return;
        };
        node.prev = self.tail;
        node.next = None;

        match self.tail.and_then(|tail| slab.get_mut(tail)) {
            Some(tail_node) => tail_node.next = Some(key),
            // Empty queue - this is also the head
            None => self.head = Some(key),
        }

        self.tail = Some(key);
        self.len += 1;
    }

    /// Unlink a node from the queue by slab key
    ///
    /// The node stays in the slab with cleared links. Returns `false` if
    /// the key is not in the slab.
    pub fn remove<T>(&mut self, key: usize, slab: &mut Slab<EntryNode<T>>) -> bool {
        let Some(node) = slab.get_mut(key) else {
            return false;
        };
        let prev_key = node.prev.take();
        let next_key = node.next.take();

        match prev_key.and_then(|prev| slab.get_mut(prev)) {
            Some(prev_node) => prev_node.next = next_key,
            None => self.head = next_key,
        }

        match next_key.and_then(|next| slab.get_mut(next)) {
            Some(next_node) => next_node.prev = prev_key,
            None => self.tail = prev_key,
        }

        self.len = self.len.saturating_sub(1);
        true
    }

    /// Get the head node's slab key (oldest entry)
    #[inline]
    pub fn peek_head(&self) -> Option<usize> {
        self.head
    }

    /// Find the oldest node in this level matching `pred`
    pub fn find<T, F>(&self, slab: &Slab<EntryNode<T>>, mut pred: F) -> Option<usize>
    where
        F: FnMut(&EntryNode<T>) -> bool,
    {
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = slab.get(key)?;
            if pred(node) {
                return Some(key);
            }
            cursor = node.next;
        }
        None
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
