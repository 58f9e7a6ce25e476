//! Entry node for slab-based storage.
//!
//! ## Design
//!
//! `EntryNode` wraps an `OrderedEntry` with doubly-linked list pointers for
//! the order level it sits in. With the slab key in hand, removal from a
//! level is O(1).
//!
//! ## Stamps
//!
//! Each node carries two values drawn from the list's counter:
//! - `stamp`: identity, fixed for the node's lifetime, checked by `EntryKey`
//! - `seq`: insertion rank, refreshed when the node moves to another level
//!
//! Within a level, nodes are always linked in ascending `seq`.

use crate::types::OrderedEntry;

/// Entry node stored in the slab.
///
/// The `prev`/`next` pointers are slab keys (`usize`), not references.
#[derive(Debug, Clone)]
pub struct EntryNode<T> {
    /// The stored entry
    pub entry: OrderedEntry<T>,

    /// Identity stamp (never changes)
    pub stamp: u64,

    /// Insertion rank used for "first inserted" scans
    pub seq: u64,

    /// Next (newer) node at the same order key
    pub next: Option<usize>,

    /// Previous (older) node at the same order key
    pub prev: Option<usize>,
}

impl<T> EntryNode<T> {
    /// Create a new, unlinked node
    ///
    /// `stamp` and `seq` start out equal; only `seq` moves afterwards.
    #[inline]
    pub fn new(entry: OrderedEntry<T>, stamp: u64) -> Self {
        Self {
            entry,
            stamp,
            seq: stamp,
            next: None,
            prev: None,
        }
    }

    /// Check if this node is unlinked (alone in, or absent from, a level)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Get the order key
    #[inline]
    pub fn order(&self) -> i32 {
        self.entry.order
    }

    /// Get the element
    #[inline]
    pub fn element(&self) -> &T {
        &self.entry.element
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_node_new() {
        let node = EntryNode::new(OrderedEntry::new(10, "a"), 7);

        assert_eq!(node.order(), 10);
        assert_eq!(node.element(), &"a");
        assert_eq!(node.stamp, 7);
        assert_eq!(node.seq, 7);
        assert!(node.is_unlinked());
    }

    #[test]
    fn test_entry_node_linking() {
        let mut node = EntryNode::new(OrderedEntry::new(10, "a"), 0);

        node.next = Some(2);
        assert!(!node.is_unlinked());

        node.next = None;
        node.prev = Some(1);
        assert!(!node.is_unlinked());

        node.prev = None;
        assert!(node.is_unlinked());
    }
}
