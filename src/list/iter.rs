//! Ascending-order iteration over an `OrderedList`.
//!
//! Walks the level map from the lowest order key up and, inside each
//! level, follows the FIFO links from head to tail. Nothing is sorted or
//! copied; each call to `OrderedList::iter` reflects current contents.

use std::collections::btree_map;
use std::iter::FusedIterator;

use slab::Slab;

use crate::list::{EntryNode, OrderLevel};
use crate::types::OrderedEntry;

/// Borrowing iterator over entries in ascending order.
///
/// Created by [`OrderedList::iter`](crate::list::OrderedList::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a Slab<EntryNode<T>>,
    levels: btree_map::Values<'a, i32, OrderLevel>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        nodes: &'a Slab<EntryNode<T>>,
        levels: btree_map::Values<'a, i32, OrderLevel>,
    ) -> Self {
        Self {
            nodes,
            levels,
            cursor: None,
            remaining: nodes.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a OrderedEntry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(key) = self.cursor {
                let node = self.nodes.get(key)?;
                self.cursor = node.next;
                self.remaining = self.remaining.saturating_sub(1);
                return Some(&node.entry);
            }
            self.cursor = self.levels.next()?.head;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// Clone by hand: deriving would require `T: Clone`
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            levels: self.levels.clone(),
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::OrderedList;

    #[test]
    fn test_iter_exact_size() {
        let mut list = OrderedList::new();
        list.add(3, 'c').add(1, 'a').add(2, 'b');

        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_iter_empty() {
        let list: OrderedList<u8> = OrderedList::new();
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_iter_clone_resumes_independently() {
        let mut list = OrderedList::new();
        list.add(2, "b").add(1, "a");

        let mut iter = list.iter();
        assert_eq!(iter.next().map(|e| e.element), Some("a"));

        let rest: Vec<_> = iter.clone().map(|e| e.element).collect();
        assert_eq!(rest, vec!["b"]);
        assert_eq!(iter.next().map(|e| e.element), Some("b"));
    }
}
