//! Ordered list implementation.
//!
//! ## Architecture
//!
//! The list uses a hybrid data structure:
//!
//! - **Slab**: Storage for entry nodes with O(1) insert, remove, and lookup
//! - **BTreeMap**: Order levels sorted by key, walked for ascending iteration
//! - **Per-level FIFO**: Entries sharing a key stay in insertion order
//!
//! ## Insertion Order
//!
//! Every node gets a sequence number from a single counter. Scans that
//! must remove "the first inserted" match pick the lowest sequence number.
//! Within a level, queue order and sequence order always agree.
//!
//! ## Removal Policy
//!
//! `remove_all_elements` and `remove_all_where` remove *every* qualifying
//! entry, including adjacent ones. Matches are collected before anything
//! is unlinked, so no entry is skipped.
//!
//! ## Example
//!
//! ```
//! use ordered_list::OrderedList;
//!
//! let mut list = OrderedList::new();
//! list.add(20, "draw").add(10, "update").add(20, "present");
//!
//! let elements: Vec<_> = list.iter().map(|e| e.element).collect();
//! assert_eq!(elements, vec!["update", "draw", "present"]);
//! ```

use std::collections::BTreeMap;

use slab::Slab;
use tracing::{debug, trace};

use crate::error::{OrderedListError, Result};
use crate::list::{EntryNode, Iter, OrderLevel};
use crate::types::{EntryKey, OrderedEntry, DEFAULT_ORDER};

/// Collection of elements kept in ascending order-key order.
///
/// Ties between equal keys are broken by insertion order. Elements are
/// never deduplicated.
#[derive(Debug, Clone)]
pub struct OrderedList<T> {
    /// Entry storage
    /// Key: slab index, Value: EntryNode
    nodes: Slab<EntryNode<T>>,

    /// Order levels (sorted low to high)
    levels: BTreeMap<i32, OrderLevel>,

    /// Order key for elements pushed without one
    default_order: i32,

    /// Counter feeding node stamps and sequence numbers
    next_seq: u64,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    /// Create a new empty list using [`DEFAULT_ORDER`]
    pub fn new() -> Self {
        Self::with_default_order(DEFAULT_ORDER)
    }

    /// Create a new empty list with a custom default order
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::with_default_order(0);
    /// list.push("a");
    /// assert_eq!(list.first().map(|e| e.order), Some(0));
    /// ```
    pub fn with_default_order(default_order: i32) -> Self {
        Self {
            nodes: Slab::new(),
            levels: BTreeMap::new(),
            default_order,
            next_seq: 0,
        }
    }

    /// Create a list with pre-allocated capacity
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let list: OrderedList<u32> = OrderedList::with_capacity(1_000);
    /// assert!(list.capacity() >= 1_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            levels: BTreeMap::new(),
            default_order: DEFAULT_ORDER,
            next_seq: 0,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Get the number of stored entries
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the order key used by [`push`](Self::push)
    #[inline]
    pub fn default_order(&self) -> i32 {
        self.default_order
    }

    /// Get the number of distinct order keys
    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Get the number of entries sharing `order`
    pub fn level_len(&self, order: i32) -> usize {
        self.levels.get(&order).map_or(0, |level| level.len)
    }

    // ========================================================================
    // Adding
    // ========================================================================

    /// Add an element with an explicit order key
    ///
    /// Returns the list for chaining. Use [`insert`](Self::insert) to get
    /// the new entry's key instead.
    pub fn add(&mut self, order: i32, element: T) -> &mut Self {
        self.insert(order, element);
        self
    }

    /// Add a pre-built entry
    pub fn add_entry(&mut self, entry: OrderedEntry<T>) -> &mut Self {
        self.insert_entry(entry);
        self
    }

    /// Add an element at the list's default order
    pub fn push(&mut self, element: T) -> &mut Self {
        let order = self.default_order;
        self.add(order, element)
    }

    /// Add an element and return its key
    pub fn insert(&mut self, order: i32, element: T) -> EntryKey {
        self.insert_entry(OrderedEntry::new(order, element))
    }

    /// Add a pre-built entry and return its key
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_list::{OrderedEntry, OrderedList};
    ///
    /// let mut list = OrderedList::new();
    /// let key = list.insert_entry(OrderedEntry::new(3, 'x'));
    /// assert_eq!(list.get(key), Some(&OrderedEntry::new(3, 'x')));
    /// ```
    pub fn insert_entry(&mut self, entry: OrderedEntry<T>) -> EntryKey {
        let stamp = self.take_seq();
        let order = entry.order;
        let slot = self.nodes.insert(EntryNode::new(entry, stamp));
        self.link(slot, order);

        trace!(order, slot, len = self.nodes.len(), "entry added");
        EntryKey::new(slot, stamp)
    }

    // ========================================================================
    // Keyed Access
    // ========================================================================

    /// Get an entry by key
    ///
    /// Returns `None` once the entry has been removed.
    pub fn get(&self, key: EntryKey) -> Option<&OrderedEntry<T>> {
        self.node(key).map(|node| &node.entry)
    }

    /// Get a mutable reference to an entry's element
    ///
    /// The order key is not reachable here; use
    /// [`set_order`](Self::set_order) so the entry moves to its new level.
    pub fn get_mut(&mut self, key: EntryKey) -> Option<&mut T> {
        self.nodes
            .get_mut(key.slot)
            .filter(|node| node.stamp == key.stamp)
            .map(|node| &mut node.entry.element)
    }

    /// Check if a key still refers to a stored entry
    #[inline]
    pub fn contains_key(&self, key: EntryKey) -> bool {
        self.node(key).is_some()
    }

    /// Remove an entry by key
    ///
    /// # Returns
    ///
    /// The removed entry, or None if the key is stale
    pub fn remove_key(&mut self, key: EntryKey) -> Option<OrderedEntry<T>> {
        self.node(key)?;
        let entry = self.unlink(key.slot);
        trace!(slot = key.slot, len = self.nodes.len(), "entry removed by key");
        entry
    }

    /// Move an entry to a new order key
    ///
    /// The moved entry is treated as newly inserted: it goes to the back
    /// of its new level and after every existing entry in insertion-order
    /// scans. Setting the order an entry already has changes nothing.
    ///
    /// # Returns
    ///
    /// The previous order key
    ///
    /// # Errors
    ///
    /// [`OrderedListError::StaleKey`] if the entry was removed
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// let key = list.insert(10, "late");
    /// list.add(5, "early");
    ///
    /// assert_eq!(list.set_order(key, 1), Ok(10));
    /// assert_eq!(list.first().map(|e| e.element), Some("late"));
    /// ```
    pub fn set_order(&mut self, key: EntryKey, order: i32) -> Result<i32> {
        let old_order = self
            .node(key)
            .map(EntryNode::order)
            .ok_or(OrderedListError::StaleKey { slot: key.slot })?;
        if old_order == order {
            return Ok(old_order);
        }

        self.detach(key.slot, old_order);
        let seq = self.take_seq();
        if let Some(node) = self.nodes.get_mut(key.slot) {
            node.entry.order = order;
            node.seq = seq;
        }
        self.link(key.slot, order);

        trace!(slot = key.slot, old_order, order, "entry reordered");
        Ok(old_order)
    }

    // ========================================================================
    // Removing
    // ========================================================================

    /// Remove the first-inserted entry equal to `entry`
    ///
    /// Equal means same order key and equal element. No-op if nothing
    /// matches.
    pub fn remove(&mut self, entry: &OrderedEntry<T>) -> &mut Self
    where
        T: PartialEq,
    {
        let found = self
            .levels
            .get(&entry.order)
            .and_then(|level| level.find(&self.nodes, |node| node.entry.element == entry.element));

        match found {
            Some(slot) => {
                self.unlink(slot);
                trace!(order = entry.order, slot, "entry removed");
            }
            None => debug!(order = entry.order, "remove: no matching entry"),
        }
        self
    }

    /// Remove the first-inserted entry whose element equals `element`
    ///
    /// Only one entry is removed even if several match.
    pub fn remove_element(&mut self, element: &T) -> &mut Self
    where
        T: PartialEq,
    {
        match self.first_inserted_where(|e| e == element) {
            Some(slot) => {
                self.unlink(slot);
                trace!(slot, "element removed");
            }
            None => debug!("remove_element: element not present"),
        }
        self
    }

    /// Remove the first-inserted entry with order key `order`
    ///
    /// Other entries sharing the key are kept.
    pub fn remove_at(&mut self, order: i32) -> &mut Self {
        match self.levels.get(&order).and_then(OrderLevel::peek_head) {
            Some(slot) => {
                self.unlink(slot);
                trace!(order, slot, "entry removed at order");
            }
            None => debug!(order, "remove_at: no entry with this order"),
        }
        self
    }

    /// Remove every entry whose element equals `element`
    pub fn remove_all_elements(&mut self, element: &T) -> &mut Self
    where
        T: PartialEq,
    {
        self.remove_all_where(|e| e == element)
    }

    /// Remove every entry whose element satisfies `pred`
    ///
    /// Each entry is tested exactly once. All matches are removed,
    /// adjacent ones included.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.add(1, 1).add(2, 2).add(3, 4).add(4, 5);
    /// list.remove_all_where(|n| n % 2 == 0);
    ///
    /// assert_eq!(list.into_pairs(), vec![(1, 1), (4, 5)]);
    /// ```
    pub fn remove_all_where<F>(&mut self, mut pred: F) -> &mut Self
    where
        F: FnMut(&T) -> bool,
    {
        let matched: Vec<usize> = self
            .nodes
            .iter()
            .filter(|(_, node)| pred(node.element()))
            .map(|(slot, _)| slot)
            .collect();

        for &slot in &matched {
            self.unlink(slot);
        }

        if matched.is_empty() {
            debug!("remove_all: no matching entries");
        } else {
            trace!(removed = matched.len(), len = self.nodes.len(), "entries removed");
        }
        self
    }

    /// Remove all entries
    ///
    /// Outstanding keys become stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.levels.clear();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check if any entry holds `element`
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.nodes.iter().any(|(_, node)| node.element() == element)
    }

    /// Check if any entry has order key `order`
    #[inline]
    pub fn contains_order(&self, order: i32) -> bool {
        self.levels.contains_key(&order)
    }

    /// Get the first entry in iteration order (lowest key, oldest)
    pub fn first(&self) -> Option<&OrderedEntry<T>> {
        let slot = self.levels.values().next()?.head?;
        self.nodes.get(slot).map(|node| &node.entry)
    }

    /// Get the last entry in iteration order (highest key, newest)
    pub fn last(&self) -> Option<&OrderedEntry<T>> {
        let slot = self.levels.values().next_back()?.tail?;
        self.nodes.get(slot).map(|node| &node.entry)
    }

    /// Iterate entries in ascending order
    ///
    /// Equal keys come out in insertion order. The iterator borrows the
    /// list, so it always reflects current contents.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.levels.values())
    }

    /// Snapshot of all entries in ascending order
    ///
    /// The returned vector is an owned copy; changing it does not affect
    /// the list.
    pub fn ordered_entries(&self) -> Vec<OrderedEntry<T>>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Borrow all entries in insertion order
    pub fn insertion_order(&self) -> Vec<&OrderedEntry<T>> {
        let mut nodes: Vec<&EntryNode<T>> = self.nodes.iter().map(|(_, node)| node).collect();
        nodes.sort_unstable_by_key(|node| node.seq);
        nodes.into_iter().map(|node| &node.entry).collect()
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Consume the list, returning entries in insertion order
    pub fn into_entries(self) -> Vec<OrderedEntry<T>> {
        let mut nodes: Vec<EntryNode<T>> = self.nodes.into_iter().map(|(_, node)| node).collect();
        nodes.sort_unstable_by_key(|node| node.seq);
        nodes.into_iter().map(|node| node.entry).collect()
    }

    /// Consume the list, returning `(order, element)` pairs in ascending order
    pub fn into_pairs(self) -> Vec<(i32, T)> {
        self.into_iter().map(OrderedEntry::into_pair).collect()
    }

    // ========================================================================
    // Absent-list Helpers
    // ========================================================================

    /// Use `list`, or a new empty list if there is none
    #[inline]
    pub fn or_empty(list: Option<Self>) -> Self {
        list.unwrap_or_default()
    }

    /// Add `element` at the default order, creating the list if absent
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_list::{OrderedList, DEFAULT_ORDER};
    ///
    /// let list = OrderedList::union(None, "a");
    /// assert_eq!(list.into_pairs(), vec![(DEFAULT_ORDER, "a")]);
    /// ```
    pub fn union(list: Option<Self>, element: T) -> Self {
        let mut list = Self::or_empty(list);
        list.push(element);
        list
    }

    /// Add `entry`, creating the list if absent
    pub fn union_entry(list: Option<Self>, entry: OrderedEntry<T>) -> Self {
        let mut list = Self::or_empty(list);
        list.add_entry(entry);
        list
    }

    /// Remove the first entry holding `element`, creating the list if absent
    pub fn difference(list: Option<Self>, element: &T) -> Self
    where
        T: PartialEq,
    {
        let mut list = Self::or_empty(list);
        list.remove_element(element);
        list
    }

    /// Remove the first entry equal to `entry`, creating the list if absent
    pub fn difference_entry(list: Option<Self>, entry: &OrderedEntry<T>) -> Self
    where
        T: PartialEq,
    {
        let mut list = Self::or_empty(list);
        list.remove(entry);
        list
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    #[inline]
    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Resolve a key to its node, checking the stamp
    fn node(&self, key: EntryKey) -> Option<&EntryNode<T>> {
        self.nodes.get(key.slot).filter(|node| node.stamp == key.stamp)
    }

    /// Slot of the lowest-sequence node whose element satisfies `pred`
    fn first_inserted_where<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.nodes
            .iter()
            .filter(|(_, node)| pred(node.element()))
            .min_by_key(|(_, node)| node.seq)
            .map(|(slot, _)| slot)
    }

    /// Append a stored node to the tail of its order level
    fn link(&mut self, slot: usize, order: i32) {
        self.levels
            .entry(order)
            .or_insert_with(|| OrderLevel::new(order))
            .push_back(slot, &mut self.nodes);
    }

    /// Unlink a node from its level, dropping the level if it empties
    fn detach(&mut self, slot: usize, order: i32) {
        if let Some(level) = self.levels.get_mut(&order) {
            level.remove(slot, &mut self.nodes);
            if level.is_empty() {
                self.levels.remove(&order);
            }
        }
    }

    /// Detach a node and take it out of the slab
    fn unlink(&mut self, slot: usize) -> Option<OrderedEntry<T>> {
        let order = self.nodes.get(slot)?.order();
        self.detach(slot, order);
        self.nodes.try_remove(slot).map(|node| node.entry)
    }
}

// ============================================================================
// Trait Impls
// ============================================================================

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a OrderedEntry<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = OrderedEntry<T>;
    type IntoIter = std::vec::IntoIter<OrderedEntry<T>>;

    /// Consume the list in ascending order
    fn into_iter(mut self) -> Self::IntoIter {
        let mut entries = Vec::with_capacity(self.nodes.len());
        for level in std::mem::take(&mut self.levels).into_values() {
            let mut cursor = level.head;
            while let Some(slot) = cursor {
                let Some(node) = self.nodes.try_remove(slot) else {
                    break;
                };
                cursor = node.next;
                entries.push(node.entry);
            }
        }
        entries.into_iter()
    }
}

impl<T> FromIterator<(i32, T)> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = (i32, T)>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> FromIterator<OrderedEntry<T>> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = OrderedEntry<T>>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<(i32, T)> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = (i32, T)>>(&mut self, iter: I) {
        for (order, element) in iter {
            self.add(order, element);
        }
    }
}

impl<T> Extend<OrderedEntry<T>> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = OrderedEntry<T>>>(&mut self, iter: I) {
        for entry in iter {
            self.add_entry(entry);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
