//! Entry types for the ordered list.
//!
//! ## Entries Are Values
//!
//! An [`OrderedEntry`] is plain data: an `i32` order key and an element.
//! Two entries with the same order and element are equal as values but
//! are still stored separately; the list never deduplicates.
//!
//! ## Identity
//!
//! Identity of a stored entry is carried by an [`EntryKey`], handed out
//! by `OrderedList::insert`. Keys combine the slab slot with a stamp so a
//! key for a removed entry never resolves to a newer entry that reused
//! the same slot.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order key used when an element is added without an explicit order.
pub const DEFAULT_ORDER: i32 = 100;

// ============================================================================
// OrderedEntry
// ============================================================================

/// An element tagged with an integer order key.
///
/// Lower order keys sort first. Keys need not be unique and carry no
/// range restriction.
///
/// ## Example
///
/// ```
/// use ordered_list::types::OrderedEntry;
///
/// let entry = OrderedEntry::new(5, "render");
/// assert_eq!(entry.order, 5);
/// assert_eq!(entry.element, "render");
/// assert_eq!(entry.into_pair(), (5, "render"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderedEntry<T> {
    /// Priority key (ascending iteration order)
    pub order: i32,

    /// The wrapped element
    pub element: T,
}

impl<T> OrderedEntry<T> {
    /// Create a new entry
    #[inline]
    pub fn new(order: i32, element: T) -> Self {
        Self { order, element }
    }

    /// Split into `(order, element)`
    #[inline]
    pub fn into_pair(self) -> (i32, T) {
        (self.order, self.element)
    }

    /// Borrow as `(order, &element)`
    #[inline]
    pub fn as_pair(&self) -> (i32, &T) {
        (self.order, &self.element)
    }
}

impl<T> From<(i32, T)> for OrderedEntry<T> {
    fn from((order, element): (i32, T)) -> Self {
        Self::new(order, element)
    }
}

impl<T> From<OrderedEntry<T>> for (i32, T) {
    fn from(entry: OrderedEntry<T>) -> Self {
        entry.into_pair()
    }
}

// ============================================================================
// EntryKey
// ============================================================================

/// Handle to one stored entry.
///
/// Valid until that entry is removed. Never reused for a different entry,
/// even when the underlying slab slot is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey {
    /// Slab slot holding the entry
    pub(crate) slot: usize,

    /// Identity stamp assigned at insertion
    pub(crate) stamp: u64,
}

impl EntryKey {
    #[inline]
    pub(crate) fn new(slot: usize, stamp: u64) -> Self {
        Self { slot, stamp }
    }

    /// Slab slot this key points at
    #[inline]
    pub fn slot(&self) -> usize {
        self.slot
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
