//! Error types for the ordered list.
//!
//! Removal of an absent target is not an error: those operations are
//! no-ops. The only runtime failure is addressing an entry through a key
//! whose entry has already been removed.

use thiserror::Error;

/// Errors returned by keyed operations on an `OrderedList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderedListError {
    /// The key's entry was removed (its slot may now hold another entry)
    #[error("entry key for slot {slot} is stale")]
    StaleKey {
        /// Slab slot the key pointed at
        slot: usize,
    },
}

/// Result alias for ordered list operations
pub type Result<T> = std::result::Result<T, OrderedListError>;
