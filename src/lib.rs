//! # Ordered List
//!
//! A generic container that tags each element with an integer order key
//! and always iterates in ascending key order.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (OrderedEntry, EntryKey)
//! - **List**: Slab-backed storage indexed by order level
//! - **Error**: The one runtime failure (stale keys)
//!
//! ## Guarantees
//!
//! 1. **Stable ordering**: Equal keys iterate in insertion order
//! 2. **No deduplication**: Equal entries are stored separately
//! 3. **Silent misses**: Removing something absent is a no-op
//! 4. **Snapshot reads**: `ordered_entries` returns an owned copy
//!
//! ## Example
//!
//! ```
//! use ordered_list::{OrderedList, OrderedEntry};
//!
//! let mut list = OrderedList::new();
//! list.add(5, "x").add(5, "y").add(1, "w");
//! list.remove_at(5);
//!
//! assert_eq!(
//!     list.ordered_entries(),
//!     vec![OrderedEntry::new(1, "w"), OrderedEntry::new(5, "y")]
//! );
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: OrderedEntry, EntryKey
pub mod types;

/// Ordered list: slab storage with order-level index
pub mod list;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{EntryKey, OrderedEntry, DEFAULT_ORDER};
pub use list::{Iter, OrderedList};
pub use error::{OrderedListError, Result};
