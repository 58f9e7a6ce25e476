//! Ordered list module.
//!
//! ## Architecture
//!
//! Entries are grouped by order key, then by arrival:
//!
//! - **Slab-based storage**: O(1) entry insertion, removal, and lookup
//! - **Order levels**: Entries grouped by order key using BTreeMap
//! - **Insertion priority**: FIFO ordering at each order level
//!
//! ## Components
//!
//! - [`EntryNode`]: Wrapper around `OrderedEntry` with linked-list pointers
//! - [`OrderLevel`]: Queue of entries at a single order key
//! - [`OrderedList`]: The container
//! - [`Iter`]: Lazy ascending-order iterator
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Add entry | O(log k) |
//! | Remove by key / order | O(log k) |
//! | Remove by element / predicate | O(n) |
//! | Iterate | O(n) |
//! | Length | O(1) |
//!
//! k = number of distinct order keys
//!
//! ## Example
//!
//! ```
//! use ordered_list::list::OrderedList;
//!
//! let mut list = OrderedList::with_capacity(16);
//! list.add(2, "second").add(1, "first");
//!
//! assert_eq!(list.first().map(|e| e.element), Some("first"));
//! ```

pub mod node;
pub mod level;
pub mod iter;
pub mod ordered;

#[cfg(feature = "serde")]
mod serde_impl;

pub use node::EntryNode;
pub use level::OrderLevel;
pub use iter::Iter;
pub use ordered::OrderedList;
