//! Core data types for the ordered list
//!
//! ## Types
//!
//! - [`OrderedEntry`]: An element paired with its order key
//! - [`EntryKey`]: Identity handle for one stored entry
//! - [`DEFAULT_ORDER`]: Order key for elements added without one

mod entry;

pub use entry::{EntryKey, OrderedEntry, DEFAULT_ORDER};
