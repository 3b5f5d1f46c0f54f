//! Persistent (immutable) data structures.
//!
//! - [`PersistentList`]: Persistent singly-linked list, the sequence type
//!   every fold in this crate works over.
//!
//! # Structural Sharing
//!
//! Prepending, taking the tail, or dropping a prefix creates a new version
//! that reuses the nodes of the old one instead of copying them.
//!
//! ```rust
//! use listfold::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New list
//! ```

mod list;

pub use list::{PersistentList, PersistentListIntoIterator, PersistentListIterator};
