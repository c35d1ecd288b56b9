//! In-memory contact storage.
//!
//! [`ContactStore`] is the single writer of the contact list. Every change
//! produces a fresh [`ContactList`] snapshot; snapshots handed out earlier
//! are never modified.

mod contact_list;
mod contact_store;

pub use contact_list::ContactList;
pub use contact_store::ContactStore;
