//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! contact IDs and categories. These value objects provide validation at
//! construction time and prevent invalid data from being represented in
//! the contact list.

pub mod category;
pub mod contact_id;
pub mod errors;

pub use category::Category;
pub use contact_id::ContactId;
pub use errors::{Field, ValidationError};
