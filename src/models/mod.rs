//! Data models for the contact list.
//!
//! This module contains the contact record and the raw form draft it is
//! built from.

pub mod contact;

pub use contact::{Contact, ContactDraft};
