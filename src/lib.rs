//! Contact List - an in-memory contact list screen served over the Model Context Protocol.
//!
//! Users add, edit and delete contacts (name, phone, category) through a modal
//! form. The list lives for one session only.
//!
//! # Architecture
//!
//! - **domain**: Value objects for contact ids and categories
//! - **models**: The contact record and the raw form draft
//! - **store**: The single-writer contact store and its immutable list snapshots
//! - **screen**: Headless screen state (list rows, modal form, notices)
//! - **prompt**: Confirmation prompt collaborator for deletes
//! - **matching**: Fuzzy name and exact phone search
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod prompt;
pub mod screen;
pub mod server;
pub mod store;

pub use config::Config;
pub use domain::{Category, ContactId, ValidationError};
pub use error::{ConfigError, MatchingError, StoreError};
pub use matching::{ContactMatcher, ContactQuery, MatchResult};
pub use models::{Contact, ContactDraft};
pub use prompt::{Confirmation, ConfirmationPrompt, PresetPrompt};
pub use screen::{ContactRow, ContactScreen, DeleteOutcome, FormMode};
pub use server::ContactListServer;
pub use store::{ContactList, ContactStore};
