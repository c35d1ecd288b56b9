//! Error types for the contact list.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactId, ValidationError};
use thiserror::Error;

/// Errors that can occur when reading or changing the contact list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The submitted record failed the required-field checks
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A position outside the current bounds was referenced
    #[error("Position {position} is out of bounds (list has {len} contacts)")]
    Index { position: usize, len: usize },

    /// No contact carries the given id
    #[error("Contact not found: {0}")]
    NotFound(ContactId),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur during contact matching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// Invalid search query
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with MatchingError
pub type MatchingResult<T> = Result<T, MatchingError>;
