//! Fuzzy matching utilities for the contact list.
//!
//! This module provides fuzzy name matching and exact phone matching over a
//! contact list snapshot.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{ContactMatcher, ContactQuery, MatchResult, MatchType};
