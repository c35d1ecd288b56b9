//! Fuzzy matching implementation for the contact list.
//!
//! This module provides contact lookup with:
//! - Exact matching on phone digits
//! - Fuzzy name matching (substring and Levenshtein based)
//! - Confidence scoring (0-100 scale)
//! - Optional category filtering

use crate::domain::Category;
use crate::error::{MatchingError, MatchingResult};
use crate::models::Contact;

/// A match result containing a contact, where it sits and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Position of the contact in the searched list
    pub position: usize,

    /// The matched contact
    pub contact: Contact,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Same phone digits
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Search query parameters for contact matching.
#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
    /// Name to search for
    pub name: Option<String>,

    /// Phone number to search for
    pub phone: Option<String>,

    /// Only consider contacts in this category
    pub category: Option<Category>,
}

impl ContactQuery {
    fn has_terms(&self) -> bool {
        let filled = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        filled(&self.name) || filled(&self.phone)
    }
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find matching contacts in a list.
    ///
    /// # Arguments
    /// * `query` - Search parameters (name, phone, category)
    /// * `contacts` - Contacts in display order
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), then by name.
    ///
    /// # Errors
    ///
    /// Returns `MatchingError::InvalidQuery` if neither a name nor a phone is given.
    pub fn find_matches(
        &self,
        query: &ContactQuery,
        contacts: &[Contact],
        max_results: usize,
        min_confidence: u8,
    ) -> MatchingResult<Vec<MatchResult>> {
        if !query.has_terms() {
            return Err(MatchingError::InvalidQuery(
                "a name or phone is required".to_string(),
            ));
        }

        let mut results: Vec<MatchResult> = Vec::new();

        for (position, contact) in contacts.iter().enumerate() {
            if query.category.is_some_and(|category| category != contact.category) {
                continue;
            }

            // Exact phone match wins over name similarity
            if let Some(phone) = &query.phone {
                if let Some(confidence) = self.match_phone(phone, contact) {
                    results.push(MatchResult {
                        position,
                        contact: contact.clone(),
                        confidence,
                        match_type: MatchType::ExactPhone,
                    });
                    continue;
                }
            }

            if let Some(name) = &query.name {
                if let Some(confidence) = self.fuzzy_match_name(name, &contact.name) {
                    if confidence >= min_confidence {
                        results.push(MatchResult {
                            position,
                            contact: contact.clone(),
                            confidence,
                            match_type: MatchType::FuzzyName,
                        });
                    }
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.contact.name.cmp(&b.contact.name))
        });
        results.truncate(max_results);

        tracing::debug!(matches = results.len(), "Contact search finished");
        Ok(results)
    }

    /// Match phone numbers on their digits.
    ///
    /// Returns confidence score (100) if matched, None otherwise.
    fn match_phone(&self, query_phone: &str, contact: &Contact) -> Option<u8> {
        let normalized_query = Self::normalize_phone(query_phone);
        if normalized_query.is_empty() {
            return None;
        }

        (Self::normalize_phone(&contact.phone) == normalized_query).then_some(100)
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, contact_name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(contact_name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);
        (score > 0).then_some(score)
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row
        let mut row: Vec<usize> = (0..=s2_chars.len()).collect();
        for (i, c1) in s1_chars.iter().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
                diagonal = row[j + 1];
                row[j + 1] = next;
            }
        }

        row[s2_chars.len()]
    }

    // ==================== Normalization Functions ====================

    /// Normalize a phone number for comparison.
    ///
    /// Keeps only the digits.
    pub fn normalize_phone(phone: &str) -> String {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
