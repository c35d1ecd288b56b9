//! Stable contact identity.

use super::errors::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identity handed out when a contact is appended, e.g. `contact_3`.
///
/// Positions shift when an earlier contact is deleted; the id does not, and
/// it is kept when the contact is edited.
///
/// ```
/// use contact_list::domain::ContactId;
///
/// let id: ContactId = " contact_1 ".parse().unwrap();
/// assert_eq!(id, ContactId::from_sequence(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Id of the n-th contact created in a session.
    pub fn from_sequence(n: u64) -> Self {
        Self(format!("contact_{}", n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parses an id supplied by a client. Surrounding whitespace is ignored.
impl FromStr for ContactId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ValidationError::EmptyId),
            id => Ok(Self(id.to_string())),
        }
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
