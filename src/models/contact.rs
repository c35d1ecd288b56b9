//! Contact model representing one entry of the contact list.

use crate::domain::{Category, ContactId, Field, ValidationError};
use serde::Serialize;

/// Raw form input for a contact.
///
/// The form collaborator passes user-entered strings through unchanged;
/// nothing is checked until the draft is turned into a [`Contact`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDraft {
    /// Name as typed
    pub name: String,

    /// Phone as typed (free-form)
    pub phone: String,

    /// Category name as typed or picked
    pub category: String,
}

impl ContactDraft {
    /// Create a draft from the three form fields.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            category: category.into(),
        }
    }

    /// Check the required fields and return the trimmed values.
    ///
    /// Fields are checked in form order, so the first empty one is reported.
    pub fn validate(&self) -> Result<(String, String, Category), ValidationError> {
        let name = required(&self.name, Field::Name)?;
        let phone = required(&self.phone, Field::Phone)?;
        let category = self.category.parse::<Category>()?;
        Ok((name.to_string(), phone.to_string(), category))
    }
}

fn required(value: &str, field: Field) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed)
}

/// A contact in the list.
///
/// Every `Contact` has passed the required-field checks: name and phone
/// are non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Stable identifier assigned at creation
    pub id: ContactId,

    /// Display name
    pub name: String,

    /// Phone number, free-form
    pub phone: String,

    /// Category the contact is filed under
    pub category: Category,
}

impl Contact {
    /// Build a contact from a draft, validating the required fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any field is empty after trimming or
    /// the category is unknown.
    pub fn from_draft(id: ContactId, draft: &ContactDraft) -> Result<Self, ValidationError> {
        Ok(Self::from_fields(id, draft.validate()?))
    }

    /// Build a contact from fields already returned by [`ContactDraft::validate`].
    pub(crate) fn from_fields(id: ContactId, fields: (String, String, Category)) -> Self {
        let (name, phone, category) = fields;
        Self {
            id,
            name,
            phone,
            category,
        }
    }

    /// Turn the contact back into form input, e.g. to prefill the edit form.
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft::new(&self.name, &self.phone, self.category.as_str())
    }

    /// Secondary line shown under the name: `"<phone> - <category>"`.
    pub fn description(&self) -> String {
        format!("{} - {}", self.phone, self.category)
    }

    /// Avatar label: the first character of the name, uppercased.
    pub fn avatar_label(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
