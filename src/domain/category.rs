//! Category value object.

use super::errors::{Field, ValidationError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The fixed set of categories a contact can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Category {
    Work,
    Family,
    #[default]
    Personal,
}

impl Category {
    /// All categories, in the order the form offers them.
    pub const ALL: [Category; 3] = [Category::Work, Category::Family, Category::Personal];

    /// Display name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Family => "Family",
            Self::Personal => "Personal",
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parse a category name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField(Field::Category));
        }

        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownCategory(trimmed.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("work".parse::<Category>(), Ok(Category::Work));
        assert_eq!("  FAMILY ".parse::<Category>(), Ok(Category::Family));
        assert_eq!("Personal".parse::<Category>(), Ok(Category::Personal));
    }

    #[test]
    fn test_category_parse_empty() {
        assert_eq!(
            "   ".parse::<Category>(),
            Err(ValidationError::EmptyField(Field::Category))
        );
    }

    #[test]
    fn test_category_parse_unknown() {
        assert_eq!(
            "Gym".parse::<Category>(),
            Err(ValidationError::UnknownCategory("Gym".to_string()))
        );
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Family).unwrap();
        assert_eq!(json, "\"Family\"");
    }
}
