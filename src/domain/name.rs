//! ContactName value object.

use super::errors::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Latin and Cyrillic letters; single apostrophe, dash or space between runs.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Zа-яА-Я]+(([' -][a-zA-Zа-яА-Я ])?[a-zA-Zа-яА-Я]*)*$")
        .expect("Failed to compile contact name regex")
});

/// Validate a raw name field.
///
/// # Errors
///
/// - `ErrorKind::Required` if `value` is empty
/// - `ErrorKind::InvalidFormat` if `value` does not match the name pattern
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::required(Field::Name));
    }
    if !NAME_REGEX.is_match(value) {
        return Err(ValidationError::invalid_format(Field::Name));
    }
    Ok(())
}

/// A contact name that passed [`validate_name`].
///
/// # Example
///
/// ```
/// use contact_form::domain::ContactName;
///
/// let name = ContactName::new("Charles de Batz de Castelmore d'Artagnan").unwrap();
/// assert!(name.matches("charles de batz de castelmore d'artagnan", false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating the format.
    ///
    /// # Errors
    ///
    /// Returns the error produced by [`validate_name`].
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Compare against a raw name, optionally ignoring case.
    pub fn matches(&self, other: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.0 == other
        } else {
            self.0.to_lowercase() == other.to_lowercase()
        }
    }
}

// Serde support - serialize as string
impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;

    fn kind_of(value: &str) -> Option<ErrorKind> {
        validate_name(value).err().map(|e| e.kind)
    }

    #[test]
    fn test_name_accepts_examples() {
        for value in [
            "Adrian",
            "Jacob Mercer",
            "Charles de Batz de Castelmore d'Artagnan",
            "Rosie Simpson",
            "Mary-Jane",
            "Анна Каренина",
            "Olga Петрова",
        ] {
            assert!(validate_name(value).is_ok(), "{value} should be valid");
        }
    }

    #[test]
    fn test_name_rejects_bad_formats() {
        for value in [
            "Rosie1",
            "R2D2",
            "-Rosie",
            "'Rosie",
            " Rosie",
            "Rosie--Simpson",
            "Rosie''Simpson",
            "John_Doe",
            "   ",
            "José",
        ] {
            assert_eq!(
                kind_of(value),
                Some(ErrorKind::InvalidFormat),
                "{value} should be rejected as invalid format"
            );
        }
    }

    #[test]
    fn test_name_empty_is_required() {
        assert_eq!(kind_of(""), Some(ErrorKind::Required));
    }

    #[test]
    fn test_name_error_message() {
        let err = validate_name("Rosie1").unwrap_err();
        assert_eq!(err.field, Field::Name);
        assert!(err.message.contains("d'Artagnan"));
    }

    #[test]
    fn test_name_matches_case_insensitive() {
        let name = ContactName::new("Rosie Simpson").unwrap();
        assert!(name.matches("rosie simpson", false));
        assert!(!name.matches("rosie simpson", true));
        assert!(name.matches("Rosie Simpson", true));
    }

    #[test]
    fn test_name_deserialization_invalid_fails() {
        let result: Result<ContactName, _> = serde_json::from_str("\"R2D2\"");
        assert!(result.is_err());
    }
}
