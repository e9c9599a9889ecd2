//! PhoneNumber value object.

use super::errors::{Field, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Unanchored: a value passes when a phone-shaped run appears anywhere in it.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\+?[0-9]{1,4}[-.\s]?\(?[0-9]{1,3}\)?[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,9}",
    )
    .expect("Failed to compile phone number regex")
});

/// Validate a raw phone number field.
///
/// # Errors
///
/// - `ErrorKind::Required` if `value` is empty
/// - `ErrorKind::InvalidFormat` if `value` contains no run matching the
///   phone pattern
pub fn validate_number(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::required(Field::Number));
    }
    if !PHONE_REGEX.is_match(value) {
        return Err(ValidationError::invalid_format(Field::Number));
    }
    Ok(())
}

/// A type-safe wrapper for phone numbers.
///
/// The accepted shape is permissive: somewhere in the value there must be an
/// optional `+` followed by at least five digits split into groups by single
/// spaces, dashes or dots, with the second group optionally wrapped in
/// parentheses. Surrounding text such as `Tel:` or `(work)` is allowed.
///
/// # Example
///
/// ```
/// use contact_form::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("459-12-56").unwrap();
/// assert_eq!(phone.as_str(), "459-12-56");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns the error produced by [`validate_number`].
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        validate_number(&phone)?;
        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
