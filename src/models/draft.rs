//! In-progress form values.

use crate::domain::Field;
use serde::{Deserialize, Serialize};

/// The unsubmitted contents of the contact form.
///
/// Values are kept exactly as typed; nothing is trimmed or normalised until
/// the draft is turned into a [`Contact`](super::Contact).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDraft {
    /// Name as typed
    pub name: String,

    /// Phone number as typed
    pub number: String,
}

impl ContactDraft {
    /// Create a draft from raw field values.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Number => &self.number,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Number => self.number = value,
        }
    }

    /// Reset both fields to empty strings.
    pub fn clear(&mut self) {
        self.name.clear();
        self.number.clear();
    }

    /// True when both fields are empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.number.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_get_set() {
        let mut draft = ContactDraft::default();
        draft.set(Field::Name, "Rosie Simpson");
        draft.set(Field::Number, "459-12-56");
        assert_eq!(draft.get(Field::Name), "Rosie Simpson");
        assert_eq!(draft.get(Field::Number), "459-12-56");
    }

    #[test]
    fn test_draft_clear() {
        let mut draft = ContactDraft::new("Rosie Simpson", "459-12-56");
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn test_draft_deserialization_missing_fields() {
        let draft: ContactDraft = serde_json::from_str(r#"{"name":"Adrian"}"#).unwrap();
        assert_eq!(draft.name, "Adrian");
        assert_eq!(draft.number, "");
    }
}
