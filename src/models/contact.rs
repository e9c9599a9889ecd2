//! Validated contact record.

use super::draft::ContactDraft;
use crate::domain::{validate_name, validate_number, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// A contact whose fields both passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name
    pub name: ContactName,

    /// Contact phone number
    pub number: PhoneNumber,
}

impl Contact {
    /// Validate both fields of a draft.
    ///
    /// Unlike `TryFrom`, this reports every failing field rather than the
    /// first one, in field order.
    pub fn validate(draft: &ContactDraft) -> Result<Self, Vec<ValidationError>> {
        let errors: Vec<ValidationError> = [
            validate_name(&draft.name),
            validate_number(&draft.number),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        Self::try_from(draft).map_err(|e| vec![e])
    }
}

impl TryFrom<&ContactDraft> for Contact {
    type Error = ValidationError;

    fn try_from(draft: &ContactDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            name: ContactName::new(draft.name.clone())?,
            number: PhoneNumber::new(draft.number.clone())?,
        })
    }
}

impl From<Contact> for ContactDraft {
    fn from(contact: Contact) -> Self {
        ContactDraft::new(contact.name.into_inner(), contact.number.into_inner())
    }
}
