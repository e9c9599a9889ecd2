//! In-memory contact list used as the form's parent collection.

use super::traits::ContactCollection;
use crate::models::{Contact, ContactDraft};
use tracing::{debug, warn};

/// Ordered list of contacts with duplicate-name detection.
#[derive(Debug, Clone)]
pub struct InMemoryContactBook {
    contacts: Vec<Contact>,
    case_sensitive: bool,
}

impl InMemoryContactBook {
    /// Create an empty book that compares names case-insensitively.
    pub fn new() -> Self {
        Self::with_case_sensitivity(false)
    }

    /// Create an empty book with the given name comparison mode.
    pub fn with_case_sensitivity(case_sensitive: bool) -> Self {
        Self {
            contacts: Vec::new(),
            case_sensitive,
        }
    }

    /// Whether a contact with this name is already stored.
    pub fn contains_name(&self, name: &str) -> bool {
        self.contacts
            .iter()
            .any(|c| c.name.matches(name, self.case_sensitive))
    }

    /// Remove the contact with this name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.name.matches(name, self.case_sensitive))?;
        Some(self.contacts.remove(index))
    }

    /// Stored contacts in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl Default for InMemoryContactBook {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactCollection for InMemoryContactBook {
    fn add_contact(&mut self, draft: &ContactDraft) -> bool {
        if self.contains_name(&draft.name) {
            debug!(name = %draft.name, "Contact already exists");
            return false;
        }

        // The form validates before calling us, but the book is public API.
        let contact = match Contact::try_from(draft) {
            Ok(contact) => contact,
            Err(e) => {
                warn!(field = %e.field, error = %e, "Refusing invalid contact draft");
                return false;
            }
        };

        debug!(name = %contact.name, total = self.contacts.len() + 1, "Contact added");
        self.contacts.push(contact);
        true
    }
}
