//! The contact entry form.
//!
//! Holds the draft and per-field errors, validates on submit, and hands valid
//! drafts to a [`ContactCollection`].

use super::state::{FormState, SubmitOutcome};
use crate::config::Config;
use crate::domain::{validate_name, validate_number, Field, ValidationError};
use crate::models::{Contact, ContactDraft};
use crate::repositories::ContactCollection;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Name/number entry form with submit and reset.
///
/// # Example
///
/// ```
/// use contact_form::form::ContactForm;
/// use contact_form::repositories::InMemoryContactBook;
///
/// let mut book = InMemoryContactBook::new();
/// let mut form = ContactForm::new();
/// form.set_name("Rosie Simpson");
/// form.set_number("459-12-56");
///
/// assert!(form.submit(&mut book).is_accepted());
/// assert!(form.draft().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: BTreeMap<Field, ValidationError>,
    state: FormState,
    submit_count: u32,
    revalidate_on_change: bool,
}

impl ContactForm {
    /// Create an empty form that re-validates edited fields after the first
    /// submit attempt.
    pub fn new() -> Self {
        Self::with_revalidation(true)
    }

    /// Create an empty form using the configured behaviour.
    pub fn from_config(config: &Config) -> Self {
        Self::with_revalidation(config.revalidate_on_change)
    }

    /// Create an empty form, choosing whether edits after a submit attempt
    /// re-validate the edited field.
    pub fn with_revalidation(revalidate_on_change: bool) -> Self {
        Self {
            draft: ContactDraft::default(),
            errors: BTreeMap::new(),
            state: FormState::Editing,
            submit_count: 0,
            revalidate_on_change,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Submit attempts since the form was last cleared.
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Current errors in field order.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    /// Current error for one field, if any.
    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set_field(Field::Name, value);
    }

    pub fn set_number(&mut self, value: impl Into<String>) {
        self.set_field(Field::Number, value);
    }

    /// Update one field of the draft.
    ///
    /// Before the first submit attempt this never validates. Afterwards the
    /// edited field is re-validated, so fixing a field clears its error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);

        if self.revalidate_on_change && self.submit_count > 0 {
            self.revalidate(field);
        }
    }

    fn revalidate(&mut self, field: Field) {
        let result = match field {
            Field::Name => validate_name(&self.draft.name),
            Field::Number => validate_number(&self.draft.number),
        };

        match result {
            Ok(()) => {
                if self.errors.remove(&field).is_some() {
                    debug!(field = %field, "Field error cleared");
                }
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }

    /// Validate the draft and, if valid, offer it to `collection`.
    ///
    /// - Invalid fields: errors are recorded, `collection` is not called, the
    ///   draft is kept.
    /// - Rejected by `collection`: a duplicate-name error is attached to the
    ///   name field and the draft is kept.
    /// - Accepted: the draft and all errors are cleared.
    ///
    /// The form is back in [`FormState::Editing`] when this returns.
    pub fn submit<C>(&mut self, collection: &mut C) -> SubmitOutcome
    where
        C: ContactCollection + ?Sized,
    {
        self.transition(FormState::Submitting);
        self.submit_count += 1;
        self.errors.clear();

        let contact = match Contact::validate(&self.draft) {
            Ok(contact) => contact,
            Err(errors) => {
                debug!(count = errors.len(), "Submit blocked by field errors");
                for e in &errors {
                    self.errors.insert(e.field, e.clone());
                }
                self.finish(FormState::Rejected);
                return SubmitOutcome::Invalid(errors);
            }
        };

        if !collection.add_contact(&self.draft) {
            let error = ValidationError::duplicate_name(&self.draft.name);
            info!(name = %self.draft.name, "Contact rejected as duplicate");
            self.errors.insert(Field::Name, error.clone());
            self.finish(FormState::Rejected);
            return SubmitOutcome::Duplicate(error);
        }

        info!(name = %contact.name, "Contact accepted");
        self.clear();
        self.finish(FormState::Accepted);
        SubmitOutcome::Accepted(contact)
    }

    /// Clear the draft and all errors. Callable in any state.
    pub fn reset(&mut self) {
        self.clear();
        self.transition(FormState::Editing);
        debug!("Form reset");
    }

    fn clear(&mut self) {
        self.draft.clear();
        self.errors.clear();
        self.submit_count = 0;
    }

    fn finish(&mut self, outcome: FormState) {
        self.transition(outcome);
        self.transition(FormState::Editing);
    }

    fn transition(&mut self, next: FormState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal form transition {} -> {}",
            self.state,
            next
        );
        debug!(from = %self.state, to = %next, "Form state transition");
        self.state = next;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
