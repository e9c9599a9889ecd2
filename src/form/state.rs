//! Submission state machine types.

use crate::domain::ValidationError;
use crate::models::Contact;
use std::fmt;

/// Lifecycle state of the contact form.
///
/// `Submitting`, `Accepted` and `Rejected` are only held for the duration of
/// a single [`submit`](super::ContactForm::submit) call; between calls the
/// form is always `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    Accepted,
    Rejected,
}

impl FormState {
    /// Whether the machine may move from `self` to `next`.
    ///
    /// Any state may return to `Editing`, which is how reset works.
    pub fn can_transition_to(self, next: FormState) -> bool {
        matches!(
            (self, next),
            (_, FormState::Editing)
                | (FormState::Editing, FormState::Submitting)
                | (FormState::Submitting, FormState::Accepted)
                | (FormState::Submitting, FormState::Rejected)
        )
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        };
        write!(f, "{}", s)
    }
}

/// Result of a single submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both fields were valid and the collection accepted the contact.
    /// The form has been cleared.
    Accepted(Contact),

    /// At least one field failed validation. The collection was not called.
    Invalid(Vec<ValidationError>),

    /// The collection rejected the contact as a duplicate. The draft is kept.
    Duplicate(ValidationError),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Errors produced by this attempt, empty when accepted.
    pub fn errors(&self) -> Vec<&ValidationError> {
        match self {
            Self::Accepted(_) => Vec::new(),
            Self::Invalid(errors) => errors.iter().collect(),
            Self::Duplicate(error) => vec![error],
        }
    }
}
