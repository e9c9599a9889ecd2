//! Contact form state and submission flow.

mod contact_form;
mod state;

pub use contact_form::ContactForm;
pub use state::{FormState, SubmitOutcome};
