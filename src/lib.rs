//! Contact Form - validated name and phone number entry.
//!
//! This library implements a small contact entry form: two fields, pattern
//! validation, and a submit/reset flow that hands valid drafts to a parent
//! contact collection.
//!
//! # Architecture
//!
//! - **domain**: Field validators and the value objects they guard
//! - **models**: The in-progress draft and the validated contact
//! - **repositories**: The collection trait the form submits to, plus an in-memory list
//! - **form**: Form state, errors, and the submission state machine
//! - **console**: Line-oriented front end used by the binary
//! - **config**: Configuration from environment variables
//! - **error**: Crate-level error types

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod form;
pub mod models;
pub mod repositories;

pub use config::Config;
pub use domain::{validate_name, validate_number, ErrorKind, Field, ValidationError};
pub use error::{ConfigError, ConsoleError};
pub use form::{ContactForm, FormState, SubmitOutcome};
pub use models::{Contact, ContactDraft};
pub use repositories::{ContactCollection, InMemoryContactBook};
