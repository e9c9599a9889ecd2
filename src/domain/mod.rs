//! Domain value objects and field validators.
//!
//! The two form fields each have a validator returning a field-scoped
//! [`ValidationError`] and a value object that can only be built from input
//! the validator accepts.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::{ErrorKind, Field, ValidationError};
pub use name::{validate_name, ContactName};
pub use phone::{validate_number, PhoneNumber};
