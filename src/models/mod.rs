//! Data models for the contact form.
//!
//! A [`ContactDraft`] holds raw field values while the form is being filled;
//! a [`Contact`] is the validated record produced from it.

pub mod contact;
pub mod draft;

pub use contact::Contact;
pub use draft::ContactDraft;
