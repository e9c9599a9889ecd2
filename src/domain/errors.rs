//! Field-scoped validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A form field that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Number,
}

impl Field {
    /// All fields in entry order.
    pub const ALL: [Field; 2] = [Field::Name, Field::Number];

    /// Short label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Number => "Number",
        }
    }

    /// Example value shown in an empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Rosie Simpson",
            Self::Number => "459-12-56",
        }
    }

    /// Describes the accepted format. Same text as the format error.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Name => NAME_FORMAT_MESSAGE,
            Self::Number => NUMBER_FORMAT_MESSAGE,
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            Self::Name => "Name is required",
            Self::Number => "Phone number is required",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Number => write!(f, "number"),
        }
    }
}

const NAME_FORMAT_MESSAGE: &str = "Name may contain only letters, apostrophe, dash and spaces. \
For example Adrian, Jacob Mercer, Charles de Batz de Castelmore d'Artagnan";

const NUMBER_FORMAT_MESSAGE: &str = "Phone number must be digits and can contain spaces, \
dashes, parentheses and can start with +";

/// Category of a field error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The field was left empty.
    Required,

    /// The field does not match its pattern.
    InvalidFormat,

    /// The collaborator already holds a contact with this name.
    DuplicateName,
}

/// An error attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: Field,
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    /// The field is empty.
    pub fn required(field: Field) -> Self {
        Self {
            field,
            kind: ErrorKind::Required,
            message: field.required_message().to_string(),
        }
    }

    /// The field does not match its pattern.
    pub fn invalid_format(field: Field) -> Self {
        Self {
            field,
            kind: ErrorKind::InvalidFormat,
            message: field.hint().to_string(),
        }
    }

    /// The name is already present in the collection.
    pub fn duplicate_name(name: &str) -> Self {
        Self {
            field: Field::Name,
            kind: ErrorKind::DuplicateName,
            message: format!("{} is already in contacts.", name),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}
