//! Error type for ObjectId validation.

use thiserror::Error;

/// A value that does not satisfy the ObjectId grammar.
///
/// The `Display` output is a diagnostic for logs. Client-facing wording is
/// chosen by the transport adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid ObjectId{}: {value:?}", field_suffix(.field))]
pub struct InvalidObjectId {
    /// Name of the field being validated, when known.
    pub field: Option<String>,

    /// The offending raw value.
    pub value: String,
}

impl InvalidObjectId {
    /// Creates an error for a value with no associated field.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            field: None,
            value: value.into(),
        }
    }

    /// Attaches the name of the field the value came from.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

fn field_suffix(field: &Option<String>) -> String {
    match field {
        Some(name) => format!(" for field '{name}'"),
        None => String::new(),
    }
}
