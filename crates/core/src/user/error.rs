use std::fmt;

use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field was empty.
    Required(&'static str),
    /// The field was present but did not satisfy its rule.
    Invalid(&'static str),
}

impl FieldError {
    /// Name of the offending field, as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Required(field) | FieldError::Invalid(field) => field,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{field} is required"),
            FieldError::Invalid(field) => write!(f, "{field} is invalid"),
        }
    }
}

/// Every field failure found while validating a user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", join(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// The individual field failures, in field order.
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns true if the given field has at least one failure.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
