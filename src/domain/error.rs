//! Domain errors for configuration validation.

use std::fmt;

use thiserror::Error;

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The key is absent from the mapping
    Missing,

    /// The key is present but holds a value of the wrong type
    WrongType {
        /// Type the schema declares
        expected: &'static str,
        /// Type actually present in the mapping
        found: &'static str,
    },
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing required field"),
            Self::WrongType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
        }
    }
}

/// A validation failure on one named field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {kind}")]
pub struct FieldError {
    /// Schema field name
    pub field: &'static str,
    /// Reason the field was rejected
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// Field absent from the mapping
    pub const fn missing(field: &'static str) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Missing,
        }
    }

    /// Field present with an unexpected value type
    pub const fn wrong_type(field: &'static str, expected: &'static str, found: &'static str) -> Self {
        Self {
            field,
            kind: FieldErrorKind::WrongType { expected, found },
        }
    }
}

/// Every field-level failure found while validating a configuration mapping.
///
/// Never empty when returned from validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("configuration validation failed with {}", format_field_errors(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub(crate) const fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Field errors in schema declaration order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Look up the failure recorded for `field`, if any
    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Format as `N error(s): a: reason; b: reason`.
fn format_field_errors(errors: &[FieldError]) -> String {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    format!("{} error(s): {joined}", errors.len())
}
