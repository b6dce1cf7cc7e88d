//! Validation error types
//!
//! Error codes:
//! - FIELD_TYPE_MISMATCH
//! - FIELD_MAX_LENGTH_EXCEEDED
//! - FIELD_NOT_UNIQUE

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Which validation rule a value violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    /// Runtime type does not match the declared field kind
    TypeMismatch,
    /// String longer than the field's max_length
    MaxLengthExceeded,
    /// Value already accepted by a unique field
    NotUnique,
}

impl ValidationErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorCode::TypeMismatch => "FIELD_TYPE_MISMATCH",
            ValidationErrorCode::MaxLengthExceeded => "FIELD_MAX_LENGTH_EXCEEDED",
            ValidationErrorCode::NotUnique => "FIELD_NOT_UNIQUE",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A rejected field value.
///
/// Carries the violated rule, the field name when the field has one, and a
/// human-readable message naming both.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ValidationError {
    code: ValidationErrorCode,
    field: Option<String>,
    message: String,
}

impl ValidationError {
    /// Create a type mismatch error
    pub fn type_mismatch(field: Option<&str>, expected: &str, actual: &str) -> Self {
        Self {
            code: ValidationErrorCode::TypeMismatch,
            field: field.map(str::to_string),
            message: format!("{} must be {}, got {}", subject(field), expected, actual),
        }
    }

    /// Create a max length exceeded error
    pub fn max_length_exceeded(field: Option<&str>, max_length: usize, actual: usize) -> Self {
        Self {
            code: ValidationErrorCode::MaxLengthExceeded,
            field: field.map(str::to_string),
            message: format!(
                "{} exceeds max_length of {} (length {})",
                subject(field),
                max_length,
                actual
            ),
        }
    }

    /// Create a uniqueness violation error
    pub fn not_unique(field: Option<&str>, value: &Value) -> Self {
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let message = match field {
            Some(name) => format!("Value '{}' must be unique for field '{}'", rendered, name),
            None => format!("Value '{}' must be unique", rendered),
        };
        Self {
            code: ValidationErrorCode::NotUnique,
            field: field.map(str::to_string),
            message,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ValidationErrorCode {
        self.code
    }

    /// Returns the offending field's name, if it has one
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn subject(field: Option<&str>) -> String {
    match field {
        Some(name) => format!("Value for field '{}'", name),
        None => "Value".to_string(),
    }
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
