//! Field descriptor
//!
//! Validation order:
//! 1. Type check against the declared kind
//! 2. Length check (char fields only)
//! 3. Uniqueness check (unique fields only)
//!
//! The first failing check wins. A unique field records every value that
//! passes, so validating the same value twice fails the second time.

use serde_json::Value;
use tracing::{debug, trace};

use super::errors::{ValidationError, ValidationResult};
use super::types::{json_type_name, FieldId, FieldKind};
use super::unique::UniqueStore;
use crate::model::Record;
use crate::observability::Event;

/// A named, typed attribute with an optional uniqueness constraint.
///
/// Fields start unnamed; [`RecordTypeBuilder::build`](crate::model::RecordTypeBuilder::build)
/// assigns the declared name. Once the record type is built the field is only
/// reachable through shared references, so the name cannot change.
#[derive(Debug)]
pub struct Field {
    id: FieldId,
    name: Option<String>,
    kind: FieldKind,
    unique: bool,
}

impl Field {
    fn new(kind: FieldKind) -> Self {
        Self {
            id: FieldId::generate(),
            name: None,
            kind,
            unique: false,
        }
    }

    /// Create a string field accepting at most `max_length` characters
    pub fn char(max_length: usize) -> Self {
        Self::new(FieldKind::Char { max_length })
    }

    /// Create an integer field
    pub fn integer() -> Self {
        Self::new(FieldKind::Integer)
    }

    /// Create a boolean field
    pub fn boolean() -> Self {
        Self::new(FieldKind::Boolean)
    }

    /// Create a number field
    pub fn float() -> Self {
        Self::new(FieldKind::Float)
    }

    /// Reject values this field has already accepted
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Declared name, once the owning record type has been built
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Maximum length for char fields
    pub fn max_length(&self) -> Option<usize> {
        match self.kind {
            FieldKind::Char { max_length } => Some(max_length),
            _ => None,
        }
    }

    pub(crate) fn assign_name(&mut self, name: &str) {
        debug_assert!(self.name.is_none(), "field name assigned twice");
        self.name = Some(name.to_string());
    }

    /// Validates a value, recording it in `store` if the field is unique.
    ///
    /// An absent value is passed as `Value::Null` and fails the type check.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` with code:
    /// - `TypeMismatch` if the value does not match the field kind
    /// - `MaxLengthExceeded` if a char value is too long
    /// - `NotUnique` if a unique field already accepted the value
    pub fn validate(&self, value: &Value, store: &UniqueStore) -> ValidationResult<()> {
        self.check(value, store).inspect_err(|err| {
            debug!(
                event = Event::ValidationRejected.as_str(),
                field = self.name().unwrap_or("<unnamed>"),
                code = err.code().code(),
                "{}",
                err.message()
            );
        })
    }

    fn check(&self, value: &Value, store: &UniqueStore) -> ValidationResult<()> {
        if !self.kind.accepts(value) {
            return Err(ValidationError::type_mismatch(
                self.name(),
                self.kind.expected(),
                json_type_name(value),
            ));
        }

        if let (FieldKind::Char { max_length }, Some(s)) = (self.kind, value.as_str()) {
            let length = s.chars().count();
            if length > max_length {
                return Err(ValidationError::max_length_exceeded(
                    self.name(),
                    max_length,
                    length,
                ));
            }
        }

        if self.unique {
            if !store.record(self.id, value) {
                return Err(ValidationError::not_unique(self.name(), value));
            }
            trace!(
                event = Event::UniqueValueRecorded.as_str(),
                field = self.name().unwrap_or("<unnamed>"),
                accepted = store.accepted_count(self.id),
            );
        }

        Ok(())
    }

    /// Reads this field's value from a record. Unset reads as `None`.
    pub(crate) fn get<'r>(&self, record: &'r Record) -> Option<&'r Value> {
        self.name().and_then(|name| record.field_value(name))
    }

    /// Validates `value` against the record's store, then stores it.
    ///
    /// Nothing is stored when validation fails.
    pub(crate) fn set(&self, record: &mut Record, value: Value) -> ValidationResult<()> {
        self.validate(&value, record.record_type().unique_store())?;
        if let Some(name) = self.name() {
            record.store_field_value(name, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ValidationErrorCode;
    use serde_json::json;

    #[test]
    fn test_valid_string_passes() {
        let store = UniqueStore::new();
        let field = Field::char(10);
        assert!(field.validate(&json!("hello"), &store).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let store = UniqueStore::new();
        let field = Field::char(4);
        // 4 characters, 8 bytes
        assert!(field.validate(&json!("ñañá"), &store).is_ok());
        assert!(field.validate(&json!("ñañáx"), &store).is_err());
    }

    #[test]
    fn test_exact_max_length_passes() {
        let store = UniqueStore::new();
        let field = Field::char(3);
        assert!(field.validate(&json!("abc"), &store).is_ok());
    }

    #[test]
    fn test_type_check_runs_before_length() {
        let store = UniqueStore::new();
        let field = Field::char(0);
        let err = field.validate(&json!(12345), &store).unwrap_err();
        assert_eq!(err.code(), ValidationErrorCode::TypeMismatch);
    }

    #[test]
    fn test_length_check_runs_before_uniqueness() {
        let store = UniqueStore::new();
        let field = Field::char(3).unique();

        let err = field.validate(&json!("toolong"), &store).unwrap_err();
        assert_eq!(err.code(), ValidationErrorCode::MaxLengthExceeded);
        // Rejected values are not recorded
        assert_eq!(store.accepted_count(field.id()), 0);
    }

    #[test]
    fn test_non_unique_field_accepts_repeats() {
        let store = UniqueStore::new();
        let field = Field::char(10);
        assert!(field.validate(&json!("same"), &store).is_ok());
        assert!(field.validate(&json!("same"), &store).is_ok());
        assert_eq!(store.accepted_count(field.id()), 0);
    }

    #[test]
    fn test_unique_validation_is_not_idempotent() {
        let store = UniqueStore::new();
        let field = Field::char(10).unique();

        assert!(field.validate(&json!("once"), &store).is_ok());
        let err = field.validate(&json!("once"), &store).unwrap_err();
        assert_eq!(err.code(), ValidationErrorCode::NotUnique);
    }

    #[test]
    fn test_unnamed_field_error_has_no_name() {
        let store = UniqueStore::new();
        let field = Field::integer();
        let err = field.validate(&json!("1"), &store).unwrap_err();
        assert_eq!(err.field(), None);
        assert!(err.message().contains("an integer"));
    }

    #[test]
    fn test_unique_integer_field() {
        let store = UniqueStore::new();
        let field = Field::integer().unique();
        assert!(field.validate(&json!(7), &store).is_ok());
        assert!(field.validate(&json!(8), &store).is_ok());
        assert!(field.validate(&json!(7), &store).is_err());
    }

    #[test]
    fn test_boolean_field() {
        let store = UniqueStore::new();
        let field = Field::boolean();
        assert!(field.validate(&json!(true), &store).is_ok());
        assert!(field.validate(&json!("true"), &store).is_err());
    }

    #[test]
    fn test_max_length_accessor() {
        assert_eq!(Field::char(255).max_length(), Some(255));
        assert_eq!(Field::float().max_length(), None);
        assert!(!Field::float().is_unique());
        assert!(Field::float().unique().is_unique());
    }
}
