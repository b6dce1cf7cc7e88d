//! Record instances
//!
//! Construction semantics:
//! - Only values whose names match declared fields are assigned
//! - Unknown names are ignored
//! - Every declared field is validated once, in declaration order
//! - A missing field is validated as `null` and fails
//!
//! Uniqueness values accepted before a failing field stay recorded; a failed
//! construction does not roll them back.

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use super::registry::RecordType;
use crate::field::ValidationResult;
use crate::observability::Event;

/// A validated instance of a [`RecordType`].
#[derive(Debug)]
pub struct Record {
    record_type: Arc<RecordType>,
    /// Declared-field values, in declaration order
    values: IndexMap<String, Value>,
    /// Plain attributes set under undeclared names
    attrs: HashMap<String, Value>,
}

impl Record {
    /// Constructs and validates a record.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` raised while validating declared
    /// fields in declaration order.
    pub fn new<I, K>(record_type: Arc<RecordType>, values: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut supplied: HashMap<String, Value> = values
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();

        let mut assigned = IndexMap::new();
        for (name, _) in record_type.fields() {
            if let Some(value) = supplied.remove(name) {
                assigned.insert(name.to_string(), value);
            }
        }

        let record = Self {
            record_type,
            values: assigned,
            attrs: HashMap::new(),
        };
        record.validate_fields()?;

        debug!(
            event = Event::RecordCreated.as_str(),
            record_type = record.record_type.name(),
            ignored = supplied.len(),
        );

        Ok(record)
    }

    /// Validates every declared field in declaration order.
    ///
    /// Unique fields record their values again, so calling this on a record
    /// that already passed construction fails on its first unique field.
    pub fn validate_fields(&self) -> ValidationResult<()> {
        let store = self.record_type.unique_store();
        for (name, field) in self.record_type.fields() {
            let value = self.values.get(name).unwrap_or(&Value::Null);
            field.validate(value, store)?;
        }
        Ok(())
    }

    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.record_type
    }

    /// Reads an attribute.
    ///
    /// Declared fields read through their descriptor. Other names read the
    /// record's plain attributes, then the type's class-level attributes.
    /// Returns `None` when nothing is set.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.record_type.field(name) {
            Some(field) => field.get(self),
            None => self
                .attrs
                .get(name)
                .or_else(|| self.record_type.attr(name)),
        }
    }

    /// Writes an attribute.
    ///
    /// A declared field validates the value first and keeps its old value on
    /// failure. Any other name is stored as a plain, unvalidated attribute.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> ValidationResult<()> {
        let name = name.into();
        let record_type = Arc::clone(&self.record_type);

        match record_type.field(&name) {
            Some(field) => field.set(self, value),
            None => {
                trace!(
                    event = Event::PlainAttributeSet.as_str(),
                    record_type = record_type.name(),
                    attr = %name,
                );
                self.attrs.insert(name, value);
                Ok(())
            }
        }
    }

    /// Declared-field values in declaration order
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Plain attributes set on this record
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub(crate) fn field_value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub(crate) fn store_field_value(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }
}
