//! Observable events for fieldmodel
//!
//! Events are explicit and typed; each is emitted as a `tracing` event with
//! the name in its `event` field.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Definition
    /// Record type built and frozen
    RecordTypeDefined,
    /// Field named and added to a record type
    FieldRegistered,

    // Records
    /// Record constructed and fully validated
    RecordCreated,
    /// Undeclared name set on a record
    PlainAttributeSet,

    // Validation
    /// Unique field recorded an accepted value
    UniqueValueRecorded,
    /// Field rejected a value
    ValidationRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::RecordTypeDefined => "RECORD_TYPE_DEFINED",
            Event::FieldRegistered => "FIELD_REGISTERED",
            Event::RecordCreated => "RECORD_CREATED",
            Event::PlainAttributeSet => "PLAIN_ATTRIBUTE_SET",
            Event::UniqueValueRecorded => "UNIQUE_VALUE_RECORDED",
            Event::ValidationRejected => "VALIDATION_REJECTED",
        }
    }

    /// Returns true if this event reports a rejected value
    pub fn is_rejection(&self) -> bool {
        matches!(self, Event::ValidationRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
