//! Field kinds and identity
//!
//! Supported kinds:
//! - char: UTF-8 string with a maximum length
//! - integer: 64-bit signed or unsigned integer
//! - boolean: Boolean
//! - float: any JSON number

use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Identity of a single field instance.
///
/// Assigned when the field is constructed and never reused, so uniqueness
/// state keyed by it cannot leak between fields that share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(Uuid);

impl FieldId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declared kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String with a maximum length in characters
    Char {
        /// Longest accepted value, counted in Unicode scalar values
        max_length: usize,
    },
    /// Integer (no fractional part)
    Integer,
    /// Boolean
    Boolean,
    /// Number; integers are accepted too
    Float,
}

impl FieldKind {
    /// Returns the kind name
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Char { .. } => "char",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Float => "float",
        }
    }

    /// Describes an accepted value, for error messages
    pub(crate) fn expected(&self) -> &'static str {
        match self {
            FieldKind::Char { .. } => "a string",
            FieldKind::Integer => "an integer",
            FieldKind::Boolean => "a boolean",
            FieldKind::Float => "a number",
        }
    }

    /// Whether the value's runtime type matches this kind
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::Char { .. } => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Float => value.is_number(),
        }
    }
}

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_type_names() {
        assert_eq!(FieldKind::Char { max_length: 1 }.type_name(), "char");
        assert_eq!(FieldKind::Integer.type_name(), "integer");
        assert_eq!(FieldKind::Boolean.type_name(), "boolean");
        assert_eq!(FieldKind::Float.type_name(), "float");
    }

    #[test]
    fn test_integer_rejects_fractions() {
        assert!(FieldKind::Integer.accepts(&json!(3)));
        assert!(!FieldKind::Integer.accepts(&json!(3.5)));
    }

    #[test]
    fn test_float_accepts_integers() {
        assert!(FieldKind::Float.accepts(&json!(100)));
        assert!(FieldKind::Float.accepts(&json!(99.5)));
        assert!(!FieldKind::Float.accepts(&json!("99.5")));
    }

    #[test]
    fn test_null_matches_no_kind() {
        let kinds = [
            FieldKind::Char { max_length: 10 },
            FieldKind::Integer,
            FieldKind::Boolean,
            FieldKind::Float,
        ];
        for kind in kinds {
            assert!(!kind.accepts(&Value::Null));
        }
    }

    #[test]
    fn test_field_ids_are_distinct() {
        assert_ne!(FieldId::generate(), FieldId::generate());
    }
}
