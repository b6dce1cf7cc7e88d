//! Field descriptors
//!
//! A field is a named, typed attribute with an optional uniqueness
//! constraint. Validation is synchronous and the first violated rule is
//! reported.
//!
//! # Rules
//!
//! - Type must match the declared kind exactly (no coercion)
//! - Char values may not exceed `max_length` characters
//! - Unique fields reject any value they accepted before
//! - Accepted values are never forgotten

mod descriptor;
mod errors;
mod types;
mod unique;

pub use descriptor::Field;
pub use errors::{ValidationError, ValidationErrorCode, ValidationResult};
pub use types::{FieldId, FieldKind};
pub(crate) use types::json_type_name;
pub use unique::UniqueStore;
