//! fieldmodel - Declarative record types with validated fields
//!
//! Fields are declared on a record type through a builder. Every value is
//! validated when a record is constructed or a field is assigned, and unique
//! fields reject values they have accepted before.
//!
//! ```
//! use fieldmodel::{Field, RecordType};
//! use serde_json::json;
//!
//! let user = RecordType::builder("User")
//!     .field("username", Field::char(255).unique())
//!     .field("email", Field::char(100).unique())
//!     .build();
//!
//! let first = user.create([
//!     ("username", json!("john_doe")),
//!     ("email", json!("john@example.com")),
//! ]);
//! assert!(first.is_ok());
//!
//! let second = user.create([
//!     ("username", json!("john_doe")),
//!     ("email", json!("john2@example.com")),
//! ]);
//! assert!(second.unwrap_err().message().contains("unique"));
//! ```

pub mod field;
pub mod model;
pub mod observability;

pub use field::{
    Field, FieldKind, UniqueStore, ValidationError, ValidationErrorCode, ValidationResult,
};
pub use model::{Record, RecordType};
