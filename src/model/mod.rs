//! Record types and record instances
//!
//! A [`RecordType`] is declared once and shared as `Arc<RecordType>`.
//! [`Record`]s route every read and write of a declared name through that
//! name's field.

mod record;
mod registry;

pub use record::Record;
pub use registry::{Member, RecordType, RecordTypeBuilder};
