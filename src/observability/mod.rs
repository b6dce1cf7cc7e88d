//! Observability for fieldmodel
//!
//! Structured events go through `tracing`. The library never installs a
//! subscriber; binaries and tests choose their own.
//!
//! # Levels
//!
//! - `info`: record type defined
//! - `debug`: field registered, record created, value rejected
//! - `trace`: unique value recorded, plain attribute set

mod events;

pub use events::Event;
