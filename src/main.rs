//! fieldmodel demo entry point
//!
//! Declares a `User` record type and constructs pairs of users whose second
//! member reuses a unique username. Each rejection is printed and the demo
//! moves on to the next pair.
//!
//! Log verbosity comes from `RUST_LOG` (default `info`).

use std::sync::Arc;

use fieldmodel::{Field, RecordType, ValidationResult};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let user = RecordType::builder("User")
        .field("username", Field::char(255).unique())
        .field("email", Field::char(100).unique())
        .build();

    let pairs = [
        ("john_doe", "john@example.com", "john2@example.com"),
        ("jane_doe", "jane@example.com", "jane2@example.com"),
    ];

    for (username, first_email, second_email) in pairs {
        if let Err(e) = create_pair(&user, username, first_email, second_email) {
            println!("{}", e);
        }
    }
}

fn create_pair(
    user: &Arc<RecordType>,
    username: &str,
    first_email: &str,
    second_email: &str,
) -> ValidationResult<()> {
    user.create([("username", json!(username)), ("email", json!(first_email))])?;
    user.create([("username", json!(username)), ("email", json!(second_email))])?;
    Ok(())
}
