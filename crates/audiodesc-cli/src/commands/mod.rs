//! CLI command implementations

pub mod common;
pub mod compare;
pub mod format;
pub mod json_output;
pub mod layout;
pub mod timestamp;

use anyhow::Result;
use serde::Serialize;

/// Prints a JSON document to stdout.
fn print_json<T: Serialize>(output: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}
