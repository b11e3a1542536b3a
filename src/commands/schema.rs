use crate::cli::SchemaArgs;
use crate::report::Report;
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

use super::context::write_output;

#[must_use]
pub fn run_schema(args: &SchemaArgs) -> i32 {
    match run_schema_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Write the report JSON Schema to stdout or a file.
///
/// # Errors
/// Returns an error if serialization or the file write fails.
pub fn run_schema_impl(args: &SchemaArgs) -> Result<()> {
    let schema = render_schema()?;
    write_output(args.output.as_deref(), &schema)
}

/// Pretty-printed JSON Schema of [`Report`].
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_schema() -> Result<String> {
    let json = serde_json::to_string_pretty(&Report::json_schema())?;
    Ok(format!("{json}\n"))
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
