use crate::error::Result;
use crate::report::Report;

use super::ReportFormatter;

/// Pretty-printed JSON, two-space indent, camelCase field names.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = serde_json::to_string_pretty(report)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
