mod csv;
mod html;
mod json;
mod markdown;
mod text;

pub use csv::{CsvFormatter, CsvSheet, render_csv, render_csv_summary, render_csv_violations};
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::{MAX_SNIPPET_CHARS, conformance_tag, truncate_snippet};

use crate::error::Result;
use crate::report::Report;

/// Trait for rendering a report into an output format.
pub trait ReportFormatter {
    /// Render the report into a string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Markdown,
    Html,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Csv => "csv",
        })
    }
}

/// Render `report` in `format`; CSV output uses the per-criterion sheet.
///
/// # Errors
/// Returns an error if the renderer fails.
pub fn render(format: OutputFormat, report: &Report) -> Result<String> {
    match format {
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Markdown => MarkdownFormatter.format(report),
        OutputFormat::Html => HtmlFormatter.format(report),
        OutputFormat::Csv => CsvFormatter::new(CsvSheet::Criteria).format(report),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
