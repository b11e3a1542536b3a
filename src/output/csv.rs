use std::str::FromStr;

use ::csv::{Terminator, Writer, WriterBuilder};

use crate::error::{Result, VpatError};
use crate::report::Report;

use super::ReportFormatter;
use super::text::format_date;

/// Which CSV serializer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvSheet {
    /// One row per criterion.
    #[default]
    Criteria,
    /// Two-column `Metric,Value` roll-up.
    Summary,
    /// One row per violation.
    Violations,
}

impl FromStr for CsvSheet {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "criteria" => Ok(Self::Criteria),
            "summary" => Ok(Self::Summary),
            "violations" => Ok(Self::Violations),
            _ => Err(format!("Unknown CSV sheet: {s}")),
        }
    }
}

pub struct CsvFormatter {
    sheet: CsvSheet,
}

impl CsvFormatter {
    #[must_use]
    pub const fn new(sheet: CsvSheet) -> Self {
        Self { sheet }
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        match self.sheet {
            CsvSheet::Criteria => render_csv(report),
            CsvSheet::Summary => render_csv_summary(report),
            CsvSheet::Violations => render_csv_violations(report),
        }
    }
}

fn writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new())
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| VpatError::CsvFlush(e.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Per-criterion sheet.
///
/// # Errors
/// Returns an error if the CSV writer fails.
pub fn render_csv(report: &Report) -> Result<String> {
    let mut wtr = writer();
    wtr.write_record([
        "Criteria ID",
        "Criteria Name",
        "Level",
        "Conformance",
        "Evaluation Method",
        "Remarks",
        "Violations Count",
        "Violation Rules",
    ])?;

    for result in &report.criteria {
        let count = result.violation_count().to_string();
        let rules = result
            .violations
            .iter()
            .map(|v| v.rule_id.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        wtr.write_record([
            result.id.as_str(),
            result.name.as_str(),
            result.level.as_str(),
            result.conformance.as_str(),
            result.evaluation_method.as_str(),
            result.remarks.as_str(),
            count.as_str(),
            rules.as_str(),
        ])?;
    }

    finish(wtr)
}

/// Two-column summary sheet.
///
/// # Errors
/// Returns an error if the CSV writer fails.
pub fn render_csv_summary(report: &Report) -> Result<String> {
    let summary = &report.summary;
    let rows = [
        ("Product", report.product.name.clone()),
        (
            "Version",
            report.product.version.clone().unwrap_or_default(),
        ),
        ("Standard", report.standard.clone()),
        ("Evaluation Date", format_date(&report.evaluation.date)),
        ("Total Criteria", summary.total_criteria.to_string()),
        ("Supports", summary.supports.to_string()),
        ("Partially Supports", summary.partially_supports.to_string()),
        ("Does Not Support", summary.does_not_support.to_string()),
        ("Not Applicable", summary.not_applicable.to_string()),
        ("Not Evaluated", summary.not_evaluated.to_string()),
        (
            "Automated Coverage (%)",
            format!("{:.1}", summary.automated_coverage),
        ),
        ("Total Violations", summary.total_violations.to_string()),
    ];

    let mut wtr = writer();
    wtr.write_record(["Metric", "Value"])?;
    for (metric, value) in &rows {
        wtr.write_record([*metric, value.as_str()])?;
    }
    finish(wtr)
}

/// One row per violation across all criteria.
///
/// # Errors
/// Returns an error if the CSV writer fails.
pub fn render_csv_violations(report: &Report) -> Result<String> {
    let mut wtr = writer();
    wtr.write_record([
        "Criteria ID",
        "Criteria Name",
        "Rule ID",
        "Impact",
        "Count",
        "Description",
        "Help URL",
    ])?;

    for result in &report.criteria {
        for violation in &result.violations {
            let count = violation.count.to_string();
            wtr.write_record([
                result.id.as_str(),
                result.name.as_str(),
                violation.rule_id.as_str(),
                violation.impact.as_str(),
                count.as_str(),
                violation.description.as_str(),
                violation.help_url.as_deref().unwrap_or_default(),
            ])?;
        }
    }

    finish(wtr)
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
