use std::fmt::Write;

use crate::catalog::Principle;
use crate::error::Result;
use crate::report::{Conformance, Report};

use super::ReportFormatter;
use super::text::{
    conformance_tag, format_coverage, format_date, format_timestamp, remarks_with_issues,
    truncate_snippet,
};

/// GitHub-flavored Markdown rendering of a report.
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# Voluntary Product Accessibility Template (VPAT)\n").ok();
        writeln!(output, "**Standard:** {}\n", cell(&report.standard)).ok();

        write_product(&mut output, report);
        write_evaluation(&mut output, report);
        write_summary(&mut output, report);
        write_detailed_results(&mut output, report);
        if report.summary.total_violations > 0 {
            write_violations(&mut output, report);
        }
        if !report.notes.is_empty() {
            writeln!(output, "## Notes\n").ok();
            writeln!(output, "{}\n", report.notes).ok();
        }

        writeln!(output, "---\n").ok();
        writeln!(
            output,
            "*Generated: {}*",
            format_timestamp(&report.generated_at)
        )
        .ok();

        Ok(output)
    }
}

/// Escape table-breaking characters in a cell value.
fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn write_field_table(output: &mut String, rows: &[(&str, Option<&str>)]) {
    writeln!(output, "| Field | Value |").ok();
    writeln!(output, "|-------|-------|").ok();
    for (field, value) in rows {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            writeln!(output, "| {field} | {} |", cell(value)).ok();
        }
    }
    writeln!(output).ok();
}

fn write_product(output: &mut String, report: &Report) {
    let product = &report.product;
    writeln!(output, "## Product Information\n").ok();
    write_field_table(
        output,
        &[
            ("Product Name", Some(product.name.as_str())),
            ("Version", product.version.as_deref()),
            ("Description", product.description.as_deref()),
            ("Vendor", product.vendor.as_deref()),
            ("URL", product.url.as_deref()),
        ],
    );
}

fn write_evaluation(output: &mut String, report: &Report) {
    let evaluation = &report.evaluation;
    let date = format_date(&evaluation.date);
    let methods = evaluation.methods.join(", ");
    let tools = evaluation
        .tools
        .iter()
        .map(crate::report::ToolInfo::label)
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(output, "## Evaluation Information\n").ok();
    write_field_table(
        output,
        &[
            ("Date", Some(date.as_str())),
            ("Evaluator", evaluation.evaluator.as_deref()),
            ("Methods", Some(methods.as_str())),
            ("Tools", Some(tools.as_str())),
            ("Scope", evaluation.scope.as_deref()),
        ],
    );

    if !evaluation.urls.is_empty() {
        writeln!(output, "### URLs Evaluated\n").ok();
        for url in &evaluation.urls {
            writeln!(output, "- {url}").ok();
        }
        writeln!(output).ok();
    }
}

fn write_summary(output: &mut String, report: &Report) {
    let summary = &report.summary;
    writeln!(output, "## Summary\n").ok();
    writeln!(output, "| Conformance Level | Count |").ok();
    writeln!(output, "|-------------------|------:|").ok();
    for conformance in Conformance::ALL {
        writeln!(output, "| {conformance} | {} |", summary.count(conformance)).ok();
    }
    writeln!(output, "| **Total** | **{}** |\n", summary.total_criteria).ok();
    writeln!(
        output,
        "- **Automated Coverage:** {}",
        format_coverage(summary.automated_coverage)
    )
    .ok();
    writeln!(
        output,
        "- **Total Violations Found:** {}\n",
        summary.total_violations
    )
    .ok();
}

fn write_detailed_results(output: &mut String, report: &Report) {
    writeln!(output, "## Detailed Results\n").ok();
    for principle in Principle::ALL {
        let rows: Vec<_> = report
            .criteria
            .iter()
            .filter(|c| Principle::of(&c.id) == Some(principle))
            .collect();
        if rows.is_empty() {
            continue;
        }

        writeln!(output, "### {}\n", principle.heading()).ok();
        writeln!(output, "| Criteria | Conformance Level | Remarks |").ok();
        writeln!(output, "|----------|-------------------|---------|").ok();
        for result in rows {
            writeln!(
                output,
                "| {} {} | {} {} | {} |",
                result.id,
                cell(&result.name),
                conformance_tag(result.conformance),
                result.conformance,
                cell(&remarks_with_issues(result))
            )
            .ok();
        }
        writeln!(output).ok();
    }
}

fn write_violations(output: &mut String, report: &Report) {
    writeln!(output, "## Violations Detail\n").ok();
    for result in report.criteria.iter().filter(|c| !c.violations.is_empty()) {
        writeln!(output, "### {} {}\n", result.id, result.name).ok();
        for violation in &result.violations {
            writeln!(output, "#### {}\n", violation.rule_id).ok();
            writeln!(output, "- **Description:** {}", violation.description).ok();
            writeln!(output, "- **Impact:** {}", violation.impact).ok();
            writeln!(output, "- **Instances:** {}", violation.count).ok();
            if let Some(url) = &violation.help_url {
                writeln!(output, "- **Help:** [{url}]({url})").ok();
            }
            writeln!(output).ok();

            if !violation.elements.is_empty() {
                writeln!(output, "**Example elements:**\n").ok();
                let snippets: Vec<String> =
                    violation.elements.iter().map(|e| truncate_snippet(e)).collect();
                let fence = code_fence(&snippets);
                writeln!(output, "{fence}html").ok();
                for snippet in &snippets {
                    writeln!(output, "{snippet}").ok();
                }
                writeln!(output, "{fence}\n").ok();
            }
        }
    }
}

/// Backtick fence longer than any backtick run inside `snippets`.
fn code_fence(snippets: &[String]) -> String {
    let longest_run = snippets
        .iter()
        .flat_map(|snippet| snippet.split(|c| c != '`'))
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest_run.max(2) + 1)
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
