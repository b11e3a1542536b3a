use std::fmt::Write;

use crate::catalog::Principle;
use crate::error::Result;
use crate::report::{Conformance, Report, ToolInfo, Violation};

use super::ReportFormatter;
use super::text::{
    conformance_class, format_coverage, format_date, format_timestamp, remarks_with_issues,
    truncate_snippet,
};

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Voluntary Product Accessibility Template (VPAT)</title>
    <style>
        :root {
            --color-supports: #15803d;
            --color-partial: #a16207;
            --color-fail: #b91c1c;
            --color-na: #475569;
            --color-unknown: #6d28d9;
            --color-bg: #ffffff;
            --color-border: #cbd5e1;
            --color-header: #1e3a5f;
            --color-stripe: #f1f5f9;
            --color-text: #0f172a;
            --color-text-muted: #475569;
        }
        * { box-sizing: border-box; }
        body {
            font-family: Arial, Helvetica, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.5;
            max-width: 1100px;
            margin: 0 auto;
            padding: 2rem;
        }
        h1 { font-size: 1.75rem; border-bottom: 3px solid var(--color-header); padding-bottom: 0.5rem; }
        h2 { font-size: 1.35rem; color: var(--color-header); margin-top: 2rem; }
        h3 { font-size: 1.1rem; margin-top: 1.5rem; }
        table { width: 100%; border-collapse: collapse; margin: 1rem 0; }
        th, td { border: 1px solid var(--color-border); padding: 0.5rem 0.75rem; text-align: left; vertical-align: top; }
        th { background: var(--color-header); color: #ffffff; font-weight: 600; }
        tr:nth-child(even) td { background: var(--color-stripe); }
        td.count { text-align: right; font-variant-numeric: tabular-nums; }
        .supports { color: var(--color-supports); font-weight: 600; }
        .partially-supports { color: var(--color-partial); font-weight: 600; }
        .does-not-support { color: var(--color-fail); font-weight: 600; }
        .not-applicable { color: var(--color-na); font-weight: 600; }
        .not-evaluated { color: var(--color-unknown); font-weight: 600; }
        .violation { border-left: 4px solid var(--color-fail); padding: 0.5rem 1rem; margin: 1rem 0; background: #fef2f2; }
        .violation dl { display: grid; grid-template-columns: max-content 1fr; gap: 0.25rem 1rem; margin: 0.5rem 0; }
        .violation dt { font-weight: 600; }
        .violation dd { margin: 0; }
        pre { background: #1e293b; color: #e2e8f0; padding: 0.75rem; border-radius: 4px; overflow-x: auto; white-space: pre-wrap; word-break: break-all; }
        .note { border: 1px solid var(--color-border); background: var(--color-stripe); padding: 1rem; border-radius: 4px; }
        footer { margin-top: 3rem; padding-top: 1rem; border-top: 1px solid var(--color-border); color: var(--color-text-muted); font-size: 0.875rem; }
    </style>
</head>
<body>
"#;

const HTML_TAIL: &str = "</body>\n</html>\n";

/// Standalone HTML5 document with an inline stylesheet.
pub struct HtmlFormatter;

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::from(HTML_HEAD);

        output.push_str("<h1>Voluntary Product Accessibility Template (VPAT)</h1>\n");
        writeln!(
            output,
            "<p><strong>Standard:</strong> {}</p>",
            html_escape(&report.standard)
        )
        .ok();

        write_product(&mut output, report);
        write_evaluation(&mut output, report);
        write_summary(&mut output, report);
        write_detailed_results(&mut output, report);
        if report.summary.total_violations > 0 {
            write_violations(&mut output, report);
        }
        if !report.notes.is_empty() {
            output.push_str("<h2>Notes</h2>\n");
            writeln!(
                output,
                "<div class=\"note\">{}</div>",
                html_escape(&report.notes)
            )
            .ok();
        }

        writeln!(
            output,
            "<footer>Generated: {}</footer>",
            format_timestamp(&report.generated_at)
        )
        .ok();
        output.push_str(HTML_TAIL);

        Ok(output)
    }
}

fn write_field_table(output: &mut String, rows: &[(&str, Option<String>)]) {
    output.push_str("<table>\n<thead><tr><th>Field</th><th>Value</th></tr></thead>\n<tbody>\n");
    for (field, value) in rows {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            writeln!(output, "<tr><td>{field}</td><td>{value}</td></tr>").ok();
        }
    }
    output.push_str("</tbody>\n</table>\n");
}

fn escaped(value: Option<&String>) -> Option<String> {
    value.map(|v| html_escape(v))
}

fn link(url: &str) -> String {
    let url = html_escape(url);
    format!("<a href=\"{url}\">{url}</a>")
}

fn write_product(output: &mut String, report: &Report) {
    let product = &report.product;
    output.push_str("<h2>Product Information</h2>\n");
    write_field_table(
        output,
        &[
            ("Product Name", Some(html_escape(&product.name))),
            ("Version", escaped(product.version.as_ref())),
            ("Description", escaped(product.description.as_ref())),
            ("Vendor", escaped(product.vendor.as_ref())),
            ("URL", product.url.as_deref().map(link)),
        ],
    );
}

fn write_evaluation(output: &mut String, report: &Report) {
    let evaluation = &report.evaluation;
    let tools = evaluation
        .tools
        .iter()
        .map(ToolInfo::label)
        .collect::<Vec<_>>()
        .join(", ");

    output.push_str("<h2>Evaluation Information</h2>\n");
    write_field_table(
        output,
        &[
            ("Date", Some(format_date(&evaluation.date))),
            ("Evaluator", escaped(evaluation.evaluator.as_ref())),
            ("Methods", Some(html_escape(&evaluation.methods.join(", ")))),
            ("Tools", Some(html_escape(&tools))),
            ("Scope", escaped(evaluation.scope.as_ref())),
        ],
    );

    if !evaluation.urls.is_empty() {
        output.push_str("<h3>URLs Evaluated</h3>\n<ul>\n");
        for url in &evaluation.urls {
            writeln!(output, "<li>{}</li>", link(url)).ok();
        }
        output.push_str("</ul>\n");
    }
}

fn write_summary(output: &mut String, report: &Report) {
    let summary = &report.summary;
    output.push_str("<h2>Summary</h2>\n");
    output.push_str(
        "<table>\n<thead><tr><th>Conformance Level</th><th>Count</th></tr></thead>\n<tbody>\n",
    );
    for conformance in Conformance::ALL {
        writeln!(
            output,
            "<tr><td><span class=\"{}\">{conformance}</span></td><td class=\"count\">{}</td></tr>",
            conformance_class(conformance),
            summary.count(conformance)
        )
        .ok();
    }
    writeln!(
        output,
        "<tr><td><strong>Total</strong></td><td class=\"count\"><strong>{}</strong></td></tr>",
        summary.total_criteria
    )
    .ok();
    output.push_str("</tbody>\n</table>\n<ul>\n");
    writeln!(
        output,
        "<li><strong>Automated Coverage:</strong> {}</li>",
        format_coverage(summary.automated_coverage)
    )
    .ok();
    writeln!(
        output,
        "<li><strong>Total Violations Found:</strong> {}</li>",
        summary.total_violations
    )
    .ok();
    output.push_str("</ul>\n");
}

fn write_detailed_results(output: &mut String, report: &Report) {
    output.push_str("<h2>Detailed Results</h2>\n");
    for principle in Principle::ALL {
        let rows: Vec<_> = report
            .criteria
            .iter()
            .filter(|c| Principle::of(&c.id) == Some(principle))
            .collect();
        if rows.is_empty() {
            continue;
        }

        writeln!(output, "<h3>{}</h3>", principle.heading()).ok();
        output.push_str("<table>\n<thead><tr><th>Criteria</th><th>Conformance Level</th><th>Remarks</th></tr></thead>\n<tbody>\n");
        for result in rows {
            writeln!(
                output,
                "<tr><td>{} {} (Level {})</td><td><span class=\"{}\">{}</span></td><td>{}</td></tr>",
                html_escape(&result.id),
                html_escape(&result.name),
                result.level,
                conformance_class(result.conformance),
                result.conformance,
                html_escape(&remarks_with_issues(result))
            )
            .ok();
        }
        output.push_str("</tbody>\n</table>\n");
    }
}

fn write_violation(output: &mut String, violation: &Violation) {
    output.push_str("<div class=\"violation\">\n");
    writeln!(output, "<h4>{}</h4>", html_escape(&violation.rule_id)).ok();
    output.push_str("<dl>\n");
    writeln!(
        output,
        "<dt>Description</dt><dd>{}</dd>",
        html_escape(&violation.description)
    )
    .ok();
    writeln!(
        output,
        "<dt>Impact</dt><dd>{}</dd>",
        html_escape(violation.impact.as_str())
    )
    .ok();
    writeln!(output, "<dt>Instances</dt><dd>{}</dd>", violation.count).ok();
    if let Some(url) = &violation.help_url {
        writeln!(output, "<dt>Help</dt><dd>{}</dd>", link(url)).ok();
    }
    output.push_str("</dl>\n");
    for element in &violation.elements {
        writeln!(
            output,
            "<pre><code>{}</code></pre>",
            html_escape(&truncate_snippet(element))
        )
        .ok();
    }
    output.push_str("</div>\n");
}

fn write_violations(output: &mut String, report: &Report) {
    output.push_str("<h2>Violations Detail</h2>\n");
    for result in report.criteria.iter().filter(|c| !c.violations.is_empty()) {
        writeln!(
            output,
            "<h3>{} {}</h3>",
            html_escape(&result.id),
            html_escape(&result.name)
        )
        .ok();
        for violation in &result.violations {
            write_violation(output, violation);
        }
    }
}

pub(super) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
