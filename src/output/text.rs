use chrono::{DateTime, Utc};

use crate::report::{Conformance, CriterionResult};

/// Maximum rendered length of an element snippet, including the ellipsis.
pub const MAX_SNIPPET_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Collapse whitespace runs (including newlines) to single spaces and cap the
/// result at [`MAX_SNIPPET_CHARS`] characters.
#[must_use]
pub fn truncate_snippet(html: &str) -> String {
    let normalized = html.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.chars().count() <= MAX_SNIPPET_CHARS {
        return normalized;
    }

    let keep = MAX_SNIPPET_CHARS - ELLIPSIS.len();
    let mut truncated: String = normalized.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Bracketed status tag used in front of conformance labels.
#[must_use]
pub const fn conformance_tag(conformance: Conformance) -> &'static str {
    match conformance {
        Conformance::Supports => "[PASS]",
        Conformance::PartiallySupports => "[PARTIAL]",
        Conformance::DoesNotSupport => "[FAIL]",
        Conformance::NotApplicable => "[N/A]",
        Conformance::NotEvaluated => "[?]",
    }
}

/// CSS class for a conformance label.
pub(super) const fn conformance_class(conformance: Conformance) -> &'static str {
    match conformance {
        Conformance::Supports => "supports",
        Conformance::PartiallySupports => "partially-supports",
        Conformance::DoesNotSupport => "does-not-support",
        Conformance::NotApplicable => "not-applicable",
        Conformance::NotEvaluated => "not-evaluated",
    }
}

pub(super) fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

pub(super) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

pub(super) fn format_coverage(coverage: f64) -> String {
    format!("{coverage:.1}%")
}

/// Remarks with a `Issues: rule (count), ...` suffix when violations exist.
pub(super) fn remarks_with_issues(result: &CriterionResult) -> String {
    if result.violations.is_empty() {
        return result.remarks.clone();
    }
    let issues = result
        .violations
        .iter()
        .map(|v| format!("{} ({})", v.rule_id, v.count))
        .collect::<Vec<_>>()
        .join(", ");
    if result.remarks.is_empty() {
        format!("Issues: {issues}")
    } else {
        format!("{}; Issues: {issues}", result.remarks)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
