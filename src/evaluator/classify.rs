use indexmap::IndexMap;

use crate::catalog::Criterion;
use crate::input::{RawResult, RawViolation};
use crate::report::{Conformance, CriterionResult, EvaluationMethod, Impact, Violation};

/// Serious-impact instance count above which a criterion is judged
/// `Does Not Support` rather than `Partially Supports`.
pub const SERIOUS_ISSUE_THRESHOLD: usize = 5;

/// Number of element snippets kept per violation.
pub const MAX_ELEMENTS: usize = 3;

pub const REMARK_MANUAL_ONLY: &str = "Requires manual testing";
pub const REMARK_HYBRID_CLEAN: &str =
    "No automated violations detected; manual testing required for full evaluation";
const REMARK_MANUAL_SUFFIX: &str = "; manual testing also required";

/// Violations grouped by rule id, concatenated across results in input order.
#[derive(Debug, Default)]
pub struct RuleIndex<'a> {
    by_rule: IndexMap<&'a str, Vec<&'a RawViolation>>,
}

impl<'a> RuleIndex<'a> {
    #[must_use]
    pub fn from_results(results: &'a [RawResult]) -> Self {
        let mut by_rule: IndexMap<&str, Vec<&RawViolation>> = IndexMap::new();
        for violation in results.iter().flat_map(|r| &r.violations) {
            by_rule.entry(violation.id.as_str()).or_default().push(violation);
        }
        Self { by_rule }
    }

    #[must_use]
    pub fn violations_for(&self, rule_id: &str) -> &[&'a RawViolation] {
        self.by_rule
            .get(rule_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct rules that fired.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.by_rule.len()
    }
}

fn to_violation(raw: &RawViolation) -> Violation {
    Violation {
        rule_id: raw.id.clone(),
        description: raw.help.clone(),
        impact: raw.impact.clone(),
        count: raw.nodes.len(),
        elements: raw
            .nodes
            .iter()
            .take(MAX_ELEMENTS)
            .map(|node| node.html.clone())
            .collect(),
        help_url: (!raw.help_url.is_empty()).then(|| raw.help_url.clone()),
    }
}

/// Severity verdict for a non-empty set of violations on one criterion.
#[must_use]
pub fn classify_conformance(violations: &[Violation]) -> Conformance {
    let total_issues: usize = violations.iter().map(|v| v.count).sum();
    let has_critical = violations.iter().any(|v| v.impact == Impact::Critical);
    let has_serious = violations.iter().any(|v| v.impact == Impact::Serious);

    if has_critical || (has_serious && total_issues > SERIOUS_ISSUE_THRESHOLD) {
        Conformance::DoesNotSupport
    } else {
        Conformance::PartiallySupports
    }
}

/// Classify one catalog criterion against the indexed violations.
#[must_use]
pub fn evaluate_criterion(criterion: &Criterion, index: &RuleIndex<'_>) -> CriterionResult {
    let mut result = CriterionResult {
        id: criterion.id.to_string(),
        name: criterion.name.to_string(),
        level: criterion.level,
        conformance: Conformance::NotEvaluated,
        evaluation_method: EvaluationMethod::NotTested,
        remarks: String::new(),
        violations: Vec::new(),
        axe_rules: criterion.rule_ids.iter().map(|r| (*r).to_string()).collect(),
    };

    if !criterion.has_rules() {
        result.remarks = REMARK_MANUAL_ONLY.to_string();
        return result;
    }

    result.evaluation_method = if criterion.can_automate {
        EvaluationMethod::Automated
    } else {
        EvaluationMethod::Hybrid
    };

    result.violations = criterion
        .rule_ids
        .iter()
        .flat_map(|rule| index.violations_for(rule))
        .map(|raw| to_violation(raw))
        .collect();

    if result.violations.is_empty() {
        result.conformance = Conformance::Supports;
        if !criterion.can_automate {
            result.remarks = REMARK_HYBRID_CLEAN.to_string();
        }
        return result;
    }

    result.conformance = classify_conformance(&result.violations);
    result.remarks = format!("{} instance(s) detected", result.violation_count());
    if !criterion.can_automate {
        result.remarks.push_str(REMARK_MANUAL_SUFFIX);
    }
    result
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
