//! Turns raw checker results into a populated [`Report`].

mod classify;

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use tracing::{debug, info};

use crate::catalog::wcag22_criteria;
use crate::input::RawResult;
use crate::report::{
    DEFAULT_METHOD, EvaluationInfo, ProductInfo, REPORT_NOTES, Report, STANDARD_WCAG22_AA,
    Summary, ToolInfo,
};

pub use classify::{
    MAX_ELEMENTS, REMARK_HYBRID_CLEAN, REMARK_MANUAL_ONLY, RuleIndex, SERIOUS_ISSUE_THRESHOLD,
    classify_conformance, evaluate_criterion,
};

pub const DEFAULT_CHECKER_NAME: &str = "axe-core";
pub const DEFAULT_CHECKER_VERSION: &str = "4.8.4";
pub const DEFAULT_HOST_NAME: &str = "vibium-go";
pub const DEFAULT_HOST_VERSION: &str = "0.2.0";

/// Checker and host tool entries recorded in every report by default.
#[must_use]
pub fn default_tools() -> Vec<ToolInfo> {
    vec![
        ToolInfo::new(DEFAULT_CHECKER_NAME, Some(DEFAULT_CHECKER_VERSION.to_string())),
        ToolInfo::new(DEFAULT_HOST_NAME, Some(DEFAULT_HOST_VERSION.to_string())),
    ]
}

/// Builds VPAT reports for one product.
///
/// The evaluation date is fixed when the generator is created; each call to
/// [`Generator::generate`] stamps its own `generated_at`.
#[derive(Debug, Clone)]
pub struct Generator {
    product: ProductInfo,
    evaluation: EvaluationInfo,
}

impl Generator {
    #[must_use]
    pub fn new(product: ProductInfo) -> Self {
        Self {
            product,
            evaluation: EvaluationInfo {
                date: Utc::now(),
                evaluator: None,
                methods: vec![DEFAULT_METHOD.to_string()],
                tools: default_tools(),
                urls: Vec::new(),
                scope: None,
            },
        }
    }

    #[must_use]
    pub fn with_tools(mut self, tools: Vec<ToolInfo>) -> Self {
        self.evaluation.tools = tools;
        self
    }

    #[must_use]
    pub fn with_methods(mut self, methods: Vec<String>) -> Self {
        self.evaluation.methods = methods;
        self
    }

    /// Override the evaluation date (defaults to construction time).
    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.evaluation.date = date;
        self
    }

    pub fn set_evaluator(&mut self, evaluator: impl Into<String>) {
        self.evaluation.evaluator = Some(evaluator.into());
    }

    pub fn set_scope(&mut self, scope: impl Into<String>) {
        self.evaluation.scope = Some(scope.into());
    }

    /// Record an evaluated URL; duplicates and empty strings are ignored.
    pub fn add_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !url.is_empty() && !self.evaluation.urls.contains(&url) {
            self.evaluation.urls.push(url);
        }
    }

    #[must_use]
    pub const fn product(&self) -> &ProductInfo {
        &self.product
    }

    #[must_use]
    pub const fn evaluation(&self) -> &EvaluationInfo {
        &self.evaluation
    }

    /// Build a report stamped with the current time.
    #[must_use]
    pub fn generate(&self, results: &[RawResult]) -> Report {
        self.generate_at(results, Utc::now())
    }

    /// Build a report stamped with `generated_at`.
    #[must_use]
    pub fn generate_at(&self, results: &[RawResult], generated_at: DateTime<Utc>) -> Report {
        let mut evaluation = self.evaluation.clone();
        evaluation.urls = merge_urls(&evaluation.urls, results);

        let index = RuleIndex::from_results(results);
        debug!(
            results = results.len(),
            rules = index.rule_count(),
            "built rule index"
        );

        let criteria: Vec<_> = wcag22_criteria()
            .iter()
            .map(|criterion| {
                let result = evaluate_criterion(criterion, &index);
                debug!(
                    id = criterion.id,
                    conformance = %result.conformance,
                    method = %result.evaluation_method,
                    "classified criterion"
                );
                result
            })
            .collect();

        let mut report = Report {
            product: self.product.clone(),
            evaluation,
            standard: STANDARD_WCAG22_AA.to_string(),
            criteria,
            summary: Summary::default(),
            notes: REPORT_NOTES.to_string(),
            generated_at,
        };
        report.calculate_summary();

        info!(
            criteria = report.summary.total_criteria,
            violations = report.summary.total_violations,
            "generated report"
        );
        report
    }
}

/// Existing URLs followed by non-empty result URLs, first occurrence wins.
fn merge_urls(existing: &[String], results: &[RawResult]) -> Vec<String> {
    let mut urls: IndexSet<&str> = existing.iter().map(String::as_str).collect();
    urls.extend(
        results
            .iter()
            .map(|r| r.url.as_str())
            .filter(|url| !url.is_empty()),
    );
    urls.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
