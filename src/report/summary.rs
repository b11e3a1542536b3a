use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Conformance, CriterionResult};

/// Quantitative roll-up of a report's criteria.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_criteria: usize,
    pub supports: usize,
    pub partially_supports: usize,
    pub does_not_support: usize,
    pub not_applicable: usize,
    pub not_evaluated: usize,
    /// Percentage (0.0-100.0) of criteria evaluated automatically or in hybrid mode.
    pub automated_coverage: f64,
    pub total_violations: usize,
}

impl Summary {
    #[must_use]
    pub fn from_criteria(criteria: &[CriterionResult]) -> Self {
        let mut summary = Self {
            total_criteria: criteria.len(),
            ..Self::default()
        };
        let mut automated = 0usize;

        for result in criteria {
            *summary.counter_mut(result.conformance) += 1;
            if result.evaluation_method.is_automated() {
                automated += 1;
            }
            summary.total_violations += result.violation_count();
        }

        summary.automated_coverage = if summary.total_criteria == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let ratio = automated as f64 / summary.total_criteria as f64;
            ratio * 100.0
        };

        summary
    }

    /// Counter for the given conformance value.
    #[must_use]
    pub const fn count(&self, conformance: Conformance) -> usize {
        match conformance {
            Conformance::Supports => self.supports,
            Conformance::PartiallySupports => self.partially_supports,
            Conformance::DoesNotSupport => self.does_not_support,
            Conformance::NotApplicable => self.not_applicable,
            Conformance::NotEvaluated => self.not_evaluated,
        }
    }

    fn counter_mut(&mut self, conformance: Conformance) -> &mut usize {
        match conformance {
            Conformance::Supports => &mut self.supports,
            Conformance::PartiallySupports => &mut self.partially_supports,
            Conformance::DoesNotSupport => &mut self.does_not_support,
            Conformance::NotApplicable => &mut self.not_applicable,
            Conformance::NotEvaluated => &mut self.not_evaluated,
        }
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
