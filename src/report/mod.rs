//! VPAT report data model.
//!
//! A [`Report`] is assembled once by the generator and then handed to the
//! renderers as read-only input. Field names serialize in camelCase.

mod impact;
mod summary;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Level;
use crate::error::Result;

pub use impact::Impact;
pub use summary::Summary;

/// Standard label for WCAG 2.2 A + AA reports.
pub const STANDARD_WCAG22_AA: &str = "WCAG 2.2 Level AA";

pub const DEFAULT_METHOD: &str = "Automated testing";

pub const REPORT_NOTES: &str = "This report was generated using automated accessibility testing tools. \
Automated testing can only detect approximately 30-40% of accessibility issues. \
A complete accessibility evaluation requires manual testing by accessibility experts.";

/// `$id` of the published report schema.
pub const SCHEMA_ID: &str = "https://github.com/agentplexus/vibium-go/vpat/vpat.schema.json";
pub const SCHEMA_TITLE: &str = "VPAT Report Schema";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Conformance {
    Supports,
    #[serde(rename = "Partially Supports")]
    PartiallySupports,
    #[serde(rename = "Does Not Support")]
    DoesNotSupport,
    #[serde(rename = "Not Applicable")]
    NotApplicable,
    #[serde(rename = "Not Evaluated")]
    NotEvaluated,
}

impl Conformance {
    pub const ALL: [Self; 5] = [
        Self::Supports,
        Self::PartiallySupports,
        Self::DoesNotSupport,
        Self::NotApplicable,
        Self::NotEvaluated,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Supports => "Supports",
            Self::PartiallySupports => "Partially Supports",
            Self::DoesNotSupport => "Does Not Support",
            Self::NotApplicable => "Not Applicable",
            Self::NotEvaluated => "Not Evaluated",
        }
    }
}

impl std::fmt::Display for Conformance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EvaluationMethod {
    Automated,
    Manual,
    Hybrid,
    #[serde(rename = "Not Tested")]
    NotTested,
}

impl EvaluationMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automated => "Automated",
            Self::Manual => "Manual",
            Self::Hybrid => "Hybrid",
            Self::NotTested => "Not Tested",
        }
    }

    /// Whether this method counts toward automated coverage.
    #[must_use]
    pub const fn is_automated(self) -> bool {
        matches!(self, Self::Automated | Self::Hybrid)
    }
}

impl std::fmt::Display for EvaluationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProductInfo {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ToolInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, version: Option<String>) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// `"name version"`, or just `"name"` when no version is known.
    #[must_use]
    pub fn label(&self) -> String {
        match self.version.as_deref() {
            Some(version) if !version.is_empty() => format!("{} {version}", self.name),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationInfo {
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluator: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// A rule firing as recorded in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub rule_id: String,
    pub description: String,
    #[schemars(with = "String")]
    pub impact: Impact,
    pub count: usize,
    /// Untruncated HTML of up to three offending elements.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriterionResult {
    pub id: String,
    pub name: String,
    pub level: Level,
    pub conformance: Conformance,
    pub evaluation_method: EvaluationMethod,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub remarks: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub axe_rules: Vec<String>,
}

impl CriterionResult {
    /// Sum of instance counts across this criterion's violations.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.iter().map(|v| v.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub product: ProductInfo,
    pub evaluation: EvaluationInfo,
    pub standard: String,
    pub criteria: Vec<CriterionResult>,
    pub summary: Summary,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Recompute [`Report::summary`] from the criteria list.
    pub fn calculate_summary(&mut self) {
        self.summary = Summary::from_criteria(&self.criteria);
    }

    /// Parse a report previously rendered as JSON.
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid report document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON Schema describing the serialized report.
    #[must_use]
    pub fn json_schema() -> schemars::schema::RootSchema {
        let mut schema = schemars::schema_for!(Self);
        let metadata = schema.schema.metadata();
        metadata.id = Some(SCHEMA_ID.to_string());
        metadata.title = Some(SCHEMA_TITLE.to_string());
        schema
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
