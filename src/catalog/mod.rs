//! WCAG 2.2 success-criteria catalog with axe-core rule mappings.
//!
//! The table itself lives in [`criteria`]; this module exposes the typed
//! entry plus order-preserving lookups and filters over it.

mod criteria;

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use criteria::CRITERIA;

/// WCAG conformance level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Level {
    A,
    AA,
    AAA,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AA" => Ok(Self::AA),
            "AAA" => Ok(Self::AAA),
            _ => Err(format!("Unknown WCAG level: {s}")),
        }
    }
}

/// The four WCAG principles, used to group criteria in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Principle {
    Perceivable,
    Operable,
    Understandable,
    Robust,
}

impl Principle {
    pub const ALL: [Self; 4] = [
        Self::Perceivable,
        Self::Operable,
        Self::Understandable,
        Self::Robust,
    ];

    /// Principle owning a criterion id such as `"2.4.1"`.
    #[must_use]
    pub fn of(criterion_id: &str) -> Option<Self> {
        match criterion_id.split('.').next()? {
            "1" => Some(Self::Perceivable),
            "2" => Some(Self::Operable),
            "3" => Some(Self::Understandable),
            "4" => Some(Self::Robust),
            _ => None,
        }
    }

    /// Heading label, e.g. `"1. Perceivable"`.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Perceivable => "1. Perceivable",
            Self::Operable => "2. Operable",
            Self::Understandable => "3. Understandable",
            Self::Robust => "4. Robust",
        }
    }
}

/// A single WCAG success criterion and the engine rules that test it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub id: &'static str,
    pub name: &'static str,
    pub level: Level,
    pub description: &'static str,
    pub rule_ids: &'static [&'static str],
    pub can_automate: bool,
}

impl Criterion {
    #[must_use]
    pub const fn has_rules(&self) -> bool {
        !self.rule_ids.is_empty()
    }

    #[must_use]
    pub fn principle(&self) -> Option<Principle> {
        Principle::of(self.id)
    }
}

/// All WCAG 2.2 Level A and AA criteria in principle, guideline, criterion order.
#[must_use]
pub const fn wcag22_criteria() -> &'static [Criterion] {
    CRITERIA
}

/// Criteria whose level is in `levels`, in catalog order.
#[must_use]
pub fn criteria_by_level(levels: &[Level]) -> Vec<Criterion> {
    CRITERIA
        .iter()
        .filter(|c| levels.contains(&c.level))
        .copied()
        .collect()
}

/// Criteria flagged as fully automatable, in catalog order.
#[must_use]
pub fn automatable_criteria() -> Vec<Criterion> {
    CRITERIA.iter().filter(|c| c.can_automate).copied().collect()
}

#[must_use]
pub fn criterion_by_id(id: &str) -> Option<&'static Criterion> {
    CRITERIA.iter().find(|c| c.id == id)
}

/// Criteria that list `rule_id` among their rules.
#[must_use]
pub fn criteria_for_rule(rule_id: &str) -> Vec<&'static Criterion> {
    CRITERIA
        .iter()
        .filter(|c| c.rule_ids.contains(&rule_id))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
