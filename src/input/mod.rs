//! Accessibility results produced by the external checker (axe-core JSON).

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{Result, VpatError};
use crate::report::Impact;

/// One offending DOM element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(default)]
    pub html: String,
}

/// A rule firing (or passing) as reported by the checker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawViolation {
    pub id: String,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub help_url: String,
    #[serde(default, deserialize_with = "nullable_impact")]
    pub impact: Impact,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
}

/// Checker output for a single page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub violations: Vec<RawViolation>,
    #[serde(default)]
    pub passes: Vec<RawViolation>,
}

fn nullable_impact<'de, D>(deserializer: D) -> std::result::Result<Impact, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(Impact::from)
        .unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResultsFile {
    Many(Vec<RawResult>),
    One(Box<RawResult>),
}

/// Informational counts over a set of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultStats {
    pub pages: usize,
    pub violations: usize,
    pub affected_nodes: usize,
    pub passes: usize,
}

impl ResultStats {
    #[must_use]
    pub fn from_results(results: &[RawResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            acc.pages += 1;
            acc.violations += r.violations.len();
            acc.affected_nodes += r.violations.iter().map(|v| v.nodes.len()).sum::<usize>();
            acc.passes += r.passes.len();
            acc
        })
    }
}

/// Parse checker output holding either one result object or an array of them.
///
/// # Errors
/// Returns an error if `content` is neither shape.
pub fn parse_results(content: &str) -> serde_json::Result<Vec<RawResult>> {
    Ok(match serde_json::from_str(content)? {
        ResultsFile::Many(results) => results,
        ResultsFile::One(result) => vec![*result],
    })
}

/// Load checker output from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or does not contain results.
pub fn load_results(path: &Path) -> Result<Vec<RawResult>> {
    let content = fs::read_to_string(path).map_err(|source| VpatError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let results = parse_results(&content).map_err(|source| VpatError::InvalidInput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = results.len(), "loaded results");
    Ok(results)
}

/// Load several result files in parallel, concatenated in argument order.
///
/// # Errors
/// Returns the first error encountered.
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<RawResult>> {
    let batches: Vec<Vec<RawResult>> = paths
        .par_iter()
        .map(|path| load_results(path))
        .collect::<Result<_>>()?;
    Ok(batches.into_iter().flatten().collect())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
