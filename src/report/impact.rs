use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity tag reported by the accessibility engine.
///
/// Unrecognized values are kept verbatim in [`Impact::Other`] so they
/// round-trip unchanged; they never count as critical or serious.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Impact {
    Critical,
    Serious,
    Moderate,
    Minor,
    Other(String),
}

impl Impact {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Critical => "critical",
            Self::Serious => "serious",
            Self::Moderate => "moderate",
            Self::Minor => "minor",
            Self::Other(raw) => raw,
        }
    }
}

impl Default for Impact {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for Impact {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "critical" => Self::Critical,
            "serious" => Self::Serious,
            "moderate" => Self::Moderate,
            "minor" => Self::Minor,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Impact {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Impact> for String {
    fn from(impact: Impact) -> Self {
        match impact {
            Impact::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
