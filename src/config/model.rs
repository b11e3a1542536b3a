use serde::{Deserialize, Serialize};

use crate::error::{Result, VpatError};
use crate::evaluator::{
    DEFAULT_CHECKER_NAME, DEFAULT_CHECKER_VERSION, DEFAULT_HOST_NAME, DEFAULT_HOST_VERSION,
};
use crate::output::OutputFormat;
use crate::report::{DEFAULT_METHOD, ProductInfo, ToolInfo};

/// Product name used when neither the config nor the CLI supplies one.
pub const DEFAULT_PRODUCT_NAME: &str = "Web Application";

/// Root of a `.vpat.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub product: ProductConfig,

    #[serde(default)]
    pub evaluation: EvaluationConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// `[product]`: identity of the product under evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// `[evaluation]`: who evaluated, what was covered, and how.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub evaluator: Option<String>,

    #[serde(default)]
    pub scope: Option<String>,

    /// Evaluation methods listed in the report (default: `["Automated testing"]`).
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            evaluator: None,
            scope: None,
            methods: default_methods(),
        }
    }
}

fn default_methods() -> Vec<String> {
    vec![DEFAULT_METHOD.to_string()]
}

/// A tool recorded in the evaluation section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl ToolConfig {
    fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: Some(version.to_string()),
        }
    }

    #[must_use]
    pub fn to_tool_info(&self) -> ToolInfo {
        ToolInfo::new(self.name.clone(), self.version.clone())
    }
}

/// `[tools.checker]` and `[tools.host]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolsConfig {
    /// The accessibility engine that produced the results.
    #[serde(default = "default_checker")]
    pub checker: ToolConfig,

    /// The browser automation host that ran the checker.
    #[serde(default = "default_host")]
    pub host: ToolConfig,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            checker: default_checker(),
            host: default_host(),
        }
    }
}

fn default_checker() -> ToolConfig {
    ToolConfig::new(DEFAULT_CHECKER_NAME, DEFAULT_CHECKER_VERSION)
}

fn default_host() -> ToolConfig {
    ToolConfig::new(DEFAULT_HOST_NAME, DEFAULT_HOST_VERSION)
}

/// `[output]`: rendering defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Default output format (`json`, `markdown`, `html`, `csv`).
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Check semantic constraints that the TOML schema cannot express.
    ///
    /// # Errors
    /// Returns `VpatError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        for (key, tool) in [("checker", &self.tools.checker), ("host", &self.tools.host)] {
            if tool.name.trim().is_empty() {
                return Err(VpatError::Config(format!(
                    "tools.{key}.name cannot be empty"
                )));
            }
        }

        if self.evaluation.methods.is_empty() {
            return Err(VpatError::Config(
                "evaluation.methods must list at least one method".to_string(),
            ));
        }
        if let Some(i) = self
            .evaluation
            .methods
            .iter()
            .position(|m| m.trim().is_empty())
        {
            return Err(VpatError::Config(format!(
                "evaluation.methods[{i}] cannot be empty"
            )));
        }

        if self.output.format.is_some() {
            self.output_format()?;
        }
        Ok(())
    }

    /// Configured default output format, or Markdown when unset.
    ///
    /// # Errors
    /// Returns `VpatError::Config` if the configured value is not a known format.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.format.as_deref().map_or_else(
            || Ok(OutputFormat::default()),
            |raw| {
                raw.parse::<OutputFormat>()
                    .map_err(|e: String| VpatError::Config(format!("output.format: {e}")))
            },
        )
    }

    /// Product identity from `[product]`, with the default name filled in
    /// when the configured one is missing or blank.
    #[must_use]
    pub fn product_info(&self) -> ProductInfo {
        let product = &self.product;
        ProductInfo {
            name: product
                .name
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(DEFAULT_PRODUCT_NAME)
                .to_string(),
            version: product.version.clone(),
            description: product.description.clone(),
            vendor: product.vendor.clone(),
            url: product.url.clone(),
        }
    }

    #[must_use]
    pub fn tool_infos(&self) -> Vec<ToolInfo> {
        vec![
            self.tools.checker.to_tool_info(),
            self.tools.host.to_tool_info(),
        ]
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
