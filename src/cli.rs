use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::catalog::Level;
use crate::output::{CsvSheet, OutputFormat};
use crate::report::STANDARD_WCAG22_AA;

/// Conformance standard a report is generated against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Standard {
    /// WCAG 2.2 Level A and AA
    #[default]
    Wcag22aa,
}

impl Standard {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wcag22aa => STANDARD_WCAG22_AA,
        }
    }
}

/// Listing format for the criteria command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// One criterion per line
    #[default]
    Text,
    /// JSON array
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "vpat")]
#[command(author, version, about = "Generate VPAT accessibility conformance reports")]
#[command(long_about = "Generate Voluntary Product Accessibility Template (VPAT) reports \
    against WCAG 2.2 Level AA from automated accessibility results.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration, input, or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a VPAT report from accessibility results
    Generate(GenerateArgs),

    /// List the WCAG 2.2 success criteria catalog
    Criteria(CriteriaArgs),

    /// Print the JSON Schema of the report format
    Schema(SchemaArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Accessibility result files (axe-core JSON, one result or an array)
    #[arg(required = true)]
    pub results: Vec<PathBuf>,

    /// URL covered by the evaluation (can be specified multiple times)
    #[arg(long = "url")]
    pub urls: Vec<String>,

    /// Output format [possible values: json, markdown, html, csv]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// CSV sheet to emit when the format is csv [possible values: criteria, summary, violations]
    #[arg(long, default_value = "criteria")]
    pub sheet: CsvSheet,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Product name
    #[arg(long)]
    pub product: Option<String>,

    /// Product version
    #[arg(long = "version")]
    pub product_version: Option<String>,

    /// Product description
    #[arg(long)]
    pub description: Option<String>,

    /// Product vendor
    #[arg(long)]
    pub vendor: Option<String>,

    /// Product URL
    #[arg(long)]
    pub product_url: Option<String>,

    /// Person or team that performed the evaluation
    #[arg(long)]
    pub evaluator: Option<String>,

    /// Free-text scope of the evaluation
    #[arg(long)]
    pub scope: Option<String>,

    /// Conformance standard
    #[arg(long, value_enum, default_value = "wcag22aa")]
    pub standard: Standard,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CriteriaArgs {
    /// Only list these levels (comma-separated, e.g. a,aa)
    #[arg(long, value_delimiter = ',')]
    pub level: Vec<Level>,

    /// Only list criteria that can be fully automated
    #[arg(long)]
    pub automated: bool,

    /// Listing format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,
}

#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Write schema to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".vpat.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
