use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VpatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid accessibility results in {path}: {source}")]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV flush error: {0}")]
    CsvFlush(String),

    #[error("Output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl VpatError {
    /// Short category name for diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidInput { .. } => "Input",
            Self::TomlParse(_) => "TOML",
            Self::Json(_) => "JSON",
            Self::Csv(_) | Self::CsvFlush(_) => "CSV",
            Self::Encoding(_) => "Encoding",
        }
    }
}

pub type Result<T> = std::result::Result<T, VpatError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
