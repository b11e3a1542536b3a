use std::fs;
use std::path::Path;

use crate::Result;
use crate::config::{Config, ConfigLoader, FileConfigLoader};

/// Load the effective configuration.
///
/// `--no-config` wins over everything; an explicit path skips discovery.
///
/// # Errors
/// Returns an error if the selected config file cannot be read, parsed, or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write output to a file or stdout.
///
/// File writes create missing parent directories.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
