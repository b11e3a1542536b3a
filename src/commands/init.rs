use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result, VpatError};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args, cli.quiet) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// `quiet` suppresses the confirmation line.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs, quiet: bool) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(VpatError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    if !quiet {
        println!("Created configuration file: {}", output_path.display());
    }
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# vpat configuration file
# Values here are defaults; command-line flags take precedence.

[product]
# Product name shown in the report (default: "Web Application")
# name = "Acme Portal"
# version = "1.0.0"
# description = "Customer self-service portal"
# vendor = "Acme Corp"
# url = "https://portal.example.com"

[evaluation]
# evaluator = "Accessibility Team"
# scope = "All public pages"

# Evaluation methods listed in the report
methods = ["Automated testing"]

# Accessibility engine that produced the results
[tools.checker]
name = "axe-core"
version = "4.8.4"

# Browser automation host that ran the engine
[tools.host]
name = "vibium-go"
version = "0.2.0"

[output]
# Default output format: json, markdown, html, csv (default: markdown)
format = "markdown"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
