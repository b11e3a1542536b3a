use tracing::{debug, info};

use crate::cli::{Cli, GenerateArgs};
use crate::config::Config;
use crate::evaluator::Generator;
use crate::input::{ResultStats, load_all};
use crate::output::{CsvFormatter, OutputFormat, ReportFormatter, render};
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, write_output};

#[must_use]
pub fn run_generate(args: &GenerateArgs, cli: &Cli) -> i32 {
    match run_generate_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!(category = e.error_type(), "generate failed");
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Load results, classify them, and write the rendered report.
///
/// # Errors
/// Returns an error if the config or any results file is invalid, or the
/// report cannot be rendered or written.
pub fn run_generate_impl(args: &GenerateArgs, cli: &Cli) -> Result<()> {
    // 1. Configuration, then CLI overrides on top
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?,
    };

    // 2. Checker results
    let results = load_all(&args.results)?;
    let stats = ResultStats::from_results(&results);
    info!(
        pages = stats.pages,
        violations = stats.violations,
        affected_nodes = stats.affected_nodes,
        passes = stats.passes,
        "loaded accessibility results"
    );

    // 3. Classification
    let mut report = build_generator(&config, args).generate(&results);
    report.standard = args.standard.label().to_string();

    // 4. Rendering
    let output = match format {
        OutputFormat::Csv => CsvFormatter::new(args.sheet).format(&report)?,
        other => render(other, &report)?,
    };

    write_output(args.output.as_deref(), &output)?;
    if let Some(path) = &args.output {
        info!(path = %path.display(), %format, "wrote report");
    }
    Ok(())
}

/// Generator seeded from config with CLI flags taking precedence.
#[must_use]
pub fn build_generator(config: &Config, args: &GenerateArgs) -> Generator {
    let mut product = config.product_info();
    // A blank --product keeps the configured or default name
    if let Some(name) = args.product.as_deref().filter(|name| !name.trim().is_empty()) {
        product.name = name.to_string();
    }
    override_field(&mut product.version, args.product_version.as_ref());
    override_field(&mut product.description, args.description.as_ref());
    override_field(&mut product.vendor, args.vendor.as_ref());
    override_field(&mut product.url, args.product_url.as_ref());

    let mut generator = Generator::new(product)
        .with_tools(config.tool_infos())
        .with_methods(config.evaluation.methods.clone());

    if let Some(evaluator) = args
        .evaluator
        .as_ref()
        .or(config.evaluation.evaluator.as_ref())
    {
        generator.set_evaluator(evaluator.clone());
    }
    if let Some(scope) = args.scope.as_ref().or(config.evaluation.scope.as_ref()) {
        generator.set_scope(scope.clone());
    }
    for url in &args.urls {
        generator.add_url(url.clone());
    }
    generator
}

fn override_field(field: &mut Option<String>, value: Option<&String>) {
    if let Some(value) = value {
        *field = Some(value.clone());
    }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
