use clap::Parser;
use tracing_subscriber::EnvFilter;

use vpat::cli::{Cli, Commands};
use vpat::commands::{run_criteria, run_generate, run_init, run_schema};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Generate(args) => run_generate(args, &cli),
        Commands::Criteria(args) => run_criteria(args),
        Commands::Schema(args) => run_schema(args),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}

/// Default filter for the given verbosity flags; `RUST_LOG` takes precedence.
const fn log_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "vpat=error";
    }
    match verbose {
        0 => "vpat=warn",
        1 => "vpat=debug",
        _ => "vpat=trace",
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
