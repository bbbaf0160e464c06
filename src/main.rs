//! addgem - add gems to a Gemfile after checking they exist on RubyGems
//!
//! Each specification is parsed, checked against the Gemfile, looked up on
//! RubyGems and appended; `bundle install` runs once at the end.

use addgem::cli::{CliArgs, USAGE};
use addgem::config::Config;
use addgem::orchestrator::Orchestrator;
use addgem::output::{create_formatter, OutputConfig, OutputFormatter};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with output to stderr so stdout stays clean for reports
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "addgem=debug" } else { "addgem=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    if !args.has_specs() {
        println!("{}", USAGE);
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
///
/// Returns success once the Gemfile has been found, whatever happened to the
/// individual specifications or the installer; those are reported instead.
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("addgem v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Gemfile: {}", args.gemfile.display());
        eprintln!("Registry: {}", args.registry_url);
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let config = Config::from_cli(&args);
    let orchestrator = Orchestrator::from_config(&config)?;

    let mut output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.dry_run);
    output_config.color = io::stdout().is_terminal();
    let mut formatter = create_formatter(output_config, Box::new(io::stdout()), Box::new(io::stderr()));

    let result = orchestrator.run(&args.specs, &mut *formatter).await?;
    formatter.finish(&result)?;

    Ok(ExitCode::SUCCESS)
}
