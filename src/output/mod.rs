//! Output formatting for add results
//!
//! This module provides:
//! - Text output for human-readable display, written as the run progresses
//! - JSON output for machine processing, written once at the end

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::orchestrator::{OrchestratorResult, RunObserver};
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Failures and the summary only
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with declaration lines and installer details
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether this is a dry-run
    pub dry_run: bool,
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            verbosity: Verbosity::default(),
            dry_run: false,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, verbose: bool, quiet: bool, dry_run: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            format,
            verbosity,
            dry_run,
            color: true,
        }
    }
}

/// Trait for output formatters
///
/// Formatters observe the run while it is in progress and are finished with
/// the complete result once the orchestrator returns.
pub trait OutputFormatter: RunObserver {
    /// Write whatever was not already reported during the run
    fn finish(&mut self, result: &OrchestratorResult) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
///
/// `out` receives reports and `err` receives failures; the JSON formatter
/// writes its single document to `out`.
pub fn create_formatter<'a>(
    config: OutputConfig,
    out: Box<dyn Write + 'a>,
    err: Box<dyn Write + 'a>,
) -> Box<dyn OutputFormatter + 'a> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::new(
            config.verbosity,
            config.dry_run,
            config.color,
            out,
            err,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(out)),
    }
}
