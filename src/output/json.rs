//! JSON output formatter for machine processing

use crate::domain::SpecOutcome;
use crate::orchestrator::{OrchestratorResult, RunObserver};
use crate::output::OutputFormatter;
use crate::package_manager::InstallOutcome;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
///
/// Nothing is written until the run is over, so the output is always one
/// complete document.
pub struct JsonFormatter<'a> {
    writer: Box<dyn Write + 'a>,
}

impl<'a> JsonFormatter<'a> {
    /// Create a new JSON formatter writing to `writer`
    pub fn new(writer: Box<dyn Write + 'a>) -> Self {
        Self { writer }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Summary statistics
    summary: JsonSummary,
    /// Per-specification outcomes in input order
    results: &'a [SpecOutcome],
    /// Installer outcome, when it ran
    #[serde(skip_serializing_if = "Option::is_none")]
    install: Option<&'a InstallOutcome>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    added: usize,
    already_present: usize,
    failed: usize,
}

impl RunObserver for JsonFormatter<'_> {}

impl OutputFormatter for JsonFormatter<'_> {
    fn finish(&mut self, result: &OrchestratorResult) -> std::io::Result<()> {
        let summary = &result.summary;
        let output = JsonOutput {
            dry_run: summary.dry_run,
            summary: JsonSummary {
                added: summary.added_count(),
                already_present: summary.already_present_count(),
                failed: summary.failed_count(),
            },
            results: &summary.outcomes,
            install: result.install.as_ref(),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(self.writer, "{}", json)?;
        self.writer.flush()
    }
}
