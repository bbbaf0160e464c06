//! Text output formatter for human-readable display
//!
//! This module provides:
//! - One line per gem specification, written as soon as it is handled
//! - Relayed installer output
//! - Summary with counts
//!
//! Failures go to the error stream, everything else to the report stream.

use crate::domain::{RunSummary, SpecOutcome};
use crate::orchestrator::{OrchestratorResult, RunObserver};
use crate::output::{OutputFormatter, Verbosity};
use crate::package_manager::InstallOutcome;
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Text formatter for human-readable output
pub struct TextFormatter<'a> {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
    /// Report stream
    out: Box<dyn Write + 'a>,
    /// Failure stream
    err: Box<dyn Write + 'a>,
}

impl<'a> TextFormatter<'a> {
    /// Create a new text formatter
    pub fn new(
        verbosity: Verbosity,
        dry_run: bool,
        color: bool,
        out: Box<dyn Write + 'a>,
        err: Box<dyn Write + 'a>,
    ) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
            out,
            err,
        }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> String {
        if self.dry_run {
            format!("{} ", self.paint("(dry-run)", |s| s.cyan()))
        } else {
            String::new()
        }
    }

    fn quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    fn write_install(&mut self, install: &InstallOutcome) -> io::Result<()> {
        if !install.succeeded {
            let message = install.error_message.as_deref().unwrap_or("unknown error");
            let label = self.paint(&format!("Error during {}:", install.command), |s| {
                s.red().bold()
            });
            writeln!(self.err, "{} {}", label, message)?;
            if !install.stderr.trim().is_empty() {
                write!(self.err, "{}", install.stderr)?;
            }
            return self.err.flush();
        }

        if self.quiet() {
            return Ok(());
        }

        write!(self.out, "{}", install.stdout)?;
        self.out.flush()?;
        if install.has_warnings() {
            let label = self.paint("stderr:", |s| s.yellow());
            writeln!(self.err, "{}", label)?;
            write!(self.err, "{}", install.stderr)?;
            self.err.flush()?;
        }
        Ok(())
    }

    fn write_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        if summary.total() == 0 {
            return Ok(());
        }

        let added_label = if self.dry_run { "to add" } else { "added" };
        let added = format!("{} {}", summary.added_count(), added_label);
        let failed = format!("{} failed", summary.failed_count());
        let added = if summary.added_count() > 0 {
            self.paint(&added, |s| s.green())
        } else {
            added
        };
        let failed = if summary.failed_count() > 0 {
            self.paint(&failed, |s| s.red())
        } else {
            failed
        };
        let prefix = self.dry_run_prefix();

        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}Summary: {}, {} already present, {}",
            prefix,
            added,
            summary.already_present_count(),
            failed
        )?;
        self.out.flush()
    }
}

impl RunObserver for TextFormatter<'_> {
    fn spec_finished(&mut self, outcome: &SpecOutcome) -> io::Result<()> {
        match outcome {
            SpecOutcome::Added { name, entry, .. } => {
                if self.quiet() {
                    return Ok(());
                }
                let verb = if self.dry_run {
                    "would be added to"
                } else {
                    "added to"
                };
                let line = format!(
                    "{}{} Gem '{}' {} Gemfile.",
                    self.dry_run_prefix(),
                    self.paint("✓", |s| s.green()),
                    name,
                    verb
                );
                writeln!(self.out, "{}", line)?;
                if self.verbosity == Verbosity::Verbose {
                    let entry = self.paint(entry, |s| s.dimmed());
                    writeln!(self.out, "    {}", entry)?;
                }
                self.out.flush()
            }
            SpecOutcome::AlreadyPresent { name } => {
                if self.quiet() {
                    return Ok(());
                }
                let bullet = self.paint("•", |s| s.dimmed());
                writeln!(self.out, "{} Gem '{}' is already in the Gemfile.", bullet, name)?;
                self.out.flush()
            }
            SpecOutcome::Failed { message, .. } => {
                let cross = self.paint("✗", |s| s.red());
                writeln!(self.err, "{} {}", cross, message)?;
                self.err.flush()
            }
        }
    }

    fn install_started(&mut self, command: &str) -> io::Result<()> {
        if self.quiet() {
            return Ok(());
        }
        writeln!(self.out)?;
        writeln!(self.out, "Running '{}'...", command)?;
        self.out.flush()
    }
}

impl OutputFormatter for TextFormatter<'_> {
    fn finish(&mut self, result: &OrchestratorResult) -> io::Result<()> {
        if let Some(install) = &result.install {
            self.write_install(install)?;
        }

        self.write_summary(&result.summary)
    }
}
