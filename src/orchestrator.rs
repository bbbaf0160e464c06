//! Add orchestrator for coordinating the entire workflow
//!
//! This module provides:
//! - Workflow coordination: validate → (parse → check → look up → append)* → install
//! - Strictly sequential processing, one specification at a time
//! - Per-specification error isolation
//! - Dry-run mode support
//! - Reporting each outcome through a `RunObserver` as soon as it is known

use crate::config::Config;
use crate::domain::{FailureReason, RunSummary, SpecOutcome};
use crate::error::{AppError, ManifestError};
use crate::manifest::{GemEntry, Gemfile, ManifestStore};
use crate::package_manager::{InstallOutcome, PackageManagerRunner, SystemPackageManager};
use crate::parser::parse_gem_spec;
use crate::progress::Progress;
use crate::registry::{GemRegistry, HttpClient, RubyGemsAdapter};
use std::io;
use tracing::{debug, info, warn};

/// Receives progress while a run is underway
pub trait RunObserver {
    /// Called as soon as a specification has been handled
    fn spec_finished(&mut self, _outcome: &SpecOutcome) -> io::Result<()> {
        Ok(())
    }

    /// Called right before the installer is launched
    fn install_started(&mut self, _command: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Ignores all progress
impl RunObserver for () {}

/// Orchestrator for coordinating the add workflow
pub struct Orchestrator<R, M, P> {
    /// Gem metadata lookups
    registry: R,
    /// The Gemfile
    manifest: M,
    /// Installer run after the loop
    installer: P,
    /// Whether to skip writes and the installer
    dry_run: bool,
    /// Whether to run the installer
    install: bool,
    /// Whether to show spinners
    show_progress: bool,
}

/// Result of running the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorResult {
    /// Outcome of every specification
    pub summary: RunSummary,
    /// Installer outcome, absent when the installer was not run
    pub install: Option<InstallOutcome>,
}

impl Orchestrator<RubyGemsAdapter, Gemfile, SystemPackageManager> {
    /// Create an orchestrator wired to RubyGems, the Gemfile on disk and the
    /// configured installer command
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = HttpClient::new()?;
        Ok(Self::new(
            RubyGemsAdapter::with_base_url(client, &config.registry_url),
            Gemfile::new(&config.gemfile),
            SystemPackageManager::new(config.install_command.clone(), config.install_dir()),
            config,
        ))
    }
}

impl<R, M, P> Orchestrator<R, M, P>
where
    R: GemRegistry,
    M: ManifestStore,
    P: PackageManagerRunner,
{
    /// Create an orchestrator from its collaborators
    pub fn new(registry: R, manifest: M, installer: P, config: &Config) -> Self {
        Self {
            registry,
            manifest,
            installer,
            dry_run: config.dry_run,
            install: config.install,
            show_progress: config.show_progress,
        }
    }

    /// Run the add workflow over the given specification strings
    ///
    /// Fails only when the manifest is missing, before any lookup is made.
    /// Every other problem is recorded in the summary and the loop moves on.
    /// The observer hears about each outcome before the next spec starts and
    /// about the installer before it is launched.
    pub async fn run<O>(
        &self,
        specs: &[String],
        observer: &mut O,
    ) -> Result<OrchestratorResult, AppError>
    where
        O: RunObserver + ?Sized,
    {
        if !self.manifest.exists() {
            return Err(ManifestError::not_found(self.manifest.path()).into());
        }

        let mut progress = Progress::new(self.show_progress);
        let mut summary = RunSummary::new(self.dry_run);

        for raw in specs {
            let outcome = self.process_spec(raw, &mut progress).await;
            if let Err(e) = observer.spec_finished(&outcome) {
                warn!(error = %e, "failed to report outcome");
            }
            summary.add_outcome(outcome);
        }

        let install = if self.install {
            let command = self.installer.command_line();
            if let Err(e) = observer.install_started(&command) {
                warn!(error = %e, "failed to report installer start");
            }
            progress.spinner(&format!("Running {}...", command));
            let outcome = self.installer.run_install();
            progress.finish_and_clear();
            info!(
                command = %outcome.command,
                succeeded = outcome.succeeded,
                "installer finished"
            );
            Some(outcome)
        } else {
            None
        };

        Ok(OrchestratorResult { summary, install })
    }

    /// Process a single specification string
    async fn process_spec(&self, raw: &str, progress: &mut Progress) -> SpecOutcome {
        debug!(spec = raw, "processing gem specification");

        let spec = match parse_gem_spec(raw) {
            Ok(spec) => spec,
            Err(e) => {
                info!(spec = raw, "invalid gem specification");
                return SpecOutcome::failed(raw, FailureReason::InvalidSpec, e.to_string());
            }
        };

        // The manifest is re-read for every spec so earlier appends count.
        match self.manifest.contains(&spec.name) {
            Ok(true) => {
                info!(gem = %spec.name, "gem already present");
                return SpecOutcome::already_present(spec.name);
            }
            Ok(false) => {}
            Err(e) => return SpecOutcome::failed(raw, FailureReason::Manifest, e.to_string()),
        }

        progress.spinner(&format!(
            "Looking up {} on {}...",
            spec.name,
            self.registry.registry_name()
        ));
        let lookup = self.registry.fetch_gem(&spec.name).await;
        progress.finish_and_clear();

        let gem = match lookup {
            Ok(gem) => gem,
            Err(e) => {
                let reason = if e.is_not_found() {
                    FailureReason::NotFound
                } else {
                    FailureReason::Registry
                };
                info!(gem = %spec.name, error = %e, "registry lookup failed");
                return SpecOutcome::failed(raw, reason, e.to_string());
            }
        };

        let entry = GemEntry::from_lookup(&spec, &gem);

        if !self.dry_run {
            if let Err(e) = self.manifest.append(&entry) {
                return SpecOutcome::failed(raw, FailureReason::Manifest, e.to_string());
            }
        }

        info!(gem = %spec.name, dry_run = self.dry_run, "gem added");
        SpecOutcome::added(spec.name, entry.declaration_line(), entry.description)
    }
}
