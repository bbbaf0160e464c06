//! Run configuration
//!
//! Every location the tool touches is an explicit value here, so each
//! component is constructed with what it needs instead of reading globals.

use crate::cli::CliArgs;
use crate::manifest::DEFAULT_GEMFILE;
use crate::package_manager::DEFAULT_INSTALL_COMMAND;
use crate::registry::RUBYGEMS_API_URL;
use std::path::{Path, PathBuf};

/// Configuration for one addgem run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Gemfile to read and append to
    pub gemfile: PathBuf,
    /// Base URL of the gem metadata API
    pub registry_url: String,
    /// Installer program followed by its arguments
    pub install_command: Vec<String>,
    /// Look up and report only
    pub dry_run: bool,
    /// Run the installer after processing
    pub install: bool,
    /// Show spinners while waiting on I/O
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemfile: PathBuf::from(DEFAULT_GEMFILE),
            registry_url: RUBYGEMS_API_URL.to_string(),
            install_command: DEFAULT_INSTALL_COMMAND.iter().map(|s| s.to_string()).collect(),
            dry_run: false,
            install: true,
            show_progress: true,
        }
    }
}

impl Config {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            gemfile: args.gemfile.clone(),
            registry_url: args.registry_url.clone(),
            dry_run: args.dry_run,
            install: !args.skip_install && !args.dry_run,
            show_progress: !args.quiet && !args.json,
            ..Self::default()
        }
    }

    /// Directory the installer runs in
    ///
    /// The Gemfile's parent directory, or `None` (inherit the current
    /// directory) when the Gemfile path has no directory component.
    pub fn install_dir(&self) -> Option<PathBuf> {
        self.gemfile
            .parent()
            .filter(|dir| *dir != Path::new(""))
            .map(Path::to_path_buf)
    }
}
