//! CLI argument parsing module for addgem

use crate::manifest::DEFAULT_GEMFILE;
use crate::registry::RUBYGEMS_API_URL;
use clap::Parser;
use std::path::PathBuf;

/// Accepted specification syntaxes, printed when no specification is given
pub const USAGE: &str = r#"Usage: addgem 'gem "gem_name", "version1", "version2"' or 'gem_name, "version1", "version2"'"#;

/// Add gems to a Gemfile after checking they exist on RubyGems
#[derive(Parser, Debug, Clone)]
#[command(
    name = "addgem",
    version,
    about = "Add gems to a Gemfile after checking they exist on RubyGems"
)]
pub struct CliArgs {
    /// Gem specifications, e.g. 'gem "rails", "~> 7.0"' or 'nokogiri, "1.13.0"'
    pub specs: Vec<String>,

    /// Path to the Gemfile
    #[arg(long, env = "ADDGEM_GEMFILE", default_value = DEFAULT_GEMFILE)]
    pub gemfile: PathBuf,

    /// Base URL of the gem metadata API
    #[arg(long, env = "ADDGEM_REGISTRY_URL", default_value = RUBYGEMS_API_URL)]
    pub registry_url: String,

    /// Dry run mode - look up gems and report without changing the Gemfile
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Do not run `bundle install` afterwards
    #[arg(long)]
    pub skip_install: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - only failures and the summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Check if any gem specification was given
    pub fn has_specs(&self) -> bool {
        !self.specs.is_empty()
    }
}
