//! addgem - add gems to a Gemfile after verifying them on RubyGems
//!
//! This library provides the pieces the `addgem` binary is built from:
//! - Gem specification parsing
//! - RubyGems lookups
//! - Gemfile duplicate checks and appends
//! - The `bundle install` step

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod parser;
pub mod progress;
pub mod registry;
