//! Registry adapters for looking up gem metadata
//!
//! This module provides:
//! - HTTP client shared foundation
//! - RubyGems API adapter

mod client;
mod rubygems;

pub use client::HttpClient;
pub use rubygems::{RubyGemsAdapter, RUBYGEMS_API_URL};

use crate::error::RegistryError;
use async_trait::async_trait;
use serde::Serialize;

/// Gem metadata returned by a registry
///
/// Only the fields this tool uses are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GemInfo {
    /// Canonical gem name
    pub name: String,
    /// Short description, if the registry has one
    pub description: Option<String>,
}

impl GemInfo {
    /// Creates a new GemInfo
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}

/// Trait for gem registries
#[async_trait]
pub trait GemRegistry: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Look up a gem by name, issuing exactly one request
    async fn fetch_gem(&self, name: &str) -> Result<GemInfo, RegistryError>;
}
