//! Gemfile reading and appending
//!
//! This module provides:
//! - The `ManifestStore` seam used by the orchestrator
//! - The on-disk `Gemfile` store
//! - Rendering of appended gem entries

mod entry;
mod gemfile;

pub use entry::GemEntry;
pub use gemfile::{Gemfile, DEFAULT_GEMFILE};

use crate::error::ManifestError;
use std::path::Path;

/// Trait for dependency manifests that can be searched and appended to
pub trait ManifestStore {
    /// Location of the manifest, used in messages
    fn path(&self) -> &Path;

    /// Whether the manifest is present
    fn exists(&self) -> bool;

    /// Read the full manifest content
    fn read(&self) -> Result<String, ManifestError>;

    /// Append an entry at the end of the manifest in one write
    fn append(&self, entry: &GemEntry) -> Result<(), ManifestError>;

    /// Whether `name` occurs anywhere in the manifest
    ///
    /// This is a raw substring test; it is not anchored to declaration lines
    /// and not word bounded, so `rail` matches a manifest containing `rails`.
    fn contains(&self, name: &str) -> Result<bool, ManifestError> {
        Ok(self.read()?.contains(name))
    }
}
