//! Gemfile store for Ruby projects
//!
//! The Gemfile is treated as unstructured text: lookups are raw substring
//! tests and writes are a single append at the end of the file. Existing
//! content is never rewritten.

use crate::error::ManifestError;
use crate::manifest::{GemEntry, ManifestStore};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default Gemfile location, relative to the working directory
pub const DEFAULT_GEMFILE: &str = "Gemfile";

/// Gemfile on disk
#[derive(Debug, Clone)]
pub struct Gemfile {
    path: PathBuf,
}

impl Gemfile {
    /// Create a store for the Gemfile at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ManifestStore for Gemfile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<String, ManifestError> {
        fs::read_to_string(&self.path).map_err(|e| ManifestError::read_error(&self.path, e))
    }

    fn append(&self, entry: &GemEntry) -> Result<(), ManifestError> {
        let block = entry.to_string();

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| ManifestError::write_error(&self.path, e))?;
        file.write_all(block.as_bytes())
            .map_err(|e| ManifestError::write_error(&self.path, e))?;

        debug!(path = %self.path.display(), gem = %entry.name, bytes = block.len(), "appended gem entry");
        Ok(())
    }
}
