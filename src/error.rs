//! Application error types using thiserror
//!
//! Error hierarchy:
//! - SpecError: A gem specification string could not be parsed
//! - RegistryError: Issues with RubyGems communication
//! - ManifestError: Issues reading or appending to the Gemfile
//!
//! Only `ManifestError::NotFound` and HTTP client construction failures are
//! fatal for a run; everything else is recorded per gem specification.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Gemfile related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors produced while parsing a gem specification string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// Neither the keyword form nor the bare form matched
    #[error("invalid gem specification: '{input}'")]
    Unrecognized { input: String },
}

/// Errors related to Gemfile operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Gemfile not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the Gemfile
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to append to the Gemfile
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Registry answered 404 for the gem
    #[error("gem '{package}' not found on {registry}")]
    PackageNotFound { package: String, registry: String },

    /// Registry answered with any other non-success status
    #[error("error fetching gem info for '{package}' from {registry}: {status} - {reason}")]
    HttpStatus {
        package: String,
        registry: String,
        status: u16,
        reason: String,
    },

    /// No response was received
    #[error("error fetching gem info for '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Response body was not the expected JSON document
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },
}

impl SpecError {
    /// Creates a new Unrecognized error
    pub fn unrecognized(input: impl Into<String>) -> Self {
        SpecError::Unrecognized {
            input: input.into(),
        }
    }
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new HttpStatus error
    pub fn http_status(
        package: impl Into<String>,
        registry: impl Into<String>,
        status: u16,
        reason: impl Into<String>,
    ) -> Self {
        RegistryError::HttpStatus {
            package: package.into(),
            registry: registry.into(),
            status,
            reason: reason.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Returns true if the registry reported the gem as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::PackageNotFound { .. })
    }
}
