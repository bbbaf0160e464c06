//! Per-specification outcome types

use serde::Serialize;
use std::fmt;

/// Why a gem specification could not be added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The specification string matched neither syntax
    InvalidSpec,
    /// RubyGems has no gem with that name
    NotFound,
    /// RubyGems could not be reached or answered with an error
    Registry,
    /// The Gemfile could not be read or appended to
    Manifest,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::InvalidSpec => write!(f, "invalid specification"),
            FailureReason::NotFound => write!(f, "gem not found"),
            FailureReason::Registry => write!(f, "registry error"),
            FailureReason::Manifest => write!(f, "manifest error"),
        }
    }
}

/// Result of processing a single gem specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpecOutcome {
    /// The gem was appended (or would be, in dry-run mode)
    Added {
        /// Gem name
        name: String,
        /// Declaration line written to the Gemfile
        entry: String,
        /// Description reported by the registry
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// The Gemfile already mentions the gem
    AlreadyPresent {
        /// Gem name
        name: String,
    },
    /// The specification failed; siblings are unaffected
    Failed {
        /// Raw specification string as given on the command line
        input: String,
        /// Failure category
        reason: FailureReason,
        /// Human readable message
        message: String,
    },
}

impl SpecOutcome {
    /// Creates an Added outcome
    pub fn added(
        name: impl Into<String>,
        entry: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        SpecOutcome::Added {
            name: name.into(),
            entry: entry.into(),
            description,
        }
    }

    /// Creates an AlreadyPresent outcome
    pub fn already_present(name: impl Into<String>) -> Self {
        SpecOutcome::AlreadyPresent { name: name.into() }
    }

    /// Creates a Failed outcome
    pub fn failed(
        input: impl Into<String>,
        reason: FailureReason,
        message: impl Into<String>,
    ) -> Self {
        SpecOutcome::Failed {
            input: input.into(),
            reason,
            message: message.into(),
        }
    }

    /// Returns true if the gem was added
    pub fn is_added(&self) -> bool {
        matches!(self, SpecOutcome::Added { .. })
    }

    /// Returns true if the gem was already in the Gemfile
    pub fn is_already_present(&self) -> bool {
        matches!(self, SpecOutcome::AlreadyPresent { .. })
    }

    /// Returns true if processing failed
    pub fn is_failed(&self) -> bool {
        matches!(self, SpecOutcome::Failed { .. })
    }

    /// Returns the failure reason, if any
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            SpecOutcome::Failed { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
