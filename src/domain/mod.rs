//! Core domain models for addgem
//!
//! This module contains the fundamental types used throughout the application:
//! - Parsed gem specifications
//! - Per-specification outcomes
//! - Run summary

mod dependency;
mod outcome;
mod summary;

pub use dependency::{DependencySpec, SpecSyntax};
pub use outcome::{FailureReason, SpecOutcome};
pub use summary::RunSummary;
