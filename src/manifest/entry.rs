//! Gemfile entry rendering
//!
//! An entry is the text block appended for one gem:
//!
//! ```text
//!
//! # Added nokogiri: HTML parser
//! gem 'nokogiri', "1.13.0"
//! ```

use crate::domain::DependencySpec;
use crate::registry::GemInfo;
use std::fmt;

/// A gem declaration plus its explanatory comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GemEntry {
    /// Gem name as declared
    pub name: String,
    /// Gem name as reported by the registry, used in the comment line
    pub registry_name: String,
    /// Version constraints, rendered double-quoted in order
    pub constraints: Vec<String>,
    /// Registry description, already collapsed onto one line
    pub description: Option<String>,
}

impl GemEntry {
    /// Create a new entry
    ///
    /// Runs of whitespace in the description (including newlines) collapse
    /// to single spaces, and a blank description is dropped.
    pub fn new(
        name: impl Into<String>,
        constraints: Vec<String>,
        description: Option<&str>,
    ) -> Self {
        let name = name.into();
        let description = description
            .map(|d| d.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|d| !d.is_empty());

        Self {
            registry_name: name.clone(),
            name,
            constraints,
            description,
        }
    }

    /// Create an entry for a parsed specification confirmed by the registry
    ///
    /// The declaration keeps the name as typed; the comment names the gem
    /// the way the registry spells it.
    pub fn from_lookup(spec: &DependencySpec, gem: &GemInfo) -> Self {
        Self {
            registry_name: gem.name.clone(),
            ..Self::new(
                &spec.name,
                spec.version_constraints.clone(),
                gem.description.as_deref(),
            )
        }
    }

    /// `# Added <name>[: <description>]`
    pub fn comment_line(&self) -> String {
        match &self.description {
            Some(description) => format!("# Added {}: {}", self.registry_name, description),
            None => format!("# Added {}", self.registry_name),
        }
    }

    /// `gem '<name>'[, "<c1>"[, "<c2>"]]`
    pub fn declaration_line(&self) -> String {
        let mut line = format!("gem '{}'", self.name);
        for constraint in &self.constraints {
            line.push_str(&format!(", \"{}\"", constraint));
        }
        line
    }
}

impl fmt::Display for GemEntry {
    /// The exact text appended to the Gemfile, leading blank line included
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n{}\n", self.comment_line(), self.declaration_line())
    }
}
