//! Gem specification structures

/// Surface syntax a gem specification was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecSyntax {
    /// `gem "name", "constraint", "constraint"`
    Keyword,
    /// `name, "constraint", "constraint"`
    Bare,
}

/// A parsed gem specification
///
/// `name` is always trimmed and non-empty. `version_constraints` holds zero,
/// one or two entries in the order they were written; the strings are not
/// validated as version requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    /// Gem name
    pub name: String,
    /// Version constraints, e.g. `["~> 7.0", "< 8"]`
    pub version_constraints: Vec<String>,
    /// Which surface syntax matched
    pub syntax: SpecSyntax,
}

impl DependencySpec {
    /// Creates a new gem specification
    pub fn new(
        name: impl Into<String>,
        version_constraints: Vec<String>,
        syntax: SpecSyntax,
    ) -> Self {
        Self {
            name: name.into(),
            version_constraints,
            syntax,
        }
    }
}
