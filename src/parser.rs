//! Gem specification parser
//!
//! Handles two surface syntaxes, tried in order:
//! - Keyword form: `gem "rails", "~> 7.0", "< 8"`
//! - Bare form: `rails, "~> 7.0", "< 8"`
//!
//! Quotes may be single or double and whitespace around tokens is ignored.
//! At most two version constraints are recognised and gem names may not
//! contain whitespace. The matcher is pattern based rather than a Ruby
//! grammar: a keyword-form spec may end in options such as `require: false`,
//! which are ignored, but any other trailing text rejects the whole spec.

use crate::domain::{DependencySpec, SpecSyntax};
use crate::error::SpecError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// gem "name" [, "c1" [, "c2"]] [, key: value ...]
static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*gem\s*["']\s*([^"'\s]+)\s*["']\s*(?:,\s*["']([^"']+)["']\s*(?:,\s*["']([^"']+)["']\s*)?)?(?:,\s*(?:[A-Za-z_]\w*:|:\w+\s*=>).*)?$"#,
    )
    .unwrap()
});

// name [, "c1" [, "c2"]]
// The name is a single token before the first comma without quotes.
static BARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*([^,"'\s]+)\s*(?:,\s*["']([^"']+)["']\s*(?:,\s*["']([^"']+)["']\s*)?)?$"#,
    )
    .unwrap()
});

/// Order in which the surface syntaxes are attempted
const PARSE_ORDER: [SpecSyntax; 2] = [SpecSyntax::Keyword, SpecSyntax::Bare];

fn pattern(syntax: SpecSyntax) -> &'static Regex {
    match syntax {
        SpecSyntax::Keyword => &*KEYWORD_RE,
        SpecSyntax::Bare => &*BARE_RE,
    }
}

/// Parse a gem specification string
///
/// Returns the first syntax that matches with a non-empty name.
pub fn parse_gem_spec(raw: &str) -> Result<DependencySpec, SpecError> {
    PARSE_ORDER
        .iter()
        .find_map(|syntax| parse_with(*syntax, raw))
        .ok_or_else(|| SpecError::unrecognized(raw))
}

fn parse_with(syntax: SpecSyntax, raw: &str) -> Option<DependencySpec> {
    let caps = pattern(syntax).captures(raw)?;

    let name = caps.get(1)?.as_str().trim();
    if name.is_empty() {
        return None;
    }

    Some(DependencySpec::new(name, constraints(&caps), syntax))
}

fn constraints(caps: &Captures<'_>) -> Vec<String> {
    [2, 3]
        .iter()
        .filter_map(|&i| caps.get(i))
        .map(|m| m.as_str().trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}
