//! Path classification.
//!
//! # Design Decisions
//! - Literal prefixes are checked first, in configured order; first match wins
//! - The regex is a fallback, never consulted when a literal prefix matched
//! - Prefix matching is plain `starts_with`: `/ocsp` also matches `/ocsplus`
//! - A pattern match may start anywhere in the path; its text becomes the
//!   matched prefix as-is

use regex::Regex;

use crate::config::RewriteConfig;
use crate::rewrite::error::RewriteConfigError;

/// Which matcher claimed a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// A configured literal prefix.
    Literal(&'a str),
    /// The substring of the path found by the fallback pattern.
    Pattern(&'a str),
    NoMatch,
}

impl<'a> MatchResult<'a> {
    /// The matched prefix, if any.
    pub fn prefix(&self) -> Option<&'a str> {
        match *self {
            MatchResult::Literal(p) | MatchResult::Pattern(p) => Some(p),
            MatchResult::NoMatch => None,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MatchResult::Literal(_) => "literal",
            MatchResult::Pattern(_) => "pattern",
            MatchResult::NoMatch => "none",
        }
    }
}

/// Classify a request path against literal prefixes and an optional pattern.
pub fn classify<'a>(path: &'a str, prefixes: &'a [String], pattern: Option<&Regex>) -> MatchResult<'a> {
    if let Some(prefix) = prefixes.iter().find(|p| path.starts_with(p.as_str())) {
        return MatchResult::Literal(prefix);
    }

    match pattern.and_then(|re| re.find(path)) {
        Some(m) => MatchResult::Pattern(m.as_str()),
        None => MatchResult::NoMatch,
    }
}

/// Compiled form of a [`RewriteConfig`]'s matchers.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    prefixes: Vec<String>,
    pattern: Option<Regex>,
}

impl PathMatcher {
    /// Compile the configured pattern. This is the only step that can fail.
    pub fn compile(config: &RewriteConfig) -> Result<Self, RewriteConfigError> {
        let pattern = config
            .path_pattern
            .as_deref()
            .map(|p| {
                Regex::new(p).map_err(|source| RewriteConfigError::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .transpose()?;

        Ok(Self {
            prefixes: config.path_prefixes.clone(),
            pattern,
        })
    }

    pub fn classify<'a>(&'a self, path: &'a str) -> MatchResult<'a> {
        classify(path, &self.prefixes, self.pattern.as_ref())
    }
}
