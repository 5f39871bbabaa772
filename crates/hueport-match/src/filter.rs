//! Comma-separated lists of wildcard patterns.

use std::fmt;
use std::str::FromStr;

use crate::error::{MatchError, Result};
use crate::pattern::Pattern;

/// A set of wildcard patterns; a name passes when any one of them matches.
///
/// # Example
///
/// ```rust
/// use hueport_match::NameFilter;
///
/// let filter = NameFilter::parse("colors/*, accent?").unwrap();
/// assert!(filter.matches("colors/brand"));
/// assert!(filter.matches("accent1"));
/// assert!(!filter.matches("icons/arrow"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    patterns: Vec<Pattern>,
}

impl NameFilter {
    /// Parses a filter expression.
    ///
    /// Entries are separated by `,`; whitespace around each entry is trimmed
    /// and empty entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPattern`] when no entry remains after
    /// trimming, or [`MatchError::InvalidPattern`] if an entry cannot be compiled.
    pub fn parse(expression: &str) -> Result<Self> {
        let patterns = expression
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(Pattern::new)
            .collect::<Result<Vec<_>>>()?;

        if patterns.is_empty() {
            return Err(MatchError::EmptyPattern(expression.to_string()));
        }
        Ok(Self { patterns })
    }

    /// Returns `true` if `name` matches at least one pattern.
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    /// The compiled patterns, in the order they were written.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

impl FromStr for NameFilter {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for NameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.patterns.iter().map(Pattern::as_str).collect();
        write!(f, "{}", parts.join(", "))
    }
}
