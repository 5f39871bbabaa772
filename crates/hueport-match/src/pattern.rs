//! Single wildcard patterns.
//!
//! A [`Pattern`] is compiled once into an anchored regular expression. Only two
//! characters are special:
//!
//! - `*` matches any run of characters, including none
//! - `?` matches exactly one character
//!
//! Everything else, including regex metacharacters like `.` or `(`, is literal.

use regex::Regex;

use crate::error::Result;

/// A compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles a wildcard pattern.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidPattern`](crate::MatchError::InvalidPattern)
    /// if the translated expression exceeds the regex engine's limits.
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(&translate(source))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Returns `true` if the whole `name` matches this pattern.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

/// Translates wildcard syntax into an anchored regex. `(?s)` lets `*` and `?`
/// cross newlines, which style names never contain but user input might.
fn translate(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 8);
    out.push_str("(?s)^");
    let mut literal = String::new();
    for c in source.chars() {
        match c {
            '*' | '?' => {
                out.push_str(&regex::escape(&literal));
                literal.clear();
                out.push_str(if c == '*' { ".*" } else { "." });
            }
            _ => literal.push(c),
        }
    }
    out.push_str(&regex::escape(&literal));
    out.push('$');
    out
}
