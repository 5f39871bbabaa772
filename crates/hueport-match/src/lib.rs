//! Hueport Match - wildcard name filters.
//!
//! Design documents routinely hold hundreds of named styles; exporters
//! usually want a subset of them. This crate provides the small filter
//! language used to pick that subset by name:
//!
//! - A filter is a comma-separated list of patterns
//! - `*` matches any run of characters (including none)
//! - `?` matches exactly one character
//! - Matching is case-sensitive and covers the whole name
//! - A name passes if ANY pattern matches
//!
//! # Quick Start
//!
//! ```rust
//! use hueport_match::NameFilter;
//!
//! let filter = NameFilter::parse("colors/background/*, colors/text/primary").unwrap();
//!
//! assert!(filter.matches("colors/background/surface"));
//! assert!(filter.matches("colors/text/primary"));
//! assert!(!filter.matches("colors/text/secondary"));
//! ```

mod error;
mod filter;
mod pattern;

pub use error::{MatchError, Result};
pub use filter::NameFilter;
pub use pattern::Pattern;
