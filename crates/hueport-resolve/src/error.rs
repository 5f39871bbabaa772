//! Error types for color resolution.
//!
//! [`TransportError`] belongs to document clients and passes through the
//! resolver untouched. [`ResolveError`] is what [`ColorResolver::load`] returns.
//! [`ConfigError`] covers reading the YAML configuration.
//!
//! [`ColorResolver::load`]: crate::ColorResolver::load

use std::path::PathBuf;

use thiserror::Error;

/// Failure raised by a [`DocumentClient`](crate::DocumentClient).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Reading a document resource failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document resource was not valid JSON for the expected shape.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The client has no document with this identifier.
    #[error("document '{0}' not found")]
    MissingDocument(String),

    /// Any other client-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Error returned by color resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The document client failed; propagated unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// No style in the document survived the usage policy and name filter.
    #[error("no usable color styles in document '{document_id}'")]
    NoUsableStyles { document_id: String },

    /// The free-text name filter could not be compiled.
    #[error("invalid name filter: {0}")]
    InvalidFilter(#[from] hueport_match::MatchError),
}

/// Error loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a valid configuration.
    #[error("failed to parse config{}: {source}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
