//! Document client backed by exported API responses on disk.
//!
//! Each document is a directory named after its identifier:
//!
//! ```text
//! <root>/
//!   <document id>/
//!     styles.json   # body of the styles endpoint
//!     nodes.json    # body of the nodes endpoint
//! ```
//!
//! This lets resolution run offline against a frozen copy of a design file,
//! which is how the command-line tool and the integration tests use it.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::client::{select_nodes, DocumentClient};
use crate::error::TransportError;
use crate::model::{NodeLookup, NodesResponse, StyleRecord, StylesResponse};

/// File holding the styles response inside a document directory.
pub const STYLES_FILE: &str = "styles.json";
/// File holding the nodes response inside a document directory.
pub const NODES_FILE: &str = "nodes.json";

/// Reads documents from a snapshot directory.
#[derive(Debug, Clone)]
pub struct SnapshotClient {
    root: PathBuf,
}

impl SnapshotClient {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_dir(&self, document_id: &str) -> Result<PathBuf, TransportError> {
        let dir = self.root.join(document_id);
        let path_like = matches!(document_id, "" | "." | "..") || document_id.contains(['/', '\\']);
        if path_like || !dir.is_dir() {
            return Err(TransportError::MissingDocument(document_id.to_string()));
        }
        Ok(dir)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, TransportError> {
    let content = std::fs::read_to_string(path).map_err(|source| TransportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| TransportError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

impl DocumentClient for SnapshotClient {
    fn fetch_styles(&self, document_id: &str) -> Result<Vec<StyleRecord>, TransportError> {
        let path = self.document_dir(document_id)?.join(STYLES_FILE);
        Ok(read_json::<StylesResponse>(&path)?.into_styles())
    }

    fn fetch_nodes(
        &self,
        document_id: &str,
        ids: &[String],
    ) -> Result<NodeLookup, TransportError> {
        let path = self.document_dir(document_id)?.join(NODES_FILE);
        let nodes = read_json::<NodesResponse>(&path)?.into_lookup();
        Ok(select_nodes(&nodes, ids))
    }
}
