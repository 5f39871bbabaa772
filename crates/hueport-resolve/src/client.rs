//! Collaborator interfaces and an in-memory document client.
//!
//! Resolution never talks to the network itself. It asks a
//! [`DocumentClient`] for styles and nodes, and a [`NamePatternMatcher`]
//! whether a style name passes the user's filter. Both are narrow enough to
//! fake in tests; [`MemoryClient`] is the fake this crate ships.

use std::collections::HashMap;

use hueport_match::NameFilter;

use crate::error::TransportError;
use crate::model::{NodeLookup, NodeRecord, StyleRecord};

/// Source of styles and nodes for a document.
///
/// Implementations own timeouts, retries and authentication. Calls are
/// blocking and may be issued from several threads at once.
pub trait DocumentClient: Sync {
    /// Returns every style published in the document.
    fn fetch_styles(&self, document_id: &str) -> Result<Vec<StyleRecord>, TransportError>;

    /// Returns the nodes with the given identifiers. Unknown ids are absent
    /// from the result rather than an error.
    fn fetch_nodes(&self, document_id: &str, ids: &[String])
        -> Result<NodeLookup, TransportError>;
}

impl<T: DocumentClient + ?Sized> DocumentClient for &T {
    fn fetch_styles(&self, document_id: &str) -> Result<Vec<StyleRecord>, TransportError> {
        (**self).fetch_styles(document_id)
    }

    fn fetch_nodes(
        &self,
        document_id: &str,
        ids: &[String],
    ) -> Result<NodeLookup, TransportError> {
        (**self).fetch_nodes(document_id, ids)
    }
}

impl<T: DocumentClient + ?Sized> DocumentClient for Box<T> {
    fn fetch_styles(&self, document_id: &str) -> Result<Vec<StyleRecord>, TransportError> {
        (**self).fetch_styles(document_id)
    }

    fn fetch_nodes(
        &self,
        document_id: &str,
        ids: &[String],
    ) -> Result<NodeLookup, TransportError> {
        (**self).fetch_nodes(document_id, ids)
    }
}

/// Decides whether a style name passes a free-text filter.
pub trait NamePatternMatcher: Sync {
    fn matches(&self, name: &str) -> bool;
}

impl NamePatternMatcher for NameFilter {
    fn matches(&self, name: &str) -> bool {
        NameFilter::matches(self, name)
    }
}

impl<F> NamePatternMatcher for F
where
    F: Fn(&str) -> bool + Sync,
{
    fn matches(&self, name: &str) -> bool {
        self(name)
    }
}

#[derive(Debug, Clone, Default)]
struct MemoryDocument {
    styles: Vec<StyleRecord>,
    nodes: NodeLookup,
}

/// A [`DocumentClient`] over documents held in memory.
///
/// # Example
///
/// ```rust
/// use hueport_resolve::{DocumentClient, MemoryClient, NodeRecord, Paint, StyleRecord};
///
/// let client = MemoryClient::new()
///     .with_style("L", StyleRecord::fill("1:1", "brand"))
///     .with_node("L", NodeRecord::new("1:1", vec![Paint::solid(1.0, 0.0, 0.0)]));
///
/// let styles = client.fetch_styles("L").unwrap();
/// assert_eq!(styles[0].name, "brand");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryClient {
    documents: HashMap<String, MemoryDocument>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty document, so fetches succeed with no styles.
    pub fn with_document(mut self, document_id: &str) -> Self {
        self.documents.entry(document_id.to_string()).or_default();
        self
    }

    /// Appends a style to a document, creating the document if needed.
    pub fn with_style(mut self, document_id: &str, style: StyleRecord) -> Self {
        self.documents
            .entry(document_id.to_string())
            .or_default()
            .styles
            .push(style);
        self
    }

    /// Adds a node to a document, keyed by its `document.id`.
    pub fn with_node(mut self, document_id: &str, node: NodeRecord) -> Self {
        self.documents
            .entry(document_id.to_string())
            .or_default()
            .nodes
            .insert(node.document.id.clone(), node);
        self
    }

    fn document(&self, document_id: &str) -> Result<&MemoryDocument, TransportError> {
        self.documents
            .get(document_id)
            .ok_or_else(|| TransportError::MissingDocument(document_id.to_string()))
    }
}

impl DocumentClient for MemoryClient {
    fn fetch_styles(&self, document_id: &str) -> Result<Vec<StyleRecord>, TransportError> {
        Ok(self.document(document_id)?.styles.clone())
    }

    fn fetch_nodes(
        &self,
        document_id: &str,
        ids: &[String],
    ) -> Result<NodeLookup, TransportError> {
        let document = self.document(document_id)?;
        Ok(select_nodes(&document.nodes, ids))
    }
}

/// Copies the requested nodes out of `nodes`, skipping unknown ids.
pub(crate) fn select_nodes(nodes: &NodeLookup, ids: &[String]) -> NodeLookup {
    ids.iter()
        .filter_map(|id| nodes.get(id).map(|n| (id.clone(), n.clone())))
        .collect()
}
