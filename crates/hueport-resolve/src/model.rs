//! Records read from the design tool's document model.
//!
//! These types mirror the JSON returned by the design tool's REST API closely
//! enough to deserialize it directly:
//!
//! ```text
//! GET /files/:id/styles  -> {"meta": {"styles": [StyleRecord, ...]}}
//! GET /files/:id/nodes   -> {"nodes": {"<node id>": NodeRecord | null, ...}}
//! ```
//!
//! They are read-only inputs to resolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Nodes keyed by node identifier.
pub type NodeLookup = HashMap<String, NodeRecord>;

/// What a style describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StyleKind {
    /// Fill (color) style.
    Fill,
    /// Text style.
    Text,
    /// Effect style (shadows, blurs).
    Effect,
    /// Layout grid style.
    Grid,
    /// Any kind this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// A named, reusable style published in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRecord {
    /// Identifier of the node that carries the style's value.
    pub node_id: String,
    /// Style name as shown in the design tool, e.g. `colors/background/primary`.
    pub name: String,
    /// Free-text annotation written by the document author.
    #[serde(default)]
    pub description: String,
    #[serde(rename = "style_type")]
    pub kind: StyleKind,
}

impl StyleRecord {
    /// Creates a style with an empty description.
    pub fn new(node_id: impl Into<String>, name: impl Into<String>, kind: StyleKind) -> Self {
        Self {
            node_id: node_id.into(),
            name: name.into(),
            description: String::new(),
            kind,
        }
    }

    /// Shorthand for a fill style.
    pub fn fill(node_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(node_id, name, StyleKind::Fill)
    }

    /// Sets the description, returning `self` for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Paint type of a fill entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Emoji,
    #[serde(other)]
    Unknown,
}

/// RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

/// One fill entry of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    /// Present for solid paints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<PaintColor>,
    /// Layer opacity; when present it replaces the color's own alpha.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Paint {
    /// An opaque solid paint.
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Self::solid_rgba(r, g, b, 1.0)
    }

    /// A solid paint with an explicit color alpha.
    pub fn solid_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            kind: PaintKind::Solid,
            color: Some(PaintColor { r, g, b, a }),
            opacity: None,
        }
    }

    /// A paint of the given non-solid kind.
    pub fn other(kind: PaintKind) -> Self {
        Self {
            kind,
            color: None,
            opacity: None,
        }
    }

    /// Sets the paint opacity, returning `self` for chaining.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn is_solid(&self) -> bool {
        self.kind == PaintKind::Solid
    }
}

/// The document subtree of a node; only fills matter here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub fills: Vec<Paint>,
}

/// A node as returned by the nodes endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub document: NodeDocument,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>, fills: Vec<Paint>) -> Self {
        Self {
            document: NodeDocument {
                id: id.into(),
                fills,
            },
        }
    }

    /// The first fill entry, which is the one a style's value comes from.
    pub fn first_fill(&self) -> Option<&Paint> {
        self.document.fills.first()
    }
}

/// Body of the styles endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StylesResponse {
    pub meta: StylesMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StylesMeta {
    #[serde(default)]
    pub styles: Vec<StyleRecord>,
}

impl StylesResponse {
    pub fn into_styles(self) -> Vec<StyleRecord> {
        self.meta.styles
    }
}

/// Body of the nodes endpoint. Deleted nodes come back as `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct NodesResponse {
    #[serde(default)]
    pub nodes: HashMap<String, Option<NodeRecord>>,
}

impl NodesResponse {
    /// Converts to a lookup, dropping `null` entries.
    pub fn into_lookup(self) -> NodeLookup {
        self.nodes
            .into_iter()
            .filter_map(|(id, node)| node.map(|n| (id, n)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_response_deserializes() {
        let json = r#"{
            "status": 200,
            "meta": {
                "styles": [
                    {"key": "k1", "node_id": "1:2", "name": "colors/brand", "description": "ios", "style_type": "FILL"},
                    {"key": "k2", "node_id": "1:3", "name": "Heading", "style_type": "TEXT"},
                    {"key": "k3", "node_id": "1:4", "name": "Odd", "style_type": "SOMETHING_NEW"}
                ]
            }
        }"#;
        let styles = serde_json::from_str::<StylesResponse>(json)
            .unwrap()
            .into_styles();
        assert_eq!(styles.len(), 3);
        assert_eq!(styles[0].kind, StyleKind::Fill);
        assert_eq!(styles[0].description, "ios");
        assert_eq!(styles[1].kind, StyleKind::Text);
        assert_eq!(styles[1].description, "");
        assert_eq!(styles[2].kind, StyleKind::Unknown);
    }

    #[test]
    fn nodes_response_drops_null_entries() {
        let json = r#"{
            "nodes": {
                "1:2": {"document": {"id": "1:2", "fills": [
                    {"type": "SOLID", "color": {"r": 1, "g": 0.5, "b": 0, "a": 1}, "opacity": 0.4}
                ]}},
                "1:9": null
            }
        }"#;
        let lookup = serde_json::from_str::<NodesResponse>(json)
            .unwrap()
            .into_lookup();
        assert_eq!(lookup.len(), 1);
        let fill = lookup["1:2"].first_fill().unwrap();
        assert!(fill.is_solid());
        assert_eq!(fill.opacity, Some(0.4));
        assert_eq!(fill.color.unwrap().g, 0.5);
    }

    #[test]
    fn paint_kinds_deserialize() {
        let paint: Paint = serde_json::from_str(r#"{"type": "GRADIENT_LINEAR"}"#).unwrap();
        assert_eq!(paint.kind, PaintKind::GradientLinear);
        let paint: Paint = serde_json::from_str(r#"{"type": "VIDEO"}"#).unwrap();
        assert_eq!(paint.kind, PaintKind::Unknown);
    }

    #[test]
    fn missing_alpha_defaults_to_opaque() {
        let color: PaintColor = serde_json::from_str(r#"{"r": 0, "g": 0, "b": 0}"#).unwrap();
        assert_eq!(color.a, 1.0);
    }
}
