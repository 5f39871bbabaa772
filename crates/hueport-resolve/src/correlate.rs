//! Joining styles with the nodes that hold their values.

use tracing::debug;

use crate::color::{Color, Platform};
use crate::model::{NodeLookup, StyleRecord};

/// Produces one [`Color`] per style whose node has a solid first fill.
///
/// Output order follows `styles`. Styles whose node is missing, whose first
/// fill is not solid, or whose solid fill carries no color are skipped:
/// documents routinely reference stale nodes, so these are not errors.
///
/// Alpha is the fill's `opacity` when present, otherwise the color's own
/// alpha. The two are never multiplied.
pub fn correlate(styles: &[StyleRecord], nodes: &NodeLookup) -> Vec<Color> {
    styles
        .iter()
        .filter_map(|style| resolve_style(style, nodes))
        .collect()
}

fn resolve_style(style: &StyleRecord, nodes: &NodeLookup) -> Option<Color> {
    let Some(node) = nodes.get(&style.node_id) else {
        debug!(style = %style.name, node_id = %style.node_id, "dropping style: node not found");
        return None;
    };

    let fill = match node.first_fill() {
        Some(fill) if fill.is_solid() => fill,
        other => {
            debug!(
                style = %style.name,
                node_id = %style.node_id,
                paint = ?other.map(|f| f.kind),
                "dropping style: first fill is not solid"
            );
            return None;
        }
    };

    let Some(color) = fill.color else {
        debug!(style = %style.name, node_id = %style.node_id, "dropping style: solid fill without color");
        return None;
    };

    let alpha = fill.opacity.unwrap_or(color.a);
    Some(
        Color::new(style.name.clone(), color.r, color.g, color.b, alpha)
            .with_platform(Platform::from_description(&style.description)),
    )
}
