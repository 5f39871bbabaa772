//! Which styles are eligible for export.
//!
//! Only fill styles are colors. Authors opt a fill style out by writing
//! `none` anywhere in its description; an empty description marks a plain
//! shared color.

use crate::model::{StyleKind, StyleRecord};

/// Description token that excludes a style from export. Case-sensitive.
pub const OPT_OUT_TOKEN: &str = "none";

/// Returns `true` if the style should be exported as a color.
pub fn is_usable(style: &StyleRecord) -> bool {
    style.kind == StyleKind::Fill
        && (style.description.is_empty() || !style.description.contains(OPT_OUT_TOKEN))
}

/// Keeps only the usable styles, preserving order.
pub fn usable_styles(mut styles: Vec<StyleRecord>) -> Vec<StyleRecord> {
    styles.retain(is_usable);
    styles
}
