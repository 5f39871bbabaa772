//! Splitting one style list into appearance variants by name convention.
//!
//! In single-document mode each variant is recognized by a name prefix,
//! a name suffix, or both. A match yields the name with the affixes removed:
//!
//! ```text
//! prefix "dark_"       dark_brand          -> brand
//! suffix "_darkHC"     brand_darkHC        -> brand
//! both                 darkHC_brand_darkHC -> brand
//! neither              brand               -> brand (everything matches)
//! ```
//!
//! Stripping counts characters, not bytes, and clamps to an empty name when
//! the affixes overlap.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Built-in prefix of the light high-contrast variant.
pub const LIGHT_HIGH_CONTRAST_PREFIX: &str = "lightHC_";
/// Built-in suffix of the light high-contrast variant.
pub const LIGHT_HIGH_CONTRAST_SUFFIX: &str = "_lightHC";
/// Built-in prefix of the dark high-contrast variant.
pub const DARK_HIGH_CONTRAST_PREFIX: &str = "darkHC_";
/// Built-in suffix of the dark high-contrast variant.
pub const DARK_HIGH_CONTRAST_SUFFIX: &str = "_darkHC";

/// Returns `(original index, stripped name)` for every name that matches.
///
/// With both affixes a name must start with `prefix` and end with `suffix`;
/// with one, only that one is checked; with neither, every name matches.
pub fn select<'a, I>(names: I, prefix: Option<&str>, suffix: Option<&str>) -> Vec<(usize, String)>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .enumerate()
        .filter(|(_, name)| is_member(name, prefix, suffix))
        .map(|(index, name)| (index, strip(name, prefix, suffix)))
        .collect()
}

fn is_member(name: &str, prefix: Option<&str>, suffix: Option<&str>) -> bool {
    prefix.map_or(true, |p| name.starts_with(p)) && suffix.map_or(true, |s| name.ends_with(s))
}

/// Drops `len(prefix)` characters from the front and `len(suffix)` from the back.
fn strip(name: &str, prefix: Option<&str>, suffix: Option<&str>) -> String {
    let head = prefix.map_or(0, |p| p.chars().count());
    let tail = suffix.map_or(0, |s| s.chars().count());
    let total = name.chars().count();
    let keep = total.saturating_sub(head + tail);
    name.chars().skip(head).take(keep).collect()
}

/// Prefix/suffix pair identifying one variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAffixes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl VariantAffixes {
    /// Matches every name and strips nothing.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn new(prefix: Option<&str>, suffix: Option<&str>) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
            suffix: suffix.map(str::to_string),
        }
    }

    pub fn prefix(prefix: &str) -> Self {
        Self::new(Some(prefix), None)
    }

    pub fn suffix(suffix: &str) -> Self {
        Self::new(None, Some(suffix))
    }

    /// Built-in affixes for the light high-contrast variant.
    pub fn light_high_contrast() -> Self {
        Self::new(
            Some(LIGHT_HIGH_CONTRAST_PREFIX),
            Some(LIGHT_HIGH_CONTRAST_SUFFIX),
        )
    }

    /// Built-in affixes for the dark high-contrast variant.
    pub fn dark_high_contrast() -> Self {
        Self::new(
            Some(DARK_HIGH_CONTRAST_PREFIX),
            Some(DARK_HIGH_CONTRAST_SUFFIX),
        )
    }

    /// `true` when neither prefix nor suffix is set.
    pub fn is_unset(&self) -> bool {
        self.prefix.is_none() && self.suffix.is_none()
    }

    /// Returns `self`, or `fallback` if nothing is set.
    pub fn or(self, fallback: Self) -> Self {
        if self.is_unset() {
            fallback
        } else {
            self
        }
    }

    /// Selects the matching colors and renames them to their stripped names.
    pub fn apply(&self, colors: &[Color]) -> Vec<Color> {
        select(
            colors.iter().map(|c| c.name.as_str()),
            self.prefix.as_deref(),
            self.suffix.as_deref(),
        )
        .into_iter()
        .map(|(index, name)| colors[index].renamed(name))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn prefix_only() {
        let out = select(["light_bg", "dark_bg", "light_fg"], Some("light_"), None);
        assert_eq!(out, vec![(0, "bg".to_string()), (2, "fg".to_string())]);
    }

    #[test]
    fn suffix_only() {
        let out = select(["bg_dark", "bg", "fg_dark"], None, Some("_dark"));
        assert_eq!(out, vec![(0, "bg".to_string()), (2, "fg".to_string())]);
    }

    #[test]
    fn both_affixes_required() {
        let out = select(
            ["darkHC_bg_darkHC", "darkHC_bg", "bg_darkHC"],
            Some("darkHC_"),
            Some("_darkHC"),
        );
        assert_eq!(out, vec![(0, "bg".to_string())]);
    }

    #[test]
    fn neither_matches_everything_unchanged() {
        let out = select(["a", "b"], None, None);
        assert_eq!(out, vec![(0, "a".to_string()), (1, "b".to_string())]);
    }

    #[test]
    fn overlapping_affixes_clamp_to_empty() {
        let out = select(["ab"], Some("ab"), Some("b"));
        assert_eq!(out, vec![(0, String::new())]);
    }

    #[test]
    fn strip_counts_characters() {
        let out = select(["été_rouge"], Some("été_"), None);
        assert_eq!(out, vec![(0, "rouge".to_string())]);
    }

    #[test]
    fn apply_renames_without_touching_components() {
        let colors = vec![
            Color::new("dark_brand", 0.1, 0.2, 0.3, 0.4),
            Color::new("light_brand", 1.0, 1.0, 1.0, 1.0),
        ];
        let dark = VariantAffixes::prefix("dark_").apply(&colors);
        assert_eq!(dark, vec![Color::new("brand", 0.1, 0.2, 0.3, 0.4)]);
    }

    #[test]
    fn or_falls_back_only_when_unset() {
        let fallback = VariantAffixes::light_high_contrast();
        assert_eq!(VariantAffixes::any().or(fallback.clone()), fallback);
        assert_eq!(
            VariantAffixes::suffix("_hc").or(fallback),
            VariantAffixes::suffix("_hc")
        );
    }

    proptest! {
        #[test]
        fn stripping_recovers_core(
            prefix in "[a-zA-Z_]{0,6}",
            core in "[a-zA-Z0-9/ ]{0,12}",
            suffix in "[a-zA-Z_]{0,6}",
        ) {
            let name = format!("{prefix}{core}{suffix}");
            let out = select([name.as_str()], Some(prefix.as_str()), Some(suffix.as_str()));
            prop_assert_eq!(out, vec![(0, core)]);
        }

        #[test]
        fn disjoint_rules_give_disjoint_variants(
            cores in prop::collection::vec("[a-z]{1,8}", 0..10),
            is_dark in prop::collection::vec(any::<bool>(), 10),
        ) {
            let names: Vec<String> = cores
                .iter()
                .zip(&is_dark)
                .map(|(c, d)| if *d { format!("dark_{c}") } else { format!("light_{c}") })
                .collect();
            let light = select(names.iter().map(String::as_str), Some("light_"), None);
            let dark = select(names.iter().map(String::as_str), Some("dark_"), None);

            for (i, _) in &light {
                prop_assert!(!dark.iter().any(|(j, _)| j == i));
            }
            prop_assert!(light.len() + dark.len() <= names.len());
        }
    }
}
