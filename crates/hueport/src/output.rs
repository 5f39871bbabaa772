//! Rendering an [`AppearanceSet`] for stdout.

use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use clap::ValueEnum;
use hueport_resolve::AppearanceSet;

/// Output format for the `colors` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON; absent variants are `null`.
    #[default]
    Json,
    /// One tab-separated line per color.
    Text,
}

pub fn render(set: &AppearanceSet, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let mut out =
                serde_json::to_string_pretty(set).context("failed to serialize colors")?;
            out.push('\n');
            Ok(out)
        }
        Format::Text => render_text(set).context("failed to format colors"),
    }
}

/// `<variant>\t<name>\t<hex>[\t<platform>]`
fn render_text(set: &AppearanceSet) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (appearance, colors) in set.variants() {
        for color in colors {
            write!(out, "{}\t{}\t{}", appearance, color.name, color.to_hex())?;
            if let Some(platform) = color.platform {
                write!(out, "\t{}", platform)?;
            }
            out.push('\n');
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueport_resolve::{Color, Platform};

    fn set() -> AppearanceSet {
        AppearanceSet {
            light: vec![Color::new("brand", 1.0, 0.0, 0.0, 1.0)],
            dark: Some(vec![
                Color::new("brand", 0.0, 0.0, 0.0, 0.5).with_platform(Some(Platform::Android))
            ]),
            light_high_contrast: None,
            dark_high_contrast: Some(vec![]),
        }
    }

    #[test]
    fn text_lists_present_variants() {
        assert_eq!(
            render(&set(), Format::Text).unwrap(),
            "light\tbrand\t#FF0000\ndark\tbrand\t#00000080\tandroid\n"
        );
    }

    #[test]
    fn text_of_empty_set_is_empty() {
        assert_eq!(render_text(&AppearanceSet::default()).unwrap(), "");
    }

    #[test]
    fn json_keeps_absent_variants_as_null() {
        let out = render(&set(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["light_high_contrast"].is_null());
        assert_eq!(value["dark_high_contrast"], serde_json::json!([]));
        assert_eq!(value["dark"][0]["platform"], "android");
        assert_eq!(value["light"][0]["red"], 1.0);
    }
}
