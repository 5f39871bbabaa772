//! Configuration for color resolution.
//!
//! Loaded from YAML:
//!
//! ```yaml
//! figma:
//!   light_file_id: "L"
//!   dark_file_id: "D"
//! colors:
//!   use_single_file: false
//!   filter: "colors/*"
//! ```
//!
//! In single-file mode only `light_file_id` is read, and the variants are
//! told apart by the affixes under `colors`:
//!
//! ```yaml
//! figma:
//!   light_file_id: "ALL"
//! colors:
//!   use_single_file: true
//!   light: { prefix: "light_" }
//!   dark: { prefix: "dark_" }
//!   light_high_contrast: { suffix: "_lhc" }   # defaults: lightHC_ / _lightHC
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::variant::VariantAffixes;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub figma: FigmaFiles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorsConfig>,
}

/// Document identifiers, one per appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigmaFiles {
    pub light_file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_file_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_high_contrast_file_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_high_contrast_file_id: Option<String>,
}

impl FigmaFiles {
    pub fn new(light_file_id: impl Into<String>) -> Self {
        Self {
            light_file_id: light_file_id.into(),
            dark_file_id: None,
            light_high_contrast_file_id: None,
            dark_high_contrast_file_id: None,
        }
    }
}

/// Color export options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorsConfig {
    /// Read every variant from `light_file_id`, split by name affixes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_single_file: Option<bool>,
    #[serde(default)]
    pub light: VariantAffixes,
    #[serde(default)]
    pub dark: VariantAffixes,
    #[serde(default)]
    pub light_high_contrast: VariantAffixes,
    #[serde(default)]
    pub dark_high_contrast: VariantAffixes,
    /// Default name filter, used when the caller passes none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Config {
    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the YAML is malformed or
    /// `figma.light_file_id` is missing.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse { path: None, source })
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// `true` when `colors.use_single_file` is present and set.
    pub fn use_single_file(&self) -> bool {
        self.colors
            .as_ref()
            .and_then(|c| c.use_single_file)
            .unwrap_or(false)
    }

    pub fn default_filter(&self) -> Option<&str> {
        self.colors.as_ref().and_then(|c| c.filter.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn minimal_config() {
        let config = Config::from_yaml("figma:\n  light_file_id: L\n").unwrap();
        assert_eq!(config.figma, FigmaFiles::new("L"));
        assert!(config.colors.is_none());
        assert!(!config.use_single_file());
        assert_eq!(config.default_filter(), None);
    }

    #[test]
    fn full_config() {
        let config = Config::from_yaml(
            r#"
figma:
  light_file_id: L
  dark_file_id: D
  light_high_contrast_file_id: LHC
  dark_high_contrast_file_id: DHC
colors:
  use_single_file: true
  light: { prefix: "light_" }
  dark: { prefix: "dark_", suffix: "_d" }
  filter: "colors/*"
"#,
        )
        .unwrap();
        assert_eq!(config.figma.dark_file_id.as_deref(), Some("D"));
        assert!(config.use_single_file());
        assert_eq!(config.default_filter(), Some("colors/*"));
        let colors = config.colors.unwrap();
        assert_eq!(colors.light, VariantAffixes::prefix("light_"));
        assert_eq!(colors.dark, VariantAffixes::new(Some("dark_"), Some("_d")));
        assert!(colors.light_high_contrast.is_unset());
    }

    #[test]
    fn single_file_flag_false() {
        let config =
            Config::from_yaml("figma: { light_file_id: L }\ncolors: { use_single_file: false }")
                .unwrap();
        assert!(!config.use_single_file());
    }

    #[test]
    fn missing_light_file_is_parse_error() {
        let err = Config::from_yaml("figma: { dark_file_id: D }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
        assert!(err.to_string().contains("light_file_id"));
    }

    #[test]
    fn from_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "figma: [").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path.as_deref(), Some(file.path())),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_file_missing_is_read_error() {
        let err = Config::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
