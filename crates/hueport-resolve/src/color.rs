//! Resolved colors and the four-way appearance bundle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target platform a style is reserved for, taken from its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Parses a platform tag from a style description.
    ///
    /// The whole (trimmed) description must be `ios` or `android`, ignoring
    /// ASCII case. Anything else, including an empty description, is `None`.
    pub fn from_description(description: &str) -> Option<Self> {
        let token = description.trim();
        if token.eq_ignore_ascii_case("ios") {
            Some(Platform::Ios)
        } else if token.eq_ignore_ascii_case("android") {
            Some(Platform::Android)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved color token with normalized components in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub fn new(name: impl Into<String>, red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            name: name.into(),
            platform: None,
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Sets the platform, returning `self` for chaining.
    pub fn with_platform(mut self, platform: Option<Platform>) -> Self {
        self.platform = platform;
        self
    }

    /// Returns a copy carrying a different name. Components are untouched.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = (
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            channel(self.alpha),
        );
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// One of the four appearance variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    Light,
    Dark,
    LightHighContrast,
    DarkHighContrast,
}

impl Appearance {
    /// All variants in resolution order.
    pub const ALL: [Appearance; 4] = [
        Appearance::Light,
        Appearance::Dark,
        Appearance::LightHighContrast,
        Appearance::DarkHighContrast,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
            Appearance::LightHighContrast => "light_high_contrast",
            Appearance::DarkHighContrast => "dark_high_contrast",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of resolution: light colors plus any configured variants.
///
/// `None` means the variant was not configured; `Some(vec![])` means it was
/// configured and nothing matched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppearanceSet {
    pub light: Vec<Color>,
    pub dark: Option<Vec<Color>>,
    pub light_high_contrast: Option<Vec<Color>>,
    pub dark_high_contrast: Option<Vec<Color>>,
}

impl AppearanceSet {
    /// Returns the colors of one variant, if present.
    pub fn get(&self, appearance: Appearance) -> Option<&[Color]> {
        match appearance {
            Appearance::Light => Some(&self.light),
            Appearance::Dark => self.dark.as_deref(),
            Appearance::LightHighContrast => self.light_high_contrast.as_deref(),
            Appearance::DarkHighContrast => self.dark_high_contrast.as_deref(),
        }
    }

    /// Iterates the present variants in resolution order.
    pub fn variants(&self) -> impl Iterator<Item = (Appearance, &[Color])> + '_ {
        Appearance::ALL
            .into_iter()
            .filter_map(move |appearance| self.get(appearance).map(|c| (appearance, c)))
    }
}
