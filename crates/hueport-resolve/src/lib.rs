//! # Hueport Resolve - appearance-aware color tokens
//!
//! `hueport-resolve` turns the color styles of a design document into a
//! normalized [`AppearanceSet`]: light colors, plus dark, light
//! high-contrast and dark high-contrast variants when a design system
//! provides them. Downstream code generators consume the result.
//!
//! ## Pipeline
//!
//! ```text
//! ColorResolver::load
//!   -> SourceStrategy            (per-appearance documents | single document)
//!     -> DocumentClient          fetch styles
//!     -> policy::is_usable       fill styles not marked "none"
//!     -> NamePatternMatcher      optional name filter
//!     -> DocumentClient          fetch referenced nodes
//!     -> correlate               first solid fill -> Color
//!     -> variant::select         single document only: split by affixes
//! ```
//!
//! Network access, retries and authentication belong to the
//! [`DocumentClient`] implementation. This crate ships two offline ones:
//! [`MemoryClient`] and [`SnapshotClient`].
//!
//! ## Quick Start
//!
//! ```rust
//! use hueport_resolve::{
//!     ColorResolver, Config, MemoryClient, NodeRecord, Paint, StyleRecord,
//! };
//!
//! let config = Config::from_yaml(r#"
//! figma:
//!   light_file_id: ALL
//! colors:
//!   use_single_file: true
//!   light: { prefix: "light_" }
//!   dark: { prefix: "dark_" }
//! "#).unwrap();
//!
//! let client = MemoryClient::new()
//!     .with_style("ALL", StyleRecord::fill("1:1", "light_brand"))
//!     .with_style("ALL", StyleRecord::fill("1:2", "dark_brand"))
//!     .with_node("ALL", NodeRecord::new("1:1", vec![Paint::solid(1.0, 1.0, 1.0)]))
//!     .with_node("ALL", NodeRecord::new("1:2", vec![Paint::solid(0.0, 0.0, 0.0)]));
//!
//! let set = ColorResolver::from_config(client, &config).load(None).unwrap();
//!
//! assert_eq!(set.light[0].name, "brand");
//! assert_eq!(set.dark.as_ref().unwrap()[0].name, "brand");
//! assert_eq!(set.light_high_contrast, Some(vec![]));
//! ```
//!
//! ## Dropped Styles
//!
//! A style whose node is missing, or whose first fill is a gradient or an
//! image, produces no color and no error. Such drops are reported as
//! `tracing` debug events.

pub mod client;
pub mod color;
pub mod config;
pub mod correlate;
mod error;
pub mod model;
pub mod policy;
mod resolver;
pub mod snapshot;
pub mod source;
pub mod variant;

pub use client::{DocumentClient, MemoryClient, NamePatternMatcher};
pub use color::{Appearance, AppearanceSet, Color, Platform};
pub use config::{ColorsConfig, Config, FigmaFiles};
pub use error::{ConfigError, ResolveError, Result, TransportError};
pub use model::{
    NodeDocument, NodeLookup, NodeRecord, Paint, PaintColor, PaintKind, StyleKind, StyleRecord,
};
pub use resolver::ColorResolver;
pub use snapshot::SnapshotClient;
pub use source::{PerAppearanceFile, SingleFileConvention, SourceStrategy};
pub use variant::VariantAffixes;

// Re-exported so callers can build filters without a direct dependency.
pub use hueport_match::{MatchError, NameFilter};
