//! The entry point: [`ColorResolver`].

use hueport_match::NameFilter;
use tracing::{debug, info};

use crate::client::{DocumentClient, NamePatternMatcher};
use crate::color::AppearanceSet;
use crate::config::Config;
use crate::error::Result;
use crate::source::SourceStrategy;

/// Resolves color styles into an [`AppearanceSet`].
///
/// Holds a document client and the strategy chosen from configuration.
/// Each call to [`load`](Self::load) is independent.
///
/// # Example
///
/// ```rust
/// use hueport_resolve::{
///     Color, ColorResolver, MemoryClient, NodeRecord, Paint, PerAppearanceFile,
///     SourceStrategy, StyleRecord,
/// };
///
/// let client = MemoryClient::new()
///     .with_style("L", StyleRecord::fill("1:1", "brand"))
///     .with_node("L", NodeRecord::new("1:1", vec![Paint::solid(1.0, 0.0, 0.0)]));
///
/// let resolver = ColorResolver::new(
///     client,
///     SourceStrategy::PerAppearanceFile(PerAppearanceFile::new("L")),
/// );
/// let set = resolver.load(None).unwrap();
///
/// assert_eq!(set.light, vec![Color::new("brand", 1.0, 0.0, 0.0, 1.0)]);
/// assert!(set.dark.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ColorResolver<C> {
    client: C,
    strategy: SourceStrategy,
    default_filter: Option<String>,
}

impl<C: DocumentClient> ColorResolver<C> {
    pub fn new(client: C, strategy: SourceStrategy) -> Self {
        Self {
            client,
            strategy,
            default_filter: None,
        }
    }

    /// Builds a resolver from configuration, including its default filter.
    pub fn from_config(client: C, config: &Config) -> Self {
        Self {
            client,
            strategy: SourceStrategy::from_config(config),
            default_filter: config.default_filter().map(str::to_string),
        }
    }

    /// Sets the filter used when [`load`](Self::load) is given none.
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = Some(filter.into());
        self
    }

    pub fn strategy(&self) -> &SourceStrategy {
        &self.strategy
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Resolves colors, keeping only styles whose name passes `filter`.
    ///
    /// `filter` uses the [`NameFilter`] syntax. When `None`, the default
    /// filter applies; when that is also unset, every name passes. A blank
    /// filter (empty or whitespace) disables filtering, including the default.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidFilter`](crate::ResolveError::InvalidFilter) if the filter does not parse
    /// - [`ResolveError::Transport`](crate::ResolveError::Transport) if the client fails
    /// - [`ResolveError::NoUsableStyles`](crate::ResolveError::NoUsableStyles) if a document has
    ///   nothing left to export
    pub fn load(&self, filter: Option<&str>) -> Result<AppearanceSet> {
        let filter = filter
            .or(self.default_filter.as_deref())
            .filter(|f| !f.trim().is_empty())
            .map(NameFilter::parse)
            .transpose()?;
        self.load_with(filter.as_ref().map(|f| f as &dyn NamePatternMatcher))
    }

    /// Like [`load`](Self::load), with a caller-supplied matcher.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), minus filter parsing.
    pub fn load_with(&self, matcher: Option<&dyn NamePatternMatcher>) -> Result<AppearanceSet> {
        info!(
            strategy = self.strategy.name(),
            filtered = matcher.is_some(),
            "loading colors"
        );
        let set = self.strategy.resolve(&self.client, matcher)?;
        for (appearance, colors) in set.variants() {
            debug!(%appearance, count = colors.len(), "resolved variant");
        }
        Ok(set)
    }
}
