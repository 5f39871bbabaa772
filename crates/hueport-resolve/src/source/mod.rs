//! Strategies for obtaining the four appearance variants.
//!
//! Two ways of laying out a design system are supported:
//!
//! - [`PerAppearanceFile`]: one document per appearance. Light is required;
//!   dark and the high-contrast documents are optional.
//! - [`SingleFileConvention`]: one document holding every variant, told
//!   apart by name prefixes and suffixes.
//!
//! Both share the same per-document pipeline: fetch styles, keep the usable
//! ones, apply the optional name filter, fail if nothing is left, fetch the
//! referenced nodes, then correlate.

mod per_file;
mod single_file;

pub use per_file::PerAppearanceFile;
pub use single_file::SingleFileConvention;

use tracing::debug;

use crate::client::{DocumentClient, NamePatternMatcher};
use crate::color::{AppearanceSet, Color};
use crate::config::Config;
use crate::correlate::correlate;
use crate::error::{ResolveError, Result};
use crate::policy::usable_styles;

/// How the appearance variants are sourced. Chosen once per load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStrategy {
    PerAppearanceFile(PerAppearanceFile),
    SingleFileConvention(SingleFileConvention),
}

impl SourceStrategy {
    /// Picks the strategy the configuration asks for.
    pub fn from_config(config: &Config) -> Self {
        if config.use_single_file() {
            let colors = config.colors.clone().unwrap_or_default();
            SourceStrategy::SingleFileConvention(SingleFileConvention::new(
                config.figma.light_file_id.clone(),
                colors.light,
                colors.dark,
                colors.light_high_contrast,
                colors.dark_high_contrast,
            ))
        } else {
            SourceStrategy::PerAppearanceFile(PerAppearanceFile::from(&config.figma))
        }
    }

    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            SourceStrategy::PerAppearanceFile(_) => "per-appearance-file",
            SourceStrategy::SingleFileConvention(_) => "single-file",
        }
    }

    /// Runs the strategy against `client`.
    ///
    /// # Errors
    ///
    /// Propagates client failures unchanged and returns
    /// [`ResolveError::NoUsableStyles`] if any fetched document has no
    /// usable style after filtering.
    pub fn resolve<C>(
        &self,
        client: &C,
        matcher: Option<&dyn NamePatternMatcher>,
    ) -> Result<AppearanceSet>
    where
        C: DocumentClient + ?Sized,
    {
        match self {
            SourceStrategy::PerAppearanceFile(files) => files.resolve(client, matcher),
            SourceStrategy::SingleFileConvention(single) => single.resolve(client, matcher),
        }
    }
}

/// Fetches, filters and correlates the colors of one document.
pub(crate) fn fetch_colors<C>(
    client: &C,
    document_id: &str,
    matcher: Option<&dyn NamePatternMatcher>,
) -> Result<Vec<Color>>
where
    C: DocumentClient + ?Sized,
{
    let mut styles = usable_styles(client.fetch_styles(document_id)?);
    if let Some(matcher) = matcher {
        styles.retain(|style| matcher.matches(&style.name));
    }
    if styles.is_empty() {
        return Err(ResolveError::NoUsableStyles {
            document_id: document_id.to_string(),
        });
    }

    let ids: Vec<String> = styles.iter().map(|s| s.node_id.clone()).collect();
    let nodes = client.fetch_nodes(document_id, &ids)?;
    let colors = correlate(&styles, &nodes);
    debug!(
        document_id,
        styles = styles.len(),
        colors = colors.len(),
        "resolved document colors"
    );
    Ok(colors)
}
