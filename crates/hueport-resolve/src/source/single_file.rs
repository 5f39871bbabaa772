//! One document for every appearance, split by naming convention.

use tracing::debug;

use crate::client::{DocumentClient, NamePatternMatcher};
use crate::color::AppearanceSet;
use crate::error::Result;
use crate::variant::VariantAffixes;

use super::fetch_colors;

/// Reads one document and partitions its colors by name affixes.
///
/// Every variant is present in the result. Variants whose affixes match
/// nothing come back as empty lists; they are not errors. Affixes that
/// overlap between variants put the same style in several of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleFileConvention {
    document_id: String,
    light: VariantAffixes,
    dark: VariantAffixes,
    light_high_contrast: VariantAffixes,
    dark_high_contrast: VariantAffixes,
}

impl SingleFileConvention {
    /// Creates the strategy. High-contrast affixes left unset fall back to
    /// `lightHC_`/`_lightHC` and `darkHC_`/`_darkHC`.
    pub fn new(
        document_id: impl Into<String>,
        light: VariantAffixes,
        dark: VariantAffixes,
        light_high_contrast: VariantAffixes,
        dark_high_contrast: VariantAffixes,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            light,
            dark,
            light_high_contrast: light_high_contrast.or(VariantAffixes::light_high_contrast()),
            dark_high_contrast: dark_high_contrast.or(VariantAffixes::dark_high_contrast()),
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn light(&self) -> &VariantAffixes {
        &self.light
    }

    pub fn dark(&self) -> &VariantAffixes {
        &self.dark
    }

    pub fn light_high_contrast(&self) -> &VariantAffixes {
        &self.light_high_contrast
    }

    pub fn dark_high_contrast(&self) -> &VariantAffixes {
        &self.dark_high_contrast
    }

    pub(crate) fn resolve<C>(
        &self,
        client: &C,
        matcher: Option<&dyn NamePatternMatcher>,
    ) -> Result<AppearanceSet>
    where
        C: DocumentClient + ?Sized,
    {
        let colors = fetch_colors(client, &self.document_id, matcher)?;
        let set = AppearanceSet {
            light: self.light.apply(&colors),
            dark: Some(self.dark.apply(&colors)),
            light_high_contrast: Some(self.light_high_contrast.apply(&colors)),
            dark_high_contrast: Some(self.dark_high_contrast.apply(&colors)),
        };
        debug!(
            document_id = %self.document_id,
            total = colors.len(),
            light = set.light.len(),
            "partitioned single-file colors"
        );
        Ok(set)
    }
}
