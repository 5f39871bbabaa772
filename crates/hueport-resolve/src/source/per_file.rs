//! One document per appearance.

use std::thread::{self, Scope, ScopedJoinHandle};

use crate::client::{DocumentClient, NamePatternMatcher};
use crate::color::{AppearanceSet, Color};
use crate::config::FigmaFiles;
use crate::error::Result;

use super::fetch_colors;

/// Reads each appearance from its own document.
///
/// The optional documents are fetched on scoped threads while light is
/// fetched on the caller's thread; all four are joined before returning.
/// If several fail, the error reported is the first in the order light,
/// dark, light high-contrast, dark high-contrast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerAppearanceFile {
    light: String,
    dark: Option<String>,
    light_high_contrast: Option<String>,
    dark_high_contrast: Option<String>,
}

impl PerAppearanceFile {
    pub fn new(light: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: None,
            light_high_contrast: None,
            dark_high_contrast: None,
        }
    }

    pub fn with_dark(mut self, document_id: impl Into<String>) -> Self {
        self.dark = Some(document_id.into());
        self
    }

    pub fn with_light_high_contrast(mut self, document_id: impl Into<String>) -> Self {
        self.light_high_contrast = Some(document_id.into());
        self
    }

    pub fn with_dark_high_contrast(mut self, document_id: impl Into<String>) -> Self {
        self.dark_high_contrast = Some(document_id.into());
        self
    }

    pub fn light(&self) -> &str {
        &self.light
    }

    pub fn dark(&self) -> Option<&str> {
        self.dark.as_deref()
    }

    pub fn light_high_contrast(&self) -> Option<&str> {
        self.light_high_contrast.as_deref()
    }

    pub fn dark_high_contrast(&self) -> Option<&str> {
        self.dark_high_contrast.as_deref()
    }

    pub(crate) fn resolve<C>(
        &self,
        client: &C,
        matcher: Option<&dyn NamePatternMatcher>,
    ) -> Result<AppearanceSet>
    where
        C: DocumentClient + ?Sized,
    {
        let (light, dark, light_hc, dark_hc) = thread::scope(|scope| {
            let dark = spawn_optional(scope, client, self.dark(), matcher);
            let light_hc = spawn_optional(scope, client, self.light_high_contrast(), matcher);
            let dark_hc = spawn_optional(scope, client, self.dark_high_contrast(), matcher);
            let light = fetch_colors(client, &self.light, matcher);
            (light, join(dark), join(light_hc), join(dark_hc))
        });

        Ok(AppearanceSet {
            light: light?,
            dark: dark.transpose()?,
            light_high_contrast: light_hc.transpose()?,
            dark_high_contrast: dark_hc.transpose()?,
        })
    }
}

impl From<&FigmaFiles> for PerAppearanceFile {
    fn from(files: &FigmaFiles) -> Self {
        Self {
            light: files.light_file_id.clone(),
            dark: files.dark_file_id.clone(),
            light_high_contrast: files.light_high_contrast_file_id.clone(),
            dark_high_contrast: files.dark_high_contrast_file_id.clone(),
        }
    }
}

type Pipeline<'scope> = ScopedJoinHandle<'scope, Result<Vec<Color>>>;

fn spawn_optional<'scope, 'env, C>(
    scope: &'scope Scope<'scope, 'env>,
    client: &'env C,
    document_id: Option<&'env str>,
    matcher: Option<&'env dyn NamePatternMatcher>,
) -> Option<Pipeline<'scope>>
where
    C: DocumentClient + ?Sized,
{
    document_id.map(|id| scope.spawn(move || fetch_colors(client, id, matcher)))
}

fn join(handle: Option<Pipeline<'_>>) -> Option<Result<Vec<Color>>> {
    handle.map(|h| match h.join() {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    })
}
