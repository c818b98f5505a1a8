//! Writes generated content pages to the site tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::assets::write_css_assets;
use crate::content::{ContentForm, ContentKind};
use crate::entry::ConfigEntry;
use crate::pages;
use crate::site::{SiteInfo, write_page as write_html};

/// Page written by [`write_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPage {
    /// Location of the HTML file
    pub path: PathBuf,
    /// Entry to add to the site configuration
    pub entry: ConfigEntry,
}

impl WrittenPage {
    /// Tells the author where the entry has to be registered.
    pub fn registration_hint(&self, kind: ContentKind) -> String {
        match &self.entry {
            ConfigEntry::Profile(_) => format!(
                "Add this entry to the profiles array of {}:",
                self.entry.config_file()
            ),
            ConfigEntry::Content(_) => format!(
                "Add this entry to the content.{} array of {}:",
                kind.section(),
                self.entry.config_file()
            ),
        }
    }
}

/// Validates a form and writes its page below the site root
///
/// The page lands at the kind's output path (for example
/// `problems/problem-two-sum.html` or `profiles/ada/index.html`). The
/// shared stylesheet is written alongside so the page renders on its own.
///
/// # Arguments
///
/// * `kind`: Kind of page to generate
/// * `form`: Form values, already trimmed
/// * `site`: Site name and footer text
/// * `date`: Publication date, recorded in the entry
/// * `output`: Site root directory
///
/// # Returns
///
/// Written path and the configuration entry for the page
///
/// # Errors
///
/// Returns error if validation fails or the page cannot be written.
pub fn write_page(
    kind: ContentKind,
    form: &ContentForm,
    site: &SiteInfo,
    date: NaiveDate,
    output: &Path,
) -> Result<WrittenPage> {
    form.validate(kind)?;

    let path = output.join(kind.output_path(form));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let html = pages::generate(kind, site, form, date);
    write_html(&path, html.into_string())?;
    write_css_assets(output)?;

    debug!(kind = %kind, path = %path.display(), "wrote content page");

    Ok(WrittenPage {
        path,
        entry: ConfigEntry::from_form(kind, form, date),
    })
}
