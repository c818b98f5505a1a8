//! Site-wide settings and the listing site builder.

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::assets::write_css_assets;
use crate::content::ContentKind;
use crate::entry::SiteIndex;
use crate::pages;

/// Default site name.
pub const DEFAULT_SITE_NAME: &str = "CodeProb";

/// Default footer text.
pub const DEFAULT_FOOTER: &str = "A static, community-driven platform hosted on GitHub Pages.";

/// Values shared by every generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    /// Site name shown in titles and the header
    pub name: String,
    /// Copyright year in the footer
    pub year: i32,
    /// Footer text after the copyright notice
    pub footer: String,
}

impl SiteInfo {
    /// Creates site settings with the default footer text.
    pub fn new(name: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            year,
            footer: DEFAULT_FOOTER.to_string(),
        }
    }
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_NAME, Local::now().year())
    }
}

/// Result of a site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    /// Written HTML pages, homepage first
    pub pages: Vec<PathBuf>,
    /// Number of listed entries across all categories
    pub entries: usize,
    /// Number of configured entries left out because their page is missing
    pub skipped: usize,
}

/// Builds the homepage and the category listing pages
///
/// Writes `index.html`, `{section}/index.html` for every listed category
/// and the bundled stylesheet below `output`. Only entries whose page exists
/// at `{section}/{filename}` are listed; the rest are logged and skipped.
/// Existing files are
/// overwritten; content pages already in the section directories are left
/// untouched.
///
/// # Arguments
///
/// * `index`: Published content from `contributor-config.json`
/// * `site`: Site name and footer text
/// * `output`: Site root directory
///
/// # Returns
///
/// Paths of the written pages, the number of listed entries and the
/// number of skipped entries
///
/// # Errors
///
/// Returns error if a directory cannot be created or a file cannot be
/// written.
pub fn build_site(index: &SiteIndex, site: &SiteInfo, output: &Path) -> Result<SiteSummary> {
    fs::create_dir_all(output).context("Failed to create output directory")?;
    write_css_assets(output)?;

    let configured = index.len();
    let index = published(index, output);

    let mut written = Vec::with_capacity(ContentKind::LISTED.len() + 1);

    let home_path = output.join("index.html");
    write_page(&home_path, pages::home::generate(site, &index).into_string())?;
    written.push(home_path);

    for kind in ContentKind::LISTED {
        let section_dir = output.join(kind.section());
        fs::create_dir_all(&section_dir).with_context(|| {
            format!("Failed to create section directory: {}", section_dir.display())
        })?;

        let listing_path = section_dir.join("index.html");
        let html = pages::listing::generate(site, &index, kind);
        write_page(&listing_path, html.into_string())?;
        debug!(
            kind = %kind,
            entries = index.entries(kind).len(),
            path = %listing_path.display(),
            "wrote listing page"
        );
        written.push(listing_path);
    }

    let skipped = configured - index.len();
    info!(pages = written.len(), entries = index.len(), skipped, "site built");

    Ok(SiteSummary {
        pages: written,
        entries: index.len(),
        skipped,
    })
}

/// Copy of `index` without the entries whose content page is missing.
fn published(index: &SiteIndex, output: &Path) -> SiteIndex {
    let mut published = index.clone();
    published.retain(|kind, entry| {
        let exists = output.join(kind.section()).join(&entry.filename).is_file();
        if !exists {
            warn!(kind = %kind, filename = %entry.filename, "content file not found, skipping");
        }
        exists
    });
    published
}

pub(crate) fn write_page(path: &Path, html: String) -> Result<()> {
    fs::write(path, html).with_context(|| format!("Failed to write page to {}", path.display()))
}
