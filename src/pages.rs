//! Page generation
//!
//! One module per page type. Content pages are generated from a validated
//! form; listing pages and the homepage from the site configuration.

pub mod article;
pub mod concept;
pub mod home;
pub mod listing;
pub mod problem;
pub mod profile;

use chrono::NaiveDate;
use maud::Markup;

use crate::content::{ContentForm, ContentKind};
use crate::site::SiteInfo;

/// Generates the page for a form of the given kind.
///
/// # Arguments
///
/// * `kind`: Kind of page to generate
/// * `site`: Site name and footer text
/// * `form`: Validated form values
/// * `date`: Publication date shown on articles and blogs
///
/// # Returns
///
/// Complete HTML document
pub fn generate(kind: ContentKind, site: &SiteInfo, form: &ContentForm, date: NaiveDate) -> Markup {
    match kind {
        ContentKind::Problem => problem::generate(site, form),
        ContentKind::Concept => concept::generate(site, form),
        ContentKind::Article => article::generate(site, form, date),
        ContentKind::Blog => article::generate_blog(site, form, date),
        ContentKind::Profile => profile::generate(site, form),
    }
}
