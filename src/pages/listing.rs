//! Category listing page generation

use maud::{Markup, html};

use crate::components::content_list::{content_item, empty_state};
use crate::components::layout::page_wrapper;
use crate::components::nav::NavItem;
use crate::content::ContentKind;
use crate::entry::SiteIndex;
use crate::site::SiteInfo;

/// Generates the listing page of one category
///
/// Entries are shown newest first. The page lives inside the category
/// directory, so entry file names are linked as is.
///
/// # Arguments
///
/// * `site`: Site name and footer text
/// * `index`: Published content from the site configuration
/// * `kind`: Category to list
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(site: &SiteInfo, index: &SiteIndex, kind: ContentKind) -> Markup {
    let entries = index.newest_first(kind);

    page_wrapper(
        site,
        kind.label(),
        1,
        Some(NavItem::Section(kind)),
        html! {
            section.listing data-type=(kind.section()) {
                header.listing-header {
                    h1.page-title { (kind.label()) }
                    span.badge { (entries.len()) " " (kind.section()) }
                }
                div.content-list {
                    @if entries.is_empty() {
                        (empty_state(kind))
                    } @else {
                        @for entry in &entries {
                            (content_item(kind, entry, &entry.filename, false))
                        }
                    }
                }
            }
        },
    )
}
