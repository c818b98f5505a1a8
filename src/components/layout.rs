//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::nav::{NavItem, main_nav};
use crate::assets::STYLESHEET_PATH;
use crate::site::SiteInfo;
use crate::util::root_prefix;

/// Wraps page content with the shared site chrome
///
/// Provides DOCTYPE, head, site header with navigation, main container and
/// footer. Every relative link is prefixed so that it resolves from a page
/// `depth` directories below the site root.
///
/// # Arguments
///
/// * `site`: Site name and footer text
/// * `title`: Page title text (without site suffix)
/// * `depth`: Directory depth of the page below the site root
/// * `current`: Navigation entry to mark active, if any
/// * `body`: Page-specific main content
///
/// # Returns
///
/// Complete HTML document
pub fn page_wrapper(
    site: &SiteInfo,
    title: &str,
    depth: usize,
    current: Option<NavItem>,
    body: Markup,
) -> Markup {
    let root = root_prefix(depth);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site.name) }
                link rel="stylesheet" href=(format!("{}{}", root, STYLESHEET_PATH));
            }
            body {
                header.site-header {
                    div.container {
                        h1.site-title {
                            a href=(format!("{}index.html", root)) { (site.name) }
                        }
                        (main_nav(&root, current))
                    }
                }
                main.main-content {
                    div.container {
                        (body)
                    }
                }
                footer.site-footer {
                    div.container {
                        p { "© " (site.year) " " (site.name) ". " (site.footer) }
                    }
                }
            }
        }
    }
}
