//! Homepage generation

use maud::{Markup, html};

use crate::components::content_list::content_item;
use crate::components::layout::page_wrapper;
use crate::components::nav::NavItem;
use crate::content::ContentKind;
use crate::entry::SiteIndex;
use crate::site::SiteInfo;

/// Number of entries in the recent content section.
pub const RECENT_LIMIT: usize = 5;

/// Generates the site homepage
///
/// Shows one card per category with its entry count, followed by the most
/// recent entries across all categories.
pub fn generate(site: &SiteInfo, index: &SiteIndex) -> Markup {
    let recent = index.recent(RECENT_LIMIT);

    page_wrapper(
        site,
        "Home",
        0,
        Some(NavItem::Home),
        html! {
            section.hero {
                h1 { (site.name) }
                p.hero-tagline { (site.footer) }
            }
            section.categories {
                @for kind in ContentKind::LISTED {
                    a.category-card href=(format!("{}/index.html", kind.section())) {
                        h3 { (kind.label()) }
                        span.count { (index.entries(kind).len()) }
                    }
                }
            }
            section.recent-content {
                h2 { "Recent Content" }
                @if recent.is_empty() {
                    p.empty-state { "No content published yet." }
                } @else {
                    div.content-list {
                        @for (kind, entry) in &recent {
                            (content_item(*kind, entry, &format!("{}/{}", kind.section(), entry.filename), true))
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_counts_and_recent() {
        // Arrange
        let site = SiteInfo::new("CodeProb", 2026);
        let index = SiteIndex::from_json(
            r#"{"content": {
                "problems": [
                    {"filename": "problem-a.html", "title": "A", "author": "x", "dateAdded": "2026-01-01"},
                    {"filename": "problem-b.html", "title": "B", "author": "x", "dateAdded": "2026-02-01"}
                ],
                "blogs": [
                    {"filename": "blog-c.html", "title": "C", "author": "y", "dateAdded": "2026-03-01"}
                ]
            }}"#,
        )
        .expect("Should parse");

        // Act
        let html = generate(&site, &index).into_string();

        // Assert
        assert!(html.contains(
            "<a class=\"category-card\" href=\"problems/index.html\"><h3>Problems</h3><span class=\"count\">2</span></a>"
        ));
        assert!(html.contains("<a href=\"blogs/blog-c.html\">C</a>"));
        assert!(html.find("blog-c.html") < html.find("problem-b.html"));
        assert!(html.contains("nav-link nav-link--active\" href=\"index.html\""));
    }

    #[test]
    fn test_home_without_content() {
        let site = SiteInfo::new("CodeProb", 2026);
        let html = generate(&site, &SiteIndex::default()).into_string();
        assert!(html.contains("No content published yet."));
    }
}
