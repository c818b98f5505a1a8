//! Concept page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::NavItem;
use crate::content::{ContentForm, ContentKind};
use crate::markdown::{render, render_links};
use crate::site::SiteInfo;
use crate::util::capitalize;

/// Generates a concept page
///
/// Overview, explanation and code examples are rendered as markdown; the
/// practice problems field is rendered as a links list.
pub fn generate(site: &SiteInfo, form: &ContentForm) -> Markup {
    let kind = ContentKind::Concept;

    page_wrapper(
        site,
        &form.title,
        kind.depth(),
        Some(NavItem::Section(kind)),
        html! {
            article.concept data-id=(form.id(kind)) data-category=(form.category) {
                header {
                    h1 { (form.title) }
                    div.metadata {
                        span.category { (capitalize(&form.category)) }
                        span.difficulty { (capitalize(&form.complexity)) }
                    }
                }
                section.overview {
                    h2 { "Overview" }
                    (PreEscaped(render(&form.overview)))
                }
                section.explanation {
                    h2 { "Detailed Explanation" }
                    (PreEscaped(render(&form.explanation)))
                }
                section.examples {
                    h2 { "Code Examples" }
                    (PreEscaped(render(&form.examples)))
                }
                section.related-problems {
                    h2 { "Practice Problems" }
                    (PreEscaped(render_links(&form.problems)))
                }
            }
        },
    )
}
