//! Problem page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::NavItem;
use crate::content::{ContentForm, ContentKind};
use crate::markdown::{render, render_examples, render_links};
use crate::site::SiteInfo;
use crate::util::{capitalize, split_list};

/// Generates a problem page
///
/// Renders the description and hints as markdown, the examples as titled
/// code blocks and the related content as a links list. The hints section
/// is only emitted when hints were given.
///
/// # Arguments
///
/// * `site`: Site name and footer text
/// * `form`: Validated problem form
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(site: &SiteInfo, form: &ContentForm) -> Markup {
    let kind = ContentKind::Problem;

    page_wrapper(
        site,
        &form.title,
        kind.depth(),
        Some(NavItem::Section(kind)),
        html! {
            article.problem data-id=(form.id(kind)) data-difficulty=(form.difficulty) {
                header {
                    h1 { (form.title) }
                    div.metadata {
                        span.difficulty { (capitalize(&form.difficulty)) }
                        span.topics { (split_list(&form.topics).join(", ")) }
                    }
                }
                section.description {
                    h2 { "Problem Description" }
                    (PreEscaped(render(&form.description)))
                }
                section.examples {
                    h2 { "Examples" }
                    (PreEscaped(render_examples(&form.examples)))
                }
                @if !form.hints.trim().is_empty() {
                    section.hints data-optional="true" {
                        h2 { "Hints" }
                        (PreEscaped(render(&form.hints)))
                    }
                }
                section.related-links {
                    h2 { "Related Content" }
                    (PreEscaped(render_links(&form.related)))
                }
            }
        },
    )
}
