//! Article and blog page generation

use chrono::NaiveDate;
use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::NavItem;
use crate::content::{ContentForm, ContentKind};
use crate::markdown::{render, render_links};
use crate::site::SiteInfo;
use crate::util::{format_display_date, slugify, split_list};

/// Generates an article page
///
/// # Arguments
///
/// * `site`: Site name and footer text
/// * `form`: Validated article form
/// * `date`: Publication date shown under the title
///
/// # Returns
///
/// Complete HTML page with content and references sections
pub fn generate(site: &SiteInfo, form: &ContentForm, date: NaiveDate) -> Markup {
    let kind = ContentKind::Article;

    page_wrapper(
        site,
        &form.title,
        kind.depth(),
        Some(NavItem::Section(kind)),
        html! {
            article.article data-id=(form.id(kind)) data-author=(slugify(&form.author)) {
                (header(form, date, None))
                section.content {
                    (PreEscaped(render(&form.content)))
                }
                section.references {
                    h2 { "References and Further Reading" }
                    (PreEscaped(render_links(&form.references)))
                }
            }
        },
    )
}

/// Generates a blog post page
///
/// Same layout as an article, with the read time in the metadata line and
/// related content instead of references.
pub fn generate_blog(site: &SiteInfo, form: &ContentForm, date: NaiveDate) -> Markup {
    let kind = ContentKind::Blog;

    page_wrapper(
        site,
        &form.title,
        kind.depth(),
        Some(NavItem::Section(kind)),
        html! {
            article.blog data-id=(form.id(kind)) data-author=(slugify(&form.author)) {
                (header(form, date, Some(form.read_time.as_str())))
                section.content {
                    (PreEscaped(render(&form.content)))
                }
                section.related-links {
                    h3 { "Related Content" }
                    (PreEscaped(render_links(&form.related)))
                }
            }
        },
    )
}

fn header(form: &ContentForm, date: NaiveDate, read_time: Option<&str>) -> Markup {
    html! {
        header {
            h1 { (form.title) }
            div.metadata {
                span.author { (form.author) }
                span.date { (format_display_date(date)) }
                @if let Some(read_time) = read_time {
                    span.read-time { (read_time) }
                }
                span.tags { (split_list(&form.tags).join(", ")) }
            }
        }
    }
}
