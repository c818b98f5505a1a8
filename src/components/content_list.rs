//! Content listing components

use maud::{Markup, html};

use crate::content::ContentKind;
use crate::entry::ContentEntry;
use crate::util::format_display_date;

/// Renders a single listed entry
///
/// Shows the linked title, the metadata that matters for the entry's kind,
/// the display date and the description (or a placeholder). The item carries
/// the same metadata as `data-*` attributes for client-side filtering.
///
/// # Arguments
///
/// * `kind`: Category the entry belongs to
/// * `entry`: Entry from the site configuration
/// * `href`: Link target for the title
/// * `show_badge`: Whether to prefix the item with its kind, for mixed lists
///
/// # Returns
///
/// Content item markup
pub fn content_item(kind: ContentKind, entry: &ContentEntry, href: &str, show_badge: bool) -> Markup {
    let description = entry
        .description
        .as_deref()
        .map(str::trim)
        .filter(|description| !description.is_empty())
        .unwrap_or("No description available.");
    let filters = FilterAttributes::new(kind, entry);

    html! {
        div.content-item
            data-type=(kind.section())
            data-difficulty=[filters.difficulty]
            data-topic=[filters.topic]
            data-category=[filters.category]
            data-complexity=[filters.complexity]
            data-author=[filters.author]
            data-tag=[filters.tag]
        {
            @if show_badge {
                span.content-type-badge { (kind) }
            }
            h3 {
                a href=(href) { (entry.title) }
            }
            div.content-metadata {
                (metadata(kind, entry))
                span.date { (format_display_date(entry.date_added)) }
            }
            p { (description) }
        }
    }
}

/// Filter values of one item. Multi-valued fields are joined with spaces.
#[derive(Default)]
struct FilterAttributes<'a> {
    difficulty: Option<&'a str>,
    topic: Option<String>,
    category: Option<&'a str>,
    complexity: Option<&'a str>,
    author: Option<&'a str>,
    tag: Option<String>,
}

impl<'a> FilterAttributes<'a> {
    fn new(kind: ContentKind, entry: &'a ContentEntry) -> Self {
        match kind {
            ContentKind::Problem => Self {
                difficulty: entry.difficulty.as_deref(),
                topic: join_words(&entry.topics),
                ..Default::default()
            },
            ContentKind::Concept => Self {
                category: entry.category.as_deref(),
                complexity: entry.complexity.as_deref(),
                ..Default::default()
            },
            ContentKind::Article | ContentKind::Blog => Self {
                author: Some(&entry.author),
                tag: join_words(&entry.tags),
                ..Default::default()
            },
            ContentKind::Profile => Self::default(),
        }
    }
}

fn join_words(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join(" "))
}

fn metadata(kind: ContentKind, entry: &ContentEntry) -> Markup {
    html! {
        @match kind {
            ContentKind::Problem => {
                @if let Some(difficulty) = &entry.difficulty {
                    span.difficulty { (difficulty) }
                }
                @if !entry.topics.is_empty() {
                    span.topics { (entry.topics.join(", ")) }
                }
            },
            ContentKind::Concept => {
                @if let Some(category) = &entry.category {
                    span.category { (category) }
                }
                @if let Some(complexity) = &entry.complexity {
                    span.complexity { (complexity) }
                }
            },
            ContentKind::Article | ContentKind::Blog => {
                span.author { (entry.author) }
                @if !entry.tags.is_empty() {
                    span.tags { (entry.tags.join(", ")) }
                }
                @if let Some(read_time) = &entry.read_time {
                    span.read-time { (read_time) }
                }
            },
            ContentKind::Profile => {},
        }
    }
}

/// Renders the placeholder shown for a category without entries.
pub fn empty_state(kind: ContentKind) -> Markup {
    html! {
        div.empty-state {
            h3 { "No " (kind.section()) " available yet" }
            p {
                "Be the first to contribute! Use "
                code { "codeprob write " (kind) }
                " to create content."
            }
        }
    }
}
