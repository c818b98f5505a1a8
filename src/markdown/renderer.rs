//! Markdown subset to HTML fragment conversion.
//!
//! The conversion is an ordered list of whole-text substitutions. Later
//! stages see the HTML emitted by earlier ones, so the order below is part
//! of the output format. Code produced by the first two stages is stashed
//! behind placeholders so no later rule can rewrite it.

use maud::{PreEscaped, html};
use regex::Captures;

use super::links::convert_links;
use super::patterns::*;
use crate::util::html_escape;

/// Rules applied between the code stashing stages and paragraph wrapping.
const STAGES: [fn(&str) -> String; 11] = [
    headings,
    emphasis,
    convert_links,
    images,
    strikethrough,
    highlight,
    list_items,
    wrap_first_list,
    blockquotes,
    tables,
    horizontal_rules,
];

/// Private-use characters delimiting stashed code placeholders.
const PLACEHOLDER_MARKERS: [char; 4] = ['\u{E000}', '\u{E001}', '\u{E002}', '\u{E003}'];

/// Tag initials that exempt a line from receiving an opening `<p>`.
const PARAGRAPH_EXEMPT_INITIALS: &[u8] = b"hupldbsmiac";

/// Renders markdown subset text as an HTML fragment.
///
/// Accepts any input and never fails: malformed syntax degrades to literal
/// or partially converted text. Identical input always produces identical
/// output. Placeholder marker characters in the input are replaced with
/// U+FFFD so authored text cannot splice stashed code.
///
/// # Arguments
///
/// * `text`: Authored text, e.g. a description or article body
///
/// # Returns
///
/// HTML fragment for insertion inside a container element; empty for empty
/// input
pub fn render(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text
        .replace("\r\n", "\n")
        .replace(PLACEHOLDER_MARKERS, "\u{FFFD}");
    let mut code = CodeStash::default();

    let html = code.stash_blocks(&text);
    let html = code.stash_spans(&html);
    let html = STAGES.iter().fold(html, |html, stage| stage(&html));
    let html = code.restore_spans(&html);
    let html = wrap_paragraphs(&html);
    let html = code.restore_blocks(&html);

    tidy_paragraphs(&html)
}

/// Rendered code held out of the pipeline while other rules run.
#[derive(Default)]
struct CodeStash {
    blocks: Vec<String>,
    spans: Vec<String>,
}

impl CodeStash {
    fn stash_blocks(&mut self, text: &str) -> String {
        FENCED_CODE
            .replace_all(text, |caps: &Captures| {
                let language = caps.get(1).map_or("text", |m| m.as_str());
                let body = caps.get(2).map_or("", |m| m.as_str());
                self.blocks.push(format!(
                    "<pre><code class=\"language-{}\">{}</code></pre>",
                    language,
                    html_escape(body)
                ));
                format!("\u{E000}{}\u{E001}", self.blocks.len() - 1)
            })
            .into_owned()
    }

    fn stash_spans(&mut self, text: &str) -> String {
        INLINE_CODE
            .replace_all(text, |caps: &Captures| {
                self.spans
                    .push(format!("<code>{}</code>", html_escape(&caps[1])));
                format!("\u{E002}{}\u{E003}", self.spans.len() - 1)
            })
            .into_owned()
    }

    fn restore_blocks(&self, text: &str) -> String {
        restore(text, &BLOCK_PLACEHOLDER, &self.blocks)
    }

    fn restore_spans(&self, text: &str) -> String {
        restore(text, &SPAN_PLACEHOLDER, &self.spans)
    }
}

fn restore(text: &str, placeholder: &regex::Regex, stash: &[String]) -> String {
    placeholder
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| stash.get(index))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn headings(text: &str) -> String {
    let text = HEADING_3.replace_all(text, "<h3>${1}</h3>");
    let text = HEADING_2.replace_all(&text, "<h2>${1}</h2>");
    HEADING_1.replace_all(&text, "<h1>${1}</h1>").into_owned()
}

fn emphasis(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            // Left whole for the horizontal rule stage.
            if line == "***" {
                return line.to_string();
            }
            let line = BOLD_ITALIC.replace_all(line, "<strong><em>${1}</em></strong>");
            let line = BOLD.replace_all(&line, "<strong>${1}</strong>");
            ITALIC.replace_all(&line, "<em>${1}</em>").into_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn images(text: &str) -> String {
    IMAGE
        .replace_all(text, "<img src=\"${2}\" alt=\"${1}\">")
        .into_owned()
}

fn strikethrough(text: &str) -> String {
    STRIKETHROUGH
        .replace_all(text, "<del>${1}</del>")
        .into_owned()
}

fn highlight(text: &str) -> String {
    HIGHLIGHT.replace_all(text, "<mark>${1}</mark>").into_owned()
}

fn list_items(text: &str) -> String {
    LIST_ITEM.replace_all(text, "<li>${1}</li>").into_owned()
}

/// Wraps only the first run of list items; later runs stay bare `<li>`s.
fn wrap_first_list(text: &str) -> String {
    LIST_RUN.replacen(text, 1, "<ul>${0}</ul>").into_owned()
}

fn blockquotes(text: &str) -> String {
    BLOCKQUOTE
        .replace_all(text, "<blockquote>${1}</blockquote>")
        .into_owned()
}

/// Converts pipe delimited blocks of two or more lines into tables.
///
/// Any run of lines that start and end with `|` qualifies, whether or not
/// the second line looks like a separator row.
fn tables(text: &str) -> String {
    TABLE_BLOCK
        .replace_all(text, |caps: &Captures| {
            let rows: Vec<&str> = caps[0].split('\n').collect();
            if rows.len() < 2 {
                return caps[0].to_string();
            }
            table_html(&rows)
        })
        .into_owned()
}

fn table_html(rows: &[&str]) -> String {
    let header = split_row(rows[0]);
    let body: Vec<Vec<&str>> = rows.iter().skip(2).map(|row| split_row(row)).collect();

    html! {
        table {
            thead {
                tr {
                    @for cell in &header {
                        th { (PreEscaped(*cell)) }
                    }
                }
            }
            tbody {
                @for row in &body {
                    tr {
                        @for index in 0..header.len() {
                            td { (PreEscaped(row.get(index).copied().unwrap_or(""))) }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}

fn split_row(row: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = row.split('|').collect();
    if cells.first() == Some(&"") {
        cells.remove(0);
    }
    if cells.last() == Some(&"") {
        cells.pop();
    }
    cells.into_iter().map(str::trim).collect()
}

fn horizontal_rules(text: &str) -> String {
    HORIZONTAL_RULE.replace_all(text, "<hr>").into_owned()
}

/// Turns blank lines into paragraph breaks and closes every open line.
///
/// A line gets an opening `<p>` unless it starts with a tag whose name
/// begins with one of the exempt initials, and a closing `</p>` unless it
/// already ends with `>`.
fn wrap_paragraphs(text: &str) -> String {
    let text = text.replace("\n\n", "</p><p>");

    text.split('\n')
        .map(|line| {
            let mut wrapped = String::with_capacity(line.len() + 7);
            if !starts_with_exempt_tag(line) {
                wrapped.push_str("<p>");
            }
            wrapped.push_str(line);
            if !wrapped.ends_with('>') {
                wrapped.push_str("</p>");
            }
            wrapped
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn starts_with_exempt_tag(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.first() == Some(&b'<')
        && bytes
            .get(1)
            .is_some_and(|initial| PARAGRAPH_EXEMPT_INITIALS.contains(initial))
}

fn tidy_paragraphs(text: &str) -> String {
    let text = text.replace("<p></p>", "");
    let text = PARAGRAPH_BEFORE_BLOCK.replace_all(&text, "${1}");
    PARAGRAPH_AFTER_BLOCK.replace_all(&text, "${1}").into_owned()
}
