//! Utility functions for codeprob

use chrono::NaiveDate;

/// Escapes HTML special characters.
///
/// Used for code spans and fenced code bodies, which must show their
/// content literally.
///
/// # Arguments
///
/// * `text`: Plain text to escape
///
/// # Returns
///
/// HTML safe string
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Derives a URL safe identifier from free text.
///
/// Lowercases the input, drops everything except ASCII letters, digits,
/// whitespace and hyphens, turns whitespace runs into single hyphens and
/// collapses repeated hyphens. Leading and trailing hyphens are removed.
///
/// # Arguments
///
/// * `text`: Title or author name
///
/// # Returns
///
/// Identifier such as `two-sum` for "Two Sum!"
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
    }

    slug
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the relative prefix leading from a page back to the site root.
///
/// # Arguments
///
/// * `depth`: Number of directories between the page and the root
///
/// # Returns
///
/// `""` for root pages, `"../"` for section pages, and so on
pub fn root_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Formats a date the way pages display it, e.g. "October 15, 2026".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Splits a comma separated field into trimmed, non-empty values.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
        .collect()
}
