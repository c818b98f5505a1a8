//! Cached regex patterns for the markdown subset.
//!
//! Compiled once on first use. Every pattern is a literal that is known to
//! be valid, so construction cannot fail at runtime.

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

// === Code ===

/// Fence with optional language tag; the body stops before the newline
/// preceding the closing fence.
pub static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"```([A-Za-z0-9_]+)?\n([\s\S]*?)\n?```"));

pub static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| compile(r"`([^`]+)`"));

/// Placeholder for a stashed fenced block: U+E000, index, U+E001.
pub static BLOCK_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\x{E000}([0-9]+)\x{E001}"));

/// Placeholder for a stashed code span: U+E002, index, U+E003.
pub static SPAN_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\x{E002}([0-9]+)\x{E003}"));

// === Block and inline rules ===

pub static HEADING_3: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^### (.*)$"));
pub static HEADING_2: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^## (.*)$"));
pub static HEADING_1: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^# (.*)$"));

pub static BOLD_ITALIC: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*\*(.*?)\*\*\*"));
pub static BOLD: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*(.*?)\*\*"));
pub static ITALIC: LazyLock<Regex> = LazyLock::new(|| compile(r"\*(.*?)\*"));

pub static LINK: LazyLock<Regex> = LazyLock::new(|| compile(r"\[([^\]]+)\]\(([^)]+)\)"));
pub static IMAGE: LazyLock<Regex> = LazyLock::new(|| compile(r"!\[([^\]]*)\]\(([^)]+)\)"));

pub static STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| compile(r"~~(.*?)~~"));
pub static HIGHLIGHT: LazyLock<Regex> = LazyLock::new(|| compile(r"==(.*?)=="));

/// `* `, `- `, `+ ` and `N. ` items are all treated alike.
pub static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^(?:[*+-]|[0-9]+\.) (.*)$"));

/// One or more `<li>` lines with nothing between them but newlines.
pub static LIST_RUN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"<li>.*</li>(?:\n<li>.*</li>)*"));

pub static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^> (.*)$"));

/// Consecutive lines that each start and end with a pipe.
pub static TABLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^\|.*\|$(?:\n\|.*\|$)*"));

pub static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^(?:---|\*\*\*)$"));

// === Paragraph cleanup ===

pub static PARAGRAPH_BEFORE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"<p>(<(?:h[1-6]|hr|ul|blockquote|pre|table)>)"));

pub static PARAGRAPH_AFTER_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(</(?:h[1-6]|ul|blockquote|pre|table)>|<hr>)</p>"));

// === Examples and related links ===

pub static EXAMPLE_MARKER: LazyLock<Regex> = LazyLock::new(|| compile(r"Example [0-9]+:"));

pub static LINK_BULLET: LazyLock<Regex> = LazyLock::new(|| compile(r"^[•*+-]\s*(.+)$"));

pub static LINK_NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+\.\s*(.+)$"));
