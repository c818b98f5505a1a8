//! Problem examples split on `Example N:` markers.

use maud::{PreEscaped, html};

use super::patterns::EXAMPLE_MARKER;

/// Renders an examples field as titled code blocks.
///
/// Text without any `Example N:` marker becomes a single block labelled
/// `Example:`. Otherwise the text is split on the markers and every
/// non-blank segment becomes a block. Text before the first marker is
/// labelled `Example`; later segments are numbered by position, ignoring
/// the numbers written in the input.
///
/// Segment bodies are trimmed and inserted raw, without markdown
/// processing or escaping.
///
/// # Arguments
///
/// * `text`: Examples as authored
///
/// # Returns
///
/// Concatenated `<div class="example">` blocks, empty for empty input
pub fn render_examples(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    if !EXAMPLE_MARKER.is_match(text) {
        return example_block("Example", text.trim());
    }

    EXAMPLE_MARKER
        .split(text)
        .enumerate()
        .filter_map(|(index, segment)| {
            let body = segment.trim();
            if body.is_empty() {
                return None;
            }
            let label = match index {
                0 => "Example".to_string(),
                n => format!("Example {}", n),
            };
            Some(example_block(&label, body))
        })
        .collect()
}

fn example_block(label: &str, body: &str) -> String {
    html! {
        div class="example" {
            h3 { (label) ":" }
            pre {
                code { (PreEscaped(body)) }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_examples_empty() {
        assert_eq!(render_examples(""), "");
    }

    #[test]
    fn test_render_examples_without_markers() {
        // Arrange & Act
        let html = render_examples("  foo  ");

        // Assert
        assert_eq!(
            html,
            "<div class=\"example\"><h3>Example:</h3><pre><code>foo</code></pre></div>"
        );
    }

    #[test]
    fn test_render_examples_numbered_markers() {
        // Arrange
        let text = "Example 1:\nfoo\nExample 2:\nbar";

        // Act
        let html = render_examples(text);

        // Assert
        assert_eq!(
            html,
            "<div class=\"example\"><h3>Example 1:</h3><pre><code>foo</code></pre></div>\
             <div class=\"example\"><h3>Example 2:</h3><pre><code>bar</code></pre></div>"
        );
    }

    #[test]
    fn test_render_examples_renumbers_by_position() {
        // Arrange
        let text = "Example 7:\nfirst\nExample 3:\nsecond";

        // Act
        let html = render_examples(text);

        // Assert
        assert!(html.contains("<h3>Example 1:</h3><pre><code>first</code>"), "{}", html);
        assert!(html.contains("<h3>Example 2:</h3><pre><code>second</code>"), "{}", html);
        assert!(!html.contains("Example 7"), "{}", html);
    }

    #[test]
    fn test_render_examples_leading_text_kept() {
        // Arrange
        let text = "Consider nums = [1, 2]\nExample 1:\nInput: 3";

        // Act
        let html = render_examples(text);

        // Assert
        assert!(
            html.starts_with(
                "<div class=\"example\"><h3>Example:</h3><pre><code>Consider nums = [1, 2]</code>"
            ),
            "{}",
            html
        );
        assert!(html.contains("<h3>Example 1:</h3><pre><code>Input: 3</code>"), "{}", html);
    }

    #[test]
    fn test_render_examples_blank_segment_skipped_numbering_kept() {
        // Arrange
        let text = "Example 1:\n   \nExample 2:\nbar";

        // Act
        let html = render_examples(text);

        // Assert
        assert_eq!(html.matches("class=\"example\"").count(), 1);
        assert!(html.contains("<h3>Example 2:</h3>"), "{}", html);
    }

    #[test]
    fn test_render_examples_body_is_raw() {
        // Arrange & Act
        let html = render_examples("Example 1:\n<b>x</b> **y**");

        // Assert
        assert!(html.contains("<code><b>x</b> **y**</code>"), "{}", html);
    }
}
