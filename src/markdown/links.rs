//! Related links lists and inline link conversion.

use maud::{PreEscaped, html};
use regex::Captures;

use super::patterns::{LINK, LINK_BULLET, LINK_NUMBER};

/// Placeholder shown when a page has no related links.
pub const NO_RELATED_CONTENT: &str = "<p>No related content available.</p>";

/// Renders a related links field as an unordered list.
///
/// Each non-blank line becomes one list item. A leading bullet (`-`, `*`,
/// `+`, `•`) or number marker (`1.`) is dropped together with the spacing
/// after it, and `[label](url)` is converted to an anchor. Everything else
/// on the line is kept as written.
///
/// # Arguments
///
/// * `text`: One link or note per line
///
/// # Returns
///
/// `<ul>` fragment, or a placeholder paragraph when the field is blank
pub fn render_links(text: &str) -> String {
    if text.trim().is_empty() {
        return NO_RELATED_CONTENT.to_string();
    }

    let items: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| convert_links(strip_marker(line)))
        .collect();

    html! {
        ul {
            @for item in &items {
                li { (PreEscaped(item)) }
            }
        }
    }
    .into_string()
}

fn strip_marker(line: &str) -> &str {
    LINK_BULLET
        .captures(line)
        .or_else(|| LINK_NUMBER.captures(line))
        .and_then(|caps| caps.get(1))
        .map_or(line, |content| content.as_str())
}

/// Converts `[label](url)` into anchors.
///
/// Matches directly preceded by `!` are image syntax and are left for the
/// image rule.
pub(crate) fn convert_links(text: &str) -> String {
    LINK.replace_all(text, |caps: &Captures| {
        let is_image = caps
            .get(0)
            .is_some_and(|whole| text[..whole.start()].ends_with('!'));
        if is_image {
            caps[0].to_string()
        } else {
            format!("<a href=\"{}\">{}</a>", &caps[2], &caps[1])
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_links_blank_input() {
        assert_eq!(render_links(""), NO_RELATED_CONTENT);
        assert_eq!(render_links("  \n\t\n"), NO_RELATED_CONTENT);
    }

    #[test]
    fn test_render_links_bullets_and_plain_text() {
        // Arrange
        let text = "- [Site](http://x.com)\n- plain text";

        // Act
        let html = render_links(text);

        // Assert
        assert_eq!(
            html,
            "<ul><li><a href=\"http://x.com\">Site</a></li><li>plain text</li></ul>"
        );
    }

    #[test]
    fn test_render_links_every_marker_stripped() {
        // Arrange
        let text = "- dash\n* star\n+ plus\n• dot\n3. number\nno marker";

        // Act
        let html = render_links(text);

        // Assert
        assert_eq!(
            html,
            "<ul><li>dash</li><li>star</li><li>plus</li><li>dot</li><li>number</li><li>no marker</li></ul>"
        );
    }

    #[test]
    fn test_render_links_marker_without_space() {
        assert_eq!(render_links("-tight"), "<ul><li>tight</li></ul>");
        assert_eq!(render_links("1.tight"), "<ul><li>tight</li></ul>");
    }

    #[test]
    fn test_render_links_skips_blank_lines_and_trims() {
        // Arrange
        let text = "\n   - [A](a.html)   \n\n\n  [B](b.html)\n";

        // Act
        let html = render_links(text);

        // Assert
        assert_eq!(
            html,
            "<ul><li><a href=\"a.html\">A</a></li><li><a href=\"b.html\">B</a></li></ul>"
        );
    }

    #[test]
    fn test_render_links_lone_marker_kept() {
        assert_eq!(render_links("-"), "<ul><li>-</li></ul>");
    }

    #[test]
    fn test_render_links_multiple_links_on_one_line() {
        // Arrange & Act
        let html = render_links("[One](1.html) and [Two](2.html)");

        // Assert
        assert!(html.contains("<a href=\"1.html\">One</a> and <a href=\"2.html\">Two</a>"));
    }

    #[test]
    fn test_convert_links_leaves_image_syntax() {
        assert_eq!(convert_links("![alt](pic.png)"), "![alt](pic.png)");
        assert_eq!(
            convert_links("[a](b) ![c](d)"),
            "<a href=\"b\">a</a> ![c](d)"
        );
    }
}
