//! Contributor profile page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::content::{ContentForm, ContentKind};
use crate::markdown::render;
use crate::site::SiteInfo;
use crate::util::root_prefix;

/// Social link parsed from one line of the socials field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl SocialLink {
    /// Parses a `Label: url` line.
    ///
    /// The line is split on its first colon. A line that is itself a URL
    /// with a scheme (`https://…`) keeps the label `Link`. URLs without a
    /// scheme get `https://` prepended.
    ///
    /// Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (label, url) = match line.split_once(':') {
            _ if is_bare_url(line) => ("Link", line),
            Some((label, url)) => (label.trim(), url.trim()),
            None => ("Link", line),
        };

        let url = if url.is_empty() || has_scheme(url) {
            url.to_string()
        } else {
            format!("https://{}", url)
        };

        Some(Self {
            label: label.to_string(),
            url,
        })
    }
}

fn is_bare_url(line: &str) -> bool {
    has_scheme(line) && line.split_once(':').is_some_and(|(_, rest)| rest.starts_with("//"))
}

fn has_scheme(url: &str) -> bool {
    match url.split_once(':') {
        Some((scheme, _)) => {
            !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

/// Parses every non-blank line of a socials field.
pub fn parse_social_links(text: &str) -> Vec<SocialLink> {
    text.lines().filter_map(SocialLink::parse).collect()
}

/// Generates a contributor profile page
///
/// Profiles live two levels below the site root
/// (`profiles/{username}/index.html`) and have no active navigation entry.
/// The avatar falls back to the bundled default image when no image URL
/// was given.
pub fn generate(site: &SiteInfo, form: &ContentForm) -> Markup {
    let kind = ContentKind::Profile;
    let root = root_prefix(kind.depth());
    let avatar = if form.image.is_empty() {
        format!("{}assets/images/default-profile.png", root)
    } else {
        form.image.clone()
    };
    let socials = parse_social_links(&form.socials);

    page_wrapper(
        site,
        &form.name,
        kind.depth(),
        None,
        html! {
            div.profile-container data-username=(form.username) data-display-name=(form.name) {
                header.profile-header {
                    img.profile-avatar src=(avatar) alt=(form.name);
                    div.profile-info {
                        h1 { (form.name) }
                        @if !form.tagline.is_empty() {
                            div.profile-tagline { (form.tagline) }
                        }
                        @if !socials.is_empty() {
                            div.social-links {
                                @for link in &socials {
                                    a.social-btn href=(link.url) target="_blank" rel="noopener" {
                                        (link.label)
                                    }
                                }
                            }
                        }
                    }
                }
                section.profile-bio {
                    h2 { "About" }
                    div.bio-content {
                        (PreEscaped(render(&form.bio)))
                    }
                }
            }
        },
    )
}
