//! Static page authoring for a community programming knowledge site.

mod assets;
pub mod components;
mod config;
mod content;
mod entry;
mod markdown;
pub mod pages;
mod site;
mod util;
mod writer;

pub use assets::{STYLESHEET_PATH, write_css_assets};
pub use config::{Command, Config};
pub use content::{ContentForm, ContentKind};
pub use entry::{ConfigEntry, ContentEntry, ProfileEntry, SiteContent, SiteIndex};
pub use markdown::{FieldFormat, NO_RELATED_CONTENT, render, render_examples, render_links};
pub use pages::profile::{SocialLink, parse_social_links};
pub use site::{DEFAULT_FOOTER, DEFAULT_SITE_NAME, SiteInfo, SiteSummary, build_site};
pub use util::{format_display_date, slugify};
pub use writer::{WrittenPage, write_page};
