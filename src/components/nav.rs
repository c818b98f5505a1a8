//! Main navigation component

use maud::{Markup, html};

use crate::content::ContentKind;

/// Entry of the main navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Section(ContentKind),
}

impl NavItem {
    /// Navigation entries in display order.
    pub fn all() -> impl Iterator<Item = NavItem> {
        std::iter::once(NavItem::Home).chain(ContentKind::LISTED.into_iter().map(NavItem::Section))
    }

    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Section(kind) => kind.label(),
        }
    }

    fn href(self, root: &str) -> String {
        match self {
            Self::Home => format!("{}index.html", root),
            Self::Section(kind) => format!("{}{}/index.html", root, kind.section()),
        }
    }
}

/// Renders the main navigation
///
/// Links Home and every category listing. The entry matching `current`
/// carries the `nav-link--active` class; profile pages pass `None` and get
/// no active entry.
///
/// # Arguments
///
/// * `root`: Relative prefix back to the site root
/// * `current`: Active entry, if any
///
/// # Returns
///
/// Navigation markup
pub fn main_nav(root: &str, current: Option<NavItem>) -> Markup {
    html! {
        nav.main-nav {
            @for item in NavItem::all() {
                @if Some(item) == current {
                    a class="nav-link nav-link--active" href=(item.href(root)) { (item.label()) }
                } @else {
                    a class="nav-link" href=(item.href(root)) { (item.label()) }
                }
            }
        }
    }
}
