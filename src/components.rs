//! Reusable HTML components for page generation
//!
//! Maud component functions shared by the content pages, the category
//! listings and the homepage: the document layout with site header and
//! footer, the main navigation, and content list items.

pub mod content_list;
pub mod layout;
pub mod nav;
