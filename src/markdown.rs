//! Markdown subset rendering for authored page fields.
//!
//! Three renderers cover the text fields of the writer forms: free
//! markdown subset text, problem examples, and related links lists. All
//! of them are pure string transformations that accept any input.

mod examples;
mod links;
mod patterns;
mod renderer;

use clap::ValueEnum;

pub use examples::render_examples;
pub use links::{NO_RELATED_CONTENT, render_links};
pub use renderer::render;

/// Which renderer a text field goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FieldFormat {
    /// Markdown subset text
    #[default]
    Markdown,
    /// `Example N:` segmented examples
    Examples,
    /// One related link per line
    Links,
}

impl FieldFormat {
    /// Renders `text` with the renderer for this format.
    pub fn render(self, text: &str) -> String {
        match self {
            Self::Markdown => render(text),
            Self::Examples => render_examples(text),
            Self::Links => render_links(text),
        }
    }
}
