//! Content kinds and the authoring form behind each generated page.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::util::slugify;

/// Kind of page the writer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Problem,
    Concept,
    Article,
    Blog,
    Profile,
}

impl ContentKind {
    /// Kinds that have a category listing page, in navigation order.
    pub const LISTED: [ContentKind; 4] = [
        ContentKind::Problem,
        ContentKind::Concept,
        ContentKind::Article,
        ContentKind::Blog,
    ];

    /// Site directory holding pages of this kind.
    pub fn section(self) -> &'static str {
        match self {
            Self::Problem => "problems",
            Self::Concept => "concepts",
            Self::Article => "articles",
            Self::Blog => "blogs",
            Self::Profile => "profiles",
        }
    }

    /// Navigation and heading label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Problem => "Problems",
            Self::Concept => "Concepts",
            Self::Article => "Articles",
            Self::Blog => "Blogs",
            Self::Profile => "Profiles",
        }
    }

    /// Output file name for a page with the given title.
    ///
    /// Profiles always use `index.html` inside their own directory.
    pub fn filename(self, title: &str) -> String {
        let id = slugify(title);
        match self {
            Self::Problem => format!("problem-{}.html", id),
            Self::Concept => format!("{}.html", id),
            Self::Article => format!("article-{}.html", id),
            Self::Blog => format!("blog-{}.html", id),
            Self::Profile => "index.html".to_string(),
        }
    }

    /// Path of the generated page relative to the site root.
    pub fn output_path(self, form: &ContentForm) -> PathBuf {
        match self {
            Self::Profile => Path::new(self.section())
                .join(&form.username)
                .join(self.filename("")),
            _ => Path::new(self.section()).join(self.filename(&form.title)),
        }
    }

    /// Directory depth of generated pages below the site root.
    pub fn depth(self) -> usize {
        match self {
            Self::Profile => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Problem => "problem",
            Self::Concept => "concept",
            Self::Article => "article",
            Self::Blog => "blog",
            Self::Profile => "profile",
        };
        f.write_str(name)
    }
}

/// Field values entered for one page.
///
/// Fields are shared across kinds; each kind reads the subset it needs and
/// ignores the rest. Every value is trimmed when loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentForm {
    pub title: String,
    pub author: String,

    pub difficulty: String,
    pub topics: String,
    pub description: String,
    pub examples: String,
    pub hints: String,
    pub related: String,

    pub category: String,
    pub complexity: String,
    pub overview: String,
    pub explanation: String,
    pub problems: String,

    pub tags: String,
    pub content: String,
    pub references: String,
    pub read_time: String,

    pub username: String,
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub image: String,
    pub socials: String,
}

impl ContentForm {
    /// Parses a form from a JSON object of string fields.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a JSON object of strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut form: Self = serde_json::from_str(json).context("Failed to parse form JSON")?;
        form.trim_fields();
        Ok(form)
    }

    /// Reads and parses a form file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a valid form.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read form file: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid form file: {}", path.display()))
    }

    fn trim_fields(&mut self) {
        for field in [
            &mut self.title,
            &mut self.author,
            &mut self.difficulty,
            &mut self.topics,
            &mut self.description,
            &mut self.examples,
            &mut self.hints,
            &mut self.related,
            &mut self.category,
            &mut self.complexity,
            &mut self.overview,
            &mut self.explanation,
            &mut self.problems,
            &mut self.tags,
            &mut self.content,
            &mut self.references,
            &mut self.read_time,
            &mut self.username,
            &mut self.name,
            &mut self.tagline,
            &mut self.bio,
            &mut self.image,
            &mut self.socials,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
    }

    /// Lists every problem that keeps the form from producing a page.
    ///
    /// # Arguments
    ///
    /// * `kind`: Kind of page the form is meant for
    ///
    /// # Returns
    ///
    /// Human readable messages, empty when the form is complete
    pub fn validation_errors(&self, kind: ContentKind) -> Vec<String> {
        let mut errors = Vec::new();
        let mut require = |value: &str, message: &str| {
            if value.is_empty() {
                errors.push(message.to_string());
            }
        };

        if kind != ContentKind::Profile {
            require(&self.title, "Title is required");
            require(&self.author, "Author is required");
        }

        match kind {
            ContentKind::Problem => {
                require(&self.difficulty, "Difficulty is required");
                require(&self.topics, "Topics are required");
                require(&self.description, "Description is required");
                require(&self.examples, "Examples are required");
            }
            ContentKind::Concept => {
                require(&self.category, "Category is required");
                require(&self.complexity, "Complexity is required");
                require(&self.overview, "Overview is required");
                require(&self.explanation, "Explanation is required");
                require(&self.examples, "Examples are required");
            }
            ContentKind::Article => {
                require(&self.tags, "Tags are required");
                require(&self.content, "Content is required");
            }
            ContentKind::Blog => {
                require(&self.tags, "Tags are required");
                require(&self.content, "Content is required");
                require(&self.read_time, "Read time is required");
            }
            ContentKind::Profile => {
                require(&self.username, "Username is required");
                require(&self.name, "Display Name is required");
                require(&self.bio, "Bio is required");
                if !self.username.is_empty() && !is_valid_username(&self.username) {
                    errors.push(
                        "Username must contain only lowercase letters, numbers, and hyphens"
                            .to_string(),
                    );
                }
            }
        }

        errors
    }

    /// Validates the form for the given kind.
    ///
    /// # Errors
    ///
    /// Returns error listing every problem found by `validation_errors`.
    pub fn validate(&self, kind: ContentKind) -> Result<()> {
        let errors = self.validation_errors(kind);
        if !errors.is_empty() {
            bail!(
                "Please fix the following errors:\n• {}",
                errors.join("\n• ")
            );
        }
        Ok(())
    }

    /// Identifier used in `data-id` attributes and file names.
    pub fn id(&self, kind: ContentKind) -> String {
        match kind {
            ContentKind::Profile => self.username.clone(),
            _ => slugify(&self.title),
        }
    }
}

fn is_valid_username(username: &str) -> bool {
    username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
