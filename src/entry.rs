//! `contributor-config.json` entries.
//!
//! Every generated page is registered by adding an entry to the site
//! configuration. The writer produces entries; the site builder reads them
//! back to render the category listings and the homepage.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::content::{ContentForm, ContentKind};
use crate::util::split_list;

/// Listing record for a problem, concept, article, or blog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub filename: String,
    pub title: String,
    pub author: String,
    pub date_added: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Listing record for a contributor profile, kept in `profiles.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEntry {
    pub username: String,
    pub display_name: String,
    pub date_added: NaiveDate,
}

/// Entry produced for one generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigEntry {
    Content(ContentEntry),
    Profile(ProfileEntry),
}

impl ConfigEntry {
    /// Builds the entry registering a page generated from `form`.
    ///
    /// # Arguments
    ///
    /// * `kind`: Kind of the generated page
    /// * `form`: Validated form the page was generated from
    /// * `date`: Date recorded as `dateAdded`
    pub fn from_form(kind: ContentKind, form: &ContentForm, date: NaiveDate) -> Self {
        if kind == ContentKind::Profile {
            return Self::Profile(ProfileEntry {
                username: form.username.clone(),
                display_name: form.name.clone(),
                date_added: date,
            });
        }

        let mut entry = ContentEntry {
            filename: kind.filename(&form.title),
            title: form.title.clone(),
            author: form.author.clone(),
            date_added: date,
            difficulty: None,
            topics: Vec::new(),
            category: None,
            complexity: None,
            tags: Vec::new(),
            read_time: None,
            description: None,
        };

        match kind {
            ContentKind::Problem => {
                entry.difficulty = Some(form.difficulty.clone());
                entry.topics = split_list(&form.topics);
            }
            ContentKind::Concept => {
                entry.category = Some(form.category.clone());
                entry.complexity = Some(form.complexity.clone());
            }
            ContentKind::Article => {
                entry.tags = split_list(&form.tags);
            }
            ContentKind::Blog => {
                entry.tags = split_list(&form.tags);
                entry.read_time = Some(form.read_time.clone());
            }
            ContentKind::Profile => {}
        }

        Self::Content(entry)
    }

    /// Configuration file the entry has to be added to.
    pub fn config_file(&self) -> &'static str {
        match self {
            Self::Content(_) => "contributor-config.json",
            Self::Profile(_) => "profiles.json",
        }
    }

    /// Pretty printed JSON for pasting into the configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config entry")
    }
}

/// Published content listed in `contributor-config.json`.
///
/// Entries that fail to deserialize are skipped with a warning so one bad
/// record does not hide the rest of the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawSiteIndex")]
pub struct SiteIndex {
    pub content: SiteContent,
}

/// Entry arrays per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteContent {
    pub problems: Vec<ContentEntry>,
    pub concepts: Vec<ContentEntry>,
    pub articles: Vec<ContentEntry>,
    pub blogs: Vec<ContentEntry>,
}

#[derive(Deserialize)]
struct RawSiteIndex {
    #[serde(default)]
    content: RawSiteContent,
}

/// Category arrays before per-entry validation. Missing arrays are empty.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawSiteContent {
    problems: Vec<serde_json::Value>,
    concepts: Vec<serde_json::Value>,
    articles: Vec<serde_json::Value>,
    blogs: Vec<serde_json::Value>,
}

impl From<RawSiteIndex> for SiteIndex {
    fn from(raw: RawSiteIndex) -> Self {
        let RawSiteContent {
            problems,
            concepts,
            articles,
            blogs,
        } = raw.content;

        Self {
            content: SiteContent {
                problems: parse_entries(ContentKind::Problem, problems),
                concepts: parse_entries(ContentKind::Concept, concepts),
                articles: parse_entries(ContentKind::Article, articles),
                blogs: parse_entries(ContentKind::Blog, blogs),
            },
        }
    }
}

fn parse_entries(kind: ContentKind, values: Vec<serde_json::Value>) -> Vec<ContentEntry> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| {
            serde_json::from_value(value)
                .inspect_err(|e| {
                    warn!(
                        kind = %kind,
                        position,
                        error = %e,
                        "malformed config entry, skipping"
                    );
                })
                .ok()
        })
        .collect()
}

impl SiteIndex {
    /// Parses the configuration document.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed or a category is not an array.
    /// Individual entries that do not parse are skipped.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse site configuration")
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site configuration: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid site configuration: {}", path.display()))
    }

    /// Entries of one category in configuration order.
    pub fn entries(&self, kind: ContentKind) -> &[ContentEntry] {
        match kind {
            ContentKind::Problem => &self.content.problems,
            ContentKind::Concept => &self.content.concepts,
            ContentKind::Article => &self.content.articles,
            ContentKind::Blog => &self.content.blogs,
            ContentKind::Profile => &[],
        }
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(ContentKind, &ContentEntry) -> bool) {
        let SiteContent {
            problems,
            concepts,
            articles,
            blogs,
        } = &mut self.content;

        problems.retain(|entry| keep(ContentKind::Problem, entry));
        concepts.retain(|entry| keep(ContentKind::Concept, entry));
        articles.retain(|entry| keep(ContentKind::Article, entry));
        blogs.retain(|entry| keep(ContentKind::Blog, entry));
    }

    /// Entries of one category, newest first.
    pub fn newest_first(&self, kind: ContentKind) -> Vec<&ContentEntry> {
        let mut entries: Vec<&ContentEntry> = self.entries(kind).iter().collect();
        entries.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        entries
    }

    /// Most recent entries across all categories.
    pub fn recent(&self, limit: usize) -> Vec<(ContentKind, &ContentEntry)> {
        let mut entries: Vec<(ContentKind, &ContentEntry)> = ContentKind::LISTED
            .iter()
            .flat_map(|&kind| self.entries(kind).iter().map(move |entry| (kind, entry)))
            .collect();
        entries.sort_by(|(_, a), (_, b)| b.date_added.cmp(&a.date_added));
        entries.truncate(limit);
        entries
    }

    /// Total number of listed entries.
    pub fn len(&self) -> usize {
        ContentKind::LISTED
            .iter()
            .map(|&kind| self.entries(kind).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
