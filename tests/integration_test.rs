//! Integration tests for codeprob.
//!
//! Tests form loading, page writing and site building against temporary
//! directories.

mod common;

use anyhow::Result;
use codeprob::{
    ConfigEntry, ContentForm, ContentKind, SiteIndex, SiteInfo, build_site, write_page,
};
use common::{blog_form, concept_form, problem_form, test_date, write_json};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

/// Tests that a problem page lands in the problems section with its entry.
#[test]
fn test_write_problem_page() -> Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let site = SiteInfo::new("CodeProb", 2026);

    // Act
    let written = write_page(
        ContentKind::Problem,
        &problem_form(),
        &site,
        test_date(),
        temp.path(),
    )?;

    // Assert
    assert_eq!(written.path, temp.path().join("problems/problem-two-sum.html"));
    let html = fs::read_to_string(&written.path)?;
    assert!(html.contains("<title>Two Sum - CodeProb</title>"));
    assert!(html.contains("<code>target</code>"));
    assert!(html.contains("<h3>Example 1:</h3>"));
    assert!(html.contains("<strong>hash map</strong>"));
    assert!(temp.path().join("assets/css/main.css").is_file());

    let ConfigEntry::Content(entry) = written.entry else {
        panic!("Expected a content entry");
    };
    assert_eq!(entry.filename, "problem-two-sum.html");
    assert_eq!(entry.topics, vec!["arrays", "hash tables"]);
    assert_eq!(entry.date_added, test_date());

    Ok(())
}

/// Tests that concept pages use the bare slug as file name.
#[test]
fn test_write_concept_page() -> Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let site = SiteInfo::new("CodeProb", 2026);

    // Act
    let written = write_page(
        ContentKind::Concept,
        &concept_form(),
        &site,
        test_date(),
        temp.path(),
    )?;

    // Assert
    assert_eq!(written.path, temp.path().join("concepts/hash-tables.html"));
    let html = fs::read_to_string(&written.path)?;
    assert!(html.contains("<pre><code class=\"language-python\">d = {}</code></pre>"));
    assert!(html.contains("<h2>Buckets</h2>"));

    Ok(())
}

/// Tests loading a form file and writing a blog page from it.
#[test]
fn test_load_form_and_write_blog() -> Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let form_path = write_json(
        temp.path(),
        "blog.json",
        &json!({
            "title": "  Why I Write Tests  ",
            "author": "Grace Hopper",
            "tags": "testing, practice",
            "content": "Tests are *documentation*.",
            "readTime": "3 min",
            "unknownField": true
        }),
    )?;
    let output = temp.path().join("site");
    let site = SiteInfo::new("CodeProb", 2026);

    // Act
    let form = ContentForm::load(&form_path)?;
    let written = write_page(ContentKind::Blog, &form, &site, test_date(), &output)?;

    // Assert
    assert_eq!(form.title, "Why I Write Tests");
    assert_eq!(written.path, output.join("blogs/blog-why-i-write-tests.html"));
    let entry = serde_json::to_value(&written.entry)?;
    assert_eq!(entry["readTime"], "3 min");
    assert_eq!(entry["dateAdded"], "2026-10-15");

    Ok(())
}

/// Tests that a form with missing fields reports every problem at once.
#[test]
fn test_write_page_reports_all_validation_errors() -> Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let form = ContentForm {
        title: "Untagged".to_string(),
        author: "Grace".to_string(),
        ..Default::default()
    };

    // Act
    let result = write_page(
        ContentKind::Blog,
        &form,
        &SiteInfo::new("CodeProb", 2026),
        test_date(),
        temp.path(),
    );

    // Assert
    let message = result.expect_err("Blog without content should fail").to_string();
    assert!(message.contains("Tags are required"), "{}", message);
    assert!(message.contains("Content is required"), "{}", message);
    assert!(message.contains("Read time is required"), "{}", message);

    Ok(())
}

/// Tests the full authoring loop: write pages, register entries, build site.
#[test]
fn test_written_entries_feed_site_build() -> Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let site = SiteInfo::new("CodeProb", 2026);
    let problem = write_page(
        ContentKind::Problem,
        &problem_form(),
        &site,
        test_date(),
        temp.path(),
    )?;
    let blog = write_page(ContentKind::Blog, &blog_form(), &site, test_date(), temp.path())?;
    let config = json!({
        "site": {"name": "CodeProb"},
        "content": {
            "problems": [serde_json::to_value(&problem.entry)?],
            "blogs": [serde_json::to_value(&blog.entry)?]
        }
    });
    let config_path = write_json(temp.path(), "contributor-config.json", &config)?;

    // Act
    let index = SiteIndex::load(&config_path)?;
    let summary = build_site(&index, &site, temp.path())?;

    // Assert
    assert_eq!(summary.entries, 2);
    assert_eq!(summary.pages.len(), 5);

    let problems = fs::read_to_string(temp.path().join("problems/index.html"))?;
    assert!(problems.contains("<a href=\"problem-two-sum.html\">Two Sum</a>"));

    let home = fs::read_to_string(temp.path().join("index.html"))?;
    assert!(home.contains("href=\"blogs/blog-why-i-write-tests.html\""));
    assert!(home.contains("href=\"problems/problem-two-sum.html\""));

    let concepts = fs::read_to_string(temp.path().join("concepts/index.html"))?;
    assert!(concepts.contains("No concepts available yet"));

    assert!(problem.path.is_file(), "Content pages must survive a site build");

    Ok(())
}

/// Tests that configured entries without a page on disk are left out.
#[test]
fn test_site_build_skips_missing_content_files() -> Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let site = SiteInfo::new("CodeProb", 2026);
    let concept = write_page(
        ContentKind::Concept,
        &concept_form(),
        &site,
        test_date(),
        temp.path(),
    )?;
    let config = json!({"content": {"concepts": [
        serde_json::to_value(&concept.entry)?,
        {
            "filename": "concept-never-written.html",
            "title": "Never Written",
            "author": "Ada",
            "dateAdded": "2026-03-01",
            "category": "Algorithms",
            "complexity": "Beginner"
        }
    ]}});
    let config_path = write_json(temp.path(), "contributor-config.json", &config)?;

    // Act
    let index = SiteIndex::load(&config_path)?;
    let summary = build_site(&index, &site, temp.path())?;

    // Assert
    assert_eq!(index.len(), 2);
    assert_eq!(summary.entries, 1);
    assert_eq!(summary.skipped, 1);

    let concepts = fs::read_to_string(temp.path().join("concepts/index.html"))?;
    let written = concept.path.file_name().and_then(|name| name.to_str());
    assert!(concepts.contains(written.expect("Page should have a file name")));
    assert!(!concepts.contains("concept-never-written.html"));
    assert!(concepts.contains("<span class=\"badge\">1 concepts</span>"));

    let home = fs::read_to_string(temp.path().join("index.html"))?;
    assert!(!home.contains("Never Written"));

    Ok(())
}

/// Tests that a malformed site configuration names the file.
#[test]
fn test_site_index_load_reports_path() -> Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let path = temp.path().join("contributor-config.json");
    fs::write(&path, "{ not json")?;

    // Act
    let result = SiteIndex::load(&path);

    // Assert
    let message = format!("{:#}", result.expect_err("Should fail"));
    assert!(message.contains("contributor-config.json"), "{}", message);

    Ok(())
}
