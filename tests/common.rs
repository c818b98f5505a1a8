//! Shared test utilities for integration tests.
//!
//! Provides form fixtures for every content kind and helpers for writing
//! input files into temporary directories.

#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use codeprob::ContentForm;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed publication date used across tests.
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).expect("Valid date")
}

/// Complete problem form.
pub fn problem_form() -> ContentForm {
    ContentForm {
        title: "Two Sum".to_string(),
        author: "Ada Lovelace".to_string(),
        difficulty: "easy".to_string(),
        topics: "arrays, hash tables".to_string(),
        description: "Return indices of the two numbers adding up to `target`.".to_string(),
        examples: "Example 1:\nInput: nums = [2,7,11,15], target = 9\nOutput: [0,1]".to_string(),
        hints: "Try a **hash map**.".to_string(),
        related: "- [Hash Tables](../concepts/hash-tables.html)".to_string(),
        ..Default::default()
    }
}

/// Complete concept form.
pub fn concept_form() -> ContentForm {
    ContentForm {
        title: "Hash Tables".to_string(),
        author: "Ada Lovelace".to_string(),
        category: "data-structures".to_string(),
        complexity: "beginner".to_string(),
        overview: "Key to value lookup in constant time.".to_string(),
        explanation: "## Buckets\nKeys are hashed into buckets.".to_string(),
        examples: "```python\nd = {}\n```".to_string(),
        problems: "1. [Two Sum](../problems/problem-two-sum.html)".to_string(),
        ..Default::default()
    }
}

/// Complete blog form.
pub fn blog_form() -> ContentForm {
    ContentForm {
        title: "Why I Write Tests".to_string(),
        author: "Grace Hopper".to_string(),
        tags: "testing, practice".to_string(),
        content: "Tests are *documentation*.\n\n> Trust, but verify.".to_string(),
        read_time: "3 min".to_string(),
        ..Default::default()
    }
}

/// Writes a JSON document to `name` inside `dir`.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value)?)?;
    Ok(path)
}
