//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const CONTENT_LIST: &str = include_str!("../assets/components/content-list.css");

const CONTENT_PAGE: &str = include_str!("../assets/page-content.css");
const HOME_PAGE: &str = include_str!("../assets/page-home.css");

/// Stylesheet path below the site root, as linked by every page.
pub const STYLESHEET_PATH: &str = "assets/css/main.css";

/// Writes the bundled stylesheet below the site root
///
/// # Errors
///
/// Returns error if the assets directory cannot be created or the
/// stylesheet cannot be written.
pub fn write_css_assets(site_root: &Path) -> Result<()> {
    let css_dir = site_root.join("assets").join("css");
    fs::create_dir_all(&css_dir)
        .with_context(|| format!("Failed to create assets directory: {}", css_dir.display()))?;
    write_bundled(
        &css_dir,
        "main.css",
        &[BASE, LAYOUT, CONTENT_LIST, CONTENT_PAGE, HOME_PAGE],
    )
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_css_assets_bundles_parts() {
        // Arrange
        let temp = tempfile::tempdir().expect("Failed to create temp dir");

        // Act
        write_css_assets(temp.path()).expect("Should write assets");

        // Assert
        let css = fs::read_to_string(temp.path().join(STYLESHEET_PATH)).expect("Should exist");
        assert!(css.contains(".nav-link--active"));
        assert!(css.contains(".content-item"));
        assert!(css.contains(".category-card"));
    }
}
