//! Loading the site content file

use std::path::Path;

use anyhow::{Context, Result};

use super::model::SiteData;

/// Load and parse the portfolio content from a JSON file
pub fn load(path: impl AsRef<Path>) -> Result<SiteData> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
