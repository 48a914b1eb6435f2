//! Writes generated pages and the static assets they reference.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const STYLE_CSS: &str = include_str!("../assets/style.css");
const RDFCONV_JS: &str = include_str!("../assets/rdfconv.js");

/// Writes an HTML page to the given path, creating parent directories as
/// needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub fn write_page(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write page: {}", path.display()))?;
    Ok(())
}

/// Writes the stylesheet and script next to the generated pages. Files
/// already present are left untouched so local edits survive re-runs.
///
/// # Errors
///
/// Returns an error if a missing asset cannot be written.
pub fn write_assets(folder: &Path) -> Result<()> {
    for (name, content) in [("style.css", STYLE_CSS), ("rdfconv.js", RDFCONV_JS)] {
        let path = folder.join(name);
        if path.exists() {
            continue;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write asset: {}", path.display()))?;
    }
    Ok(())
}
