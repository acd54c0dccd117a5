//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/layout.css");

const POST_PAGE: &str = include_str!("../assets/post.css");
const INDEX_PAGE: &str = include_str!("../assets/index.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "post.css", &[BASE, LAYOUT, POST_PAGE])?;
    write_bundled(assets_dir, "index.css", &[BASE, LAYOUT, INDEX_PAGE])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    tracing::debug!(asset = name, "Wrote stylesheet");
    Ok(())
}
