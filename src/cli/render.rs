//! `render`: one title to one PNG file.

use crate::{
    config::SiteConfig,
    log,
    og::{self, Variant},
};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Render `title` and write it to `path`, or `{variant}.png` in the cwd.
pub fn render_title(
    config: &SiteConfig,
    title: &str,
    variant: Variant,
    path: Option<&Path>,
) -> Result<PathBuf> {
    let path = path.map_or_else(|| PathBuf::from(format!("{variant}.png")), Path::to_path_buf);

    let image = og::generate(title, variant, config)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, &image.bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;

    log!("render"; "{} ({}x{})", path.display(), image.width, image.height);
    Ok(path)
}
