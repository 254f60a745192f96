//! `build`: render every image route into the output directory.
//!
//! Phases:
//! - **Collect** - load the post collection and expand routes per variant
//! - **Clean** - optionally remove `{output}/{prefix}` of the rendered variants
//! - **Render** - generate all images in parallel, failing on the first error

use crate::{
    config::SiteConfig,
    content::Collection,
    log,
    logger::ProgressLine,
    og::{self, Route, Variant, route},
    utils::plural_count,
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::fs;

/// Render all routes of the selected variants. Returns the number of images
/// written.
///
/// `only` restricts the build to one variant, which must be enabled.
pub fn build_images(config: &SiteConfig, only: Option<Variant>) -> Result<usize> {
    let variants = select_variants(config, only)?;

    let collection_dir = config.build.collection_dir();
    let collection = Collection::load(&collection_dir)?;
    if collection.is_empty() {
        log!("build"; "no posts in {}", config.root_relative(&collection_dir).display());
    }

    let plan: Vec<(Variant, Vec<Route>)> = variants
        .into_iter()
        .map(|variant| (variant, route::routes(variant, &collection, &config.og)))
        .collect();

    if config.build.clean {
        clean_outputs(config, &plan)?;
    }

    let jobs: Vec<(Variant, &Route)> = plan
        .iter()
        .flat_map(|(variant, routes)| routes.iter().map(move |route| (*variant, route)))
        .collect();

    let counters: Vec<(&'static str, usize)> = plan
        .iter()
        .map(|(variant, routes)| (variant.prefix(), routes.len()))
        .collect();
    let progress = ProgressLine::new(&counters);

    jobs.par_iter()
        .try_for_each(|(variant, route)| -> Result<()> {
            render_route(config, *variant, route)?;
            progress.inc(variant.prefix());
            Ok(())
        })?;
    progress.finish();

    log!(
        "build";
        "{} written to {}",
        plural_count(jobs.len(), "image"),
        config.root_relative(&config.build.output).display()
    );
    Ok(jobs.len())
}

fn select_variants(config: &SiteConfig, only: Option<Variant>) -> Result<Vec<Variant>> {
    match only {
        Some(variant) if !config.og.variant(variant).enable => {
            bail!("variant `{variant}` is disabled, set `[og.{variant}] enable = true`")
        }
        Some(variant) => Ok(vec![variant]),
        None => Ok(config.og.enabled().collect()),
    }
}

fn clean_outputs(config: &SiteConfig, plan: &[(Variant, Vec<Route>)]) -> Result<()> {
    for (variant, _) in plan {
        let dir = config.build.image_dir(variant.prefix());
        if dir.exists() {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("failed to clean {}", dir.display()))?;
            crate::debug!("build"; "cleaned {}", dir.display());
        }
    }
    Ok(())
}

fn render_route(config: &SiteConfig, variant: Variant, route: &Route) -> Result<()> {
    let image = og::generate(&route.title, variant, config)
        .with_context(|| format!("failed to render {}", route.url_path(variant)))?;

    let path = route.output_path(variant, &config.build.output);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, &image.bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::Path;
    use tempfile::TempDir;

    fn site(dir: &Path) -> SiteConfig {
        let mut config = test_parse_config("[og]\nextra_pages = []\n");
        config.build.content = dir.join("content");
        config.build.output = dir.join("public");
        config.og.image.fonts = Some(vec![dir.join("fonts/Inter-Regular.ttf")]);
        config.og.og.fonts = Some(vec![dir.join("fonts/Inter-Bold.ttf")]);
        config
    }

    fn write_post(dir: &Path, id: &str, title: &str) {
        let path = dir.join("content/blog").join(id);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("---\ntitle: {title}\n---\n")).unwrap();
    }

    #[test]
    fn test_empty_collection() {
        let dir = TempDir::new().unwrap();
        let config = site(dir.path());
        assert_eq!(build_images(&config, None).unwrap(), 0);
    }

    #[test]
    fn test_missing_font_fails_build() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "hello/index.md", "Hello World");

        let err = build_images(&site(dir.path()), Some(Variant::Og)).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("/og/blog/hello.png"), "{message}");
        assert!(message.contains("Inter-Bold.ttf"), "{message}");
        assert!(!dir.path().join("public/og/blog/hello.png").exists());
    }

    #[test]
    fn test_disabled_variant() {
        let dir = TempDir::new().unwrap();
        let mut config = site(dir.path());
        config.og.image.enable = false;

        let err = build_images(&config, Some(Variant::Image)).unwrap_err();
        assert!(err.to_string().contains("disabled"));
        assert_eq!(select_variants(&config, None).unwrap(), [Variant::Og]);
    }

    #[test]
    fn test_clean_removes_stale_images() {
        let dir = TempDir::new().unwrap();
        let stale = dir.path().join("public/og/blog/old.png");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, b"png").unwrap();
        let keep = dir.path().join("public/index.html");
        fs::write(&keep, b"<html>").unwrap();

        let mut config = site(dir.path());
        config.build.clean = true;
        assert_eq!(build_images(&config, None).unwrap(), 0);

        assert!(!stale.exists());
        assert!(keep.exists());
    }
}
