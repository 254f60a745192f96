//! `check`: validate the config and the post collection.
//!
//! The config itself is validated while loading; this adds the checks that
//! need the filesystem (posts parse, font files exist) and optionally dumps
//! everything templates read as JSON.

use crate::{
    config::SiteConfig,
    content::{Collection, Post},
    log,
    utils::plural_count,
};
use anyhow::{Result, bail};
use serde::Serialize;
use std::path::PathBuf;

/// Resolved data handed to page templates.
#[derive(Debug, Serialize)]
struct Report<'a> {
    config: &'a SiteConfig,
    posts: &'a [Post],
    /// Ids shown on the homepage, newest first.
    homepage: Vec<&'a str>,
}

pub fn check_site(config: &SiteConfig, json: bool) -> Result<()> {
    let collection = Collection::load(&config.build.collection_dir())?;

    let missing = missing_fonts(config);
    if !missing.is_empty() {
        for path in &missing {
            log!("error"; "font not found: {}", config.root_relative(path).display());
        }
        bail!("{} missing", plural_count(missing.len(), "font file"));
    }

    if json {
        let report = Report {
            config,
            posts: collection.posts(),
            homepage: collection
                .latest(config.site.homepage_posts())
                .into_iter()
                .map(|post| post.id.as_str())
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let drafts = collection.posts().iter().filter(|p| p.data.draft).count();
    log!(
        "check";
        "{} ({} draft), {} enabled",
        plural_count(collection.len(), "post"),
        drafts,
        plural_count(config.og.enabled().count(), "variant")
    );
    log!("check"; "ok");
    Ok(())
}

/// Configured font files of enabled variants that do not exist.
fn missing_fonts(config: &SiteConfig) -> Vec<PathBuf> {
    let mut missing: Vec<PathBuf> = config
        .og
        .enabled()
        .flat_map(|variant| config.og.fonts(variant))
        .filter(|path| !path.is_file())
        .collect();
    missing.sort();
    missing.dedup();
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_fonts_deduplicated() {
        let dir = TempDir::new().unwrap();
        let bold = dir.path().join("Inter-Bold.ttf");
        let regular = dir.path().join("Inter-Regular.ttf");
        fs::write(&regular, b"").unwrap();

        let mut config = test_parse_config("");
        config.og.image.fonts = Some(vec![regular, bold.clone()]);
        config.og.og.fonts = Some(vec![bold.clone()]);
        assert_eq!(missing_fonts(&config), [bold]);

        config.og.image.enable = false;
        config.og.og.enable = false;
        assert!(missing_fonts(&config).is_empty());
    }

    #[test]
    fn test_check_reports_missing_fonts() {
        let dir = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.build.content = dir.path().join("content");
        config.og.og.fonts = Some(vec![dir.path().join("missing.ttf")]);
        config.og.image.enable = false;

        let err = check_site(&config, false).unwrap_err();
        assert_eq!(err.to_string(), "1 font file missing");
    }

    #[test]
    fn test_report_json() {
        let config = test_parse_config("");
        let collection = Collection::new(vec![
            Post::parse("a.md", "---\ntitle: A\ndate: 2024-01-01\n---\n").unwrap(),
            Post::parse("b.md", "---\ntitle: B\ndate: 2024-03-01\n---\n").unwrap(),
        ]);
        let report = Report {
            config: &config,
            posts: collection.posts(),
            homepage: collection.latest(1).into_iter().map(|p| p.id.as_str()).collect(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["config"]["site"]["name"], "Test");
        assert_eq!(json["posts"][1]["data"]["title"], "B");
        assert_eq!(json["homepage"], serde_json::json!(["b.md"]));
        assert!(json["config"].get("cli").is_none());
    }
}
