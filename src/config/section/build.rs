//! `[build]` section configuration.
//!
//! Paths used by the image build plus the platform settings the page build
//! reads as-is.
//!
//! # Example
//!
//! ```toml
//! [build]
//! url = "https://vincentcayadi.github.io"   # Deployed site URL
//! content = "content"                       # Content root (relative to site root)
//! collection = "blog"                       # Post collection under `content`
//! output = "public"                         # Output directory (relative to site root)
//! integrations = ["mdx", "sitemap", "tailwind"]
//!
//! [build.markdown]
//! shiki_theme = "kanagawa-dragon"           # Code highlighting theme
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, util::check_http_url};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Deployed site URL.
    pub url: Option<String>,

    /// Content root directory.
    pub content: PathBuf,

    /// Post collection directory name, relative to `content`.
    pub collection: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Markdown rendering settings.
    pub markdown: MarkdownConfig,

    /// Page build integrations, passed through untouched.
    pub integrations: Vec<String>,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub shiki_theme: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            shiki_theme: "kanagawa-dragon".into(),
        }
    }
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            url: None,
            content: "content".into(),
            collection: "blog".into(),
            output: "public".into(),
            markdown: MarkdownConfig::default(),
            integrations: vec!["mdx".into(), "sitemap".into(), "tailwind".into()],
            clean: false,
        }
    }
}

impl BuildSectionConfig {
    pub const URL: FieldPath = FieldPath::new("build.url");
    pub const COLLECTION: FieldPath = FieldPath::new("build.collection");

    /// Directory holding the post collection.
    pub fn collection_dir(&self) -> PathBuf {
        self.content.join(&self.collection)
    }

    /// Output directory for one image route prefix (`image`, `og`).
    pub fn image_dir(&self, prefix: impl AsRef<Path>) -> PathBuf {
        self.output.join(prefix)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url {
            check_http_url(url, Self::URL, diag);
        }

        if self.collection.as_os_str().is_empty() || self.collection.is_absolute() {
            diag.error_with_hint(
                Self::COLLECTION,
                format!("'{}' must be a directory name under content", self.collection.display()),
                "collection = \"blog\"",
            );
        }
    }
}
