//! `[theme]` section configuration.
//!
//! Presentation switches consumed by the page templates.
//!
//! # Example
//!
//! ```toml
//! [theme.site]
//! website = "https://vincentcayadi.github.io/"
//! title = "Vincent's Blog"
//! author = "Vincent Cayadi"
//! language = "en-US"
//!
//! [theme.general]
//! content_width = "50rem"
//! centered_layout = true
//! theme_toggle = true
//! post_list_dotted_divider = true
//! footer = true
//! fade_animation = true
//!
//! [theme.date]
//! date_format = "YYYY-MM-DD"
//! date_separator = "."
//! date_on_right = true
//!
//! [theme.post]
//! reading_time = true
//! toc = true
//! image_viewer = true
//! copy_code = true
//! ```

mod date;

pub use date::DateConfig;

use crate::config::{ConfigDiagnostics, FieldPath, util::check_http_url};
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub site: ThemeSiteInfo,
    pub general: GeneralConfig,
    pub date: DateConfig,
    pub post: PostConfig,
}

/// Site info as the theme displays it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSiteInfo {
    /// Site domain.
    pub website: Option<String>,
    pub title: String,
    pub author: String,
    pub description: String,
    /// Default language (BCP 47 tag).
    pub language: String,
}

impl Default for ThemeSiteInfo {
    fn default() -> Self {
        Self {
            website: None,
            title: String::new(),
            author: String::new(),
            description: String::new(),
            language: "en-US".into(),
        }
    }
}

/// Layout and global toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Content area width as a CSS length.
    pub content_width: String,
    /// `false` for left-aligned layout.
    pub centered_layout: bool,
    /// Show the theme toggle button (system theme by default).
    pub theme_toggle: bool,
    pub post_list_dotted_divider: bool,
    pub footer: bool,
    pub fade_animation: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            content_width: "50rem".into(),
            centered_layout: true,
            theme_toggle: true,
            post_list_dotted_divider: true,
            footer: true,
            fade_animation: true,
        }
    }
}

/// Per-post features.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostConfig {
    pub reading_time: bool,
    /// Table of contents, shown when there is enough page width.
    pub toc: bool,
    pub image_viewer: bool,
    /// Copy button in code blocks.
    pub copy_code: bool,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            reading_time: true,
            toc: true,
            image_viewer: true,
            copy_code: true,
        }
    }
}

const CSS_UNITS: [&str; 7] = ["rem", "em", "px", "ch", "vw", "%", "pt"];

impl ThemeConfig {
    pub const WEBSITE: FieldPath = FieldPath::new("theme.site.website");
    pub const LANGUAGE: FieldPath = FieldPath::new("theme.site.language");
    pub const CONTENT_WIDTH: FieldPath = FieldPath::new("theme.general.content_width");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(website) = &self.site.website {
            check_http_url(website, Self::WEBSITE, diag);
        }

        if !is_language_tag(&self.site.language) {
            diag.error_with_hint(
                Self::LANGUAGE,
                format!("'{}' is not a language tag", self.site.language),
                "use a tag like en-US",
            );
        }

        if !is_css_length(&self.general.content_width) {
            diag.error_with_hint(
                Self::CONTENT_WIDTH,
                format!("'{}' is not a CSS length", self.general.content_width),
                format!("use a number followed by one of: {}", CSS_UNITS.join(", ")),
            );
        }
    }
}

/// `50rem`, `720px`, `100%`, `42.5ch`.
fn is_css_length(value: &str) -> bool {
    let value = value.trim();
    CSS_UNITS.iter().any(|unit| {
        value
            .strip_suffix(unit)
            .is_some_and(|n| !n.is_empty() && n.parse::<f32>().is_ok_and(|n| n > 0.0))
    })
}

/// Subtags of ASCII alphanumerics separated by `-`, primary subtag 2-3 letters.
fn is_language_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let primary_ok = parts
        .next()
        .is_some_and(|p| (2..=3).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()));
    primary_ok && parts.all(|p| (1..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric()))
}
