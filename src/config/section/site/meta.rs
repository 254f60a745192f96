//! `[meta]` fallback `<head>` metadata for pages that don't set their own.

use crate::config::{ConfigDiagnostics, FieldPath, util::check_http_url};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultMeta {
    pub title: String,
    pub description: String,
    pub og_image: OgImageMeta,
    /// Canonical website URL.
    pub website: Option<String>,
}

/// Fallback preview image for pages without a generated one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OgImageMeta {
    /// Site-relative path, e.g. `/images/banner.webp`.
    pub src: String,
    pub alt: String,
}

impl DefaultMeta {
    pub const WEBSITE: FieldPath = FieldPath::new("meta.website");
    pub const OG_IMAGE_SRC: FieldPath = FieldPath::new("meta.og_image.src");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(website) = &self.website {
            check_http_url(website, Self::WEBSITE, diag);
        }
        let src = &self.og_image.src;
        if !src.is_empty() && !src.starts_with('/') && url::Url::parse(src).is_err() {
            diag.error_with_hint(
                Self::OG_IMAGE_SRC,
                format!("'{src}' is neither site-relative nor an absolute URL"),
                "use a path like /images/banner.webp",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_meta_parse() {
        let config = test_parse_config(
            r#"
[meta]
title = "Jane"
description = "Notes"
website = "https://jane.github.io"
og_image = { src = "/images/banner.webp", alt = "Jane" }
"#,
        );
        assert_eq!(config.meta.og_image.src, "/images/banner.webp");
        assert_eq!(config.meta.website.as_deref(), Some("https://jane.github.io"));
    }

    #[test]
    fn test_meta_validate() {
        let meta = DefaultMeta {
            website: Some("not a url".into()),
            og_image: OgImageMeta {
                src: "images/banner.webp".into(),
                alt: String::new(),
            },
            ..DefaultMeta::default()
        };
        let mut diag = ConfigDiagnostics::new();
        meta.validate(&mut diag);
        assert!(diag.has_error_for("meta.website"));
        assert!(diag.has_error_for("meta.og_image.src"));
    }
}
