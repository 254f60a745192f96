//! Frontmatter extraction for markdown posts.
//!
//! Two formats are recognized at the start of a file:
//!
//! ```text
//! ---                        +++
//! title: Hello               title = "Hello"
//! date: 2024-06-15           date = 2024-06-15
//! tags: [rust, astro]        tags = ["rust", "astro"]
//! ---                        +++
//! ```
//!
//! The `---` form is a flat `key: value` subset of YAML, enough for post
//! metadata. Nested mappings are not supported.

use anyhow::{Result, anyhow};
use serde::Deserialize;

/// Raw frontmatter fields, before required-field checks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Date as written, normalized to a string.
    #[serde(deserialize_with = "de_date")]
    pub date: Option<String>,
    pub draft: bool,
    pub tags: Vec<String>,
    /// Explicit URL slug, overriding the one derived from the file path.
    pub slug: Option<String>,
}

/// Accept both TOML strings and TOML datetimes.
fn de_date<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<toml::Value>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        toml::Value::String(s) => s,
        toml::Value::Datetime(d) => d.to_string(),
        other => other.to_string(),
    }))
}

/// Split `content` into frontmatter and body.
///
/// Returns `Ok(None)` when the file has no frontmatter block.
pub fn extract(content: &str) -> Result<Option<(FrontMatter, &str)>> {
    match detect(content) {
        Some((fm, body, true)) => {
            let meta = toml::from_str(fm).map_err(|e| anyhow!("invalid TOML frontmatter: {e}"))?;
            Ok(Some((meta, body)))
        }
        Some((fm, body, false)) => Ok(Some((parse_yaml_like(fm), body))),
        None => Ok(None),
    }
}

/// Detect and extract frontmatter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        let Some(rest) = trimmed.strip_prefix(fence) else {
            continue;
        };
        let close = format!("\n{fence}");
        if let Some(end) = rest.find(&close) {
            let fm = rest[..end].trim();
            let body = rest[end + close.len()..].trim_start_matches(['\r', '\n']);
            return Some((fm, body, is_toml));
        }
    }

    None
}

/// Parse simple YAML-like frontmatter (key: value).
fn parse_yaml_like(content: &str) -> FrontMatter {
    let mut meta = FrontMatter::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match key.trim().to_lowercase().as_str() {
            "title" => meta.title = Some(unquote(value).to_string()),
            "description" => meta.description = Some(unquote(value).to_string()),
            "date" => meta.date = Some(unquote(value).to_string()),
            "slug" => meta.slug = Some(unquote(value).to_string()),
            "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
            "tags" => meta.tags = parse_list(value),
            _ => {}
        }
    }

    meta
}

/// Strip one pair of matching quotes.
fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|s| s.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

/// `[a, "b"]` or `a, b` -> `["a", "b"]`
fn parse_list(s: &str) -> Vec<String> {
    let s = s
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(s);
    s.split(',')
        .map(|item| unquote(item.trim()).to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_frontmatter() {
        let content = "---\ntitle: Hello\ndate: 2024-01-01\ntags: a, b\n---\n\n# Body";
        let (meta, body) = extract(content).unwrap().unwrap();

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.date.as_deref(), Some("2024-01-01"));
        assert_eq!(meta.tags, ["a", "b"]);
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_yaml_quoted_values() {
        let content = "---\ntitle: \"Rust: a love letter\"\ndescription: 'notes'\ntags: [\"rust\", 'astro']\ndraft: true\nslug: custom/path\n---\n";
        let (meta, _) = extract(content).unwrap().unwrap();

        // Only the first colon separates key and value
        assert_eq!(meta.title.as_deref(), Some("Rust: a love letter"));
        assert_eq!(meta.description.as_deref(), Some("notes"));
        assert_eq!(meta.tags, ["rust", "astro"]);
        assert!(meta.draft);
        assert_eq!(meta.slug.as_deref(), Some("custom/path"));
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntitle = \"Hello\"\ndate = 2024-06-15\ntags = [\"a\", \"b\"]\n+++\n\n# Body";
        let (meta, body) = extract(content).unwrap().unwrap();

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.date.as_deref(), Some("2024-06-15"));
        assert_eq!(meta.tags, ["a", "b"]);
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_toml_string_date() {
        let content = "+++\ntitle = \"Hello\"\ndate = \"2024-06-15T08:00:00Z\"\n+++\n";
        let (meta, _) = extract(content).unwrap().unwrap();
        assert_eq!(meta.date.as_deref(), Some("2024-06-15T08:00:00Z"));
    }

    #[test]
    fn test_toml_datetime_with_time() {
        let content = "+++\ntitle = \"Hello\"\ndate = 2024-03-16T10:00:00Z\n+++\n";
        let (meta, _) = extract(content).unwrap().unwrap();
        assert_eq!(meta.date.as_deref(), Some("2024-03-16T10:00:00Z"));
    }

    #[test]
    fn test_invalid_toml() {
        let content = "+++\ntitle = \n+++\n";
        assert!(extract(content).is_err());
    }

    #[test]
    fn test_no_frontmatter() {
        assert!(extract("# Just content").unwrap().is_none());
        // Unterminated block
        assert!(extract("---\ntitle: Hello\n").unwrap().is_none());
    }
}
