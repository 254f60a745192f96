//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/blog/  ← cwd
/// /home/user/site/site.toml      ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

/// Resolve `path` against `root`, canonicalizing when the target exists.
///
/// Missing targets keep the joined path so later diagnostics can name them.
pub fn normalize_path(root: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };
    joined.canonicalize().unwrap_or(joined)
}

/// Record an error unless `url` is an absolute `http(s)` URL with a host.
pub fn check_http_url(url: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    const HINT: &str = "use format like https://example.com";

    match url::Url::parse(url) {
        Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => diag.error_with_hint(
            field,
            format!("'{url}' uses unsupported scheme '{}'", parsed.scheme()),
            HINT,
        ),
        Ok(parsed) if parsed.host_str().is_none_or(str::is_empty) => {
            diag.error_with_hint(field, format!("'{url}' has no host"), HINT);
        }
        Ok(_) => {}
        Err(e) => diag.error_with_hint(field, format!("'{url}' is not a valid URL: {e}"), HINT),
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FIELD: FieldPath = FieldPath::new("meta.website");

    fn check(url: &str) -> bool {
        let mut diag = ConfigDiagnostics::new();
        check_http_url(url, FIELD, &mut diag);
        !diag.has_errors()
    }

    #[test]
    fn test_check_http_url() {
        assert!(check("https://vincentcayadi.github.io/"));
        assert!(check("http://localhost:4321/blog"));

        // No scheme
        assert!(!check("example.com"));
        // Wrong scheme
        assert!(!check("mailto:me@example.com"));
        assert!(!check("ftp://example.com"));
        assert!(!check(""));
    }

    #[test]
    fn test_check_http_url_reports_field() {
        let mut diag = ConfigDiagnostics::new();
        check_http_url("not a url", FIELD, &mut diag);
        assert!(diag.has_error_for("meta.website"));
        assert!(diag.errors()[0].hint.is_some());
    }

    #[test]
    fn test_normalize_path() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("fonts")).unwrap();
        fs::write(dir.path().join("fonts/a.ttf"), b"").unwrap();

        let existing = normalize_path(dir.path(), Path::new("fonts/a.ttf"));
        assert!(existing.is_absolute());
        assert!(existing.ends_with("fonts/a.ttf"));

        let missing = normalize_path(dir.path(), Path::new("fonts/missing.ttf"));
        assert_eq!(missing, dir.path().join("fonts/missing.ttf"));

        let absolute = normalize_path(dir.path(), Path::new("/opt/fonts/b.ttf"));
        assert_eq!(absolute, PathBuf::from("/opt/fonts/b.ttf"));
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("site.toml");
        fs::write(&config, "").unwrap();

        assert_eq!(find_config_file(&config), Some(config.clone()));
        assert_eq!(find_config_file(&dir.path().join("nope.toml")), None);
    }
}
