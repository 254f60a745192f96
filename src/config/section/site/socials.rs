//! `[[socials]]` links; list order is display order.

use crate::config::{ConfigDiagnostics, FieldPath, util::check_http_url};
use serde::{Deserialize, Serialize};

/// One social link shown in the footer/header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub name: String,
    pub href: String,
}

impl Social {
    /// Each entry needs a non-empty name and an absolute http(s) URL.
    pub fn validate_all(socials: &[Social], diag: &mut ConfigDiagnostics) {
        for (i, social) in socials.iter().enumerate() {
            if social.name.trim().is_empty() {
                diag.error(
                    FieldPath::indexed("socials", i, "name"),
                    "social link name must not be empty",
                );
            }
            check_http_url(&social.href, FieldPath::indexed("socials", i, "href"), diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_socials_keep_order() {
        let config = test_parse_config(
            r#"
[[socials]]
name = "GitHub"
href = "https://github.com/someone"

[[socials]]
name = "LinkedIn"
href = "https://www.linkedin.com/in/someone"
"#,
        );
        let names: Vec<_> = config.socials.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["GitHub", "LinkedIn"]);
    }

    #[test]
    fn test_socials_validate() {
        let socials = vec![
            Social {
                name: "GitHub".into(),
                href: "https://github.com/someone".into(),
            },
            Social {
                name: " ".into(),
                href: "github.com/someone".into(),
            },
            Social {
                name: "Mail".into(),
                href: "mailto:me@example.com".into(),
            },
        ];
        let mut diag = ConfigDiagnostics::new();
        Social::validate_all(&socials, &mut diag);

        assert!(!diag.has_error_for("socials[0].name"));
        assert!(!diag.has_error_for("socials[0].href"));
        assert!(diag.has_error_for("socials[1].name"));
        assert!(diag.has_error_for("socials[1].href"));
        assert!(diag.has_error_for("socials[2].href"));
    }
}
