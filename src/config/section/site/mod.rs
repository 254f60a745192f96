//! `[site]` section plus the page-level tables that sit next to it.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Vincent Cayadi"
//! email = "me@example.com"
//! num_posts_on_homepage = 3
//!
//! [pages.home]
//! title = "Home"
//! description = "A minimal and lightweight blog and portfolio."
//!
//! [[socials]]
//! name = "GitHub"
//! href = "https://github.com/vincentcayadi"
//!
//! [meta]
//! title = "Vincent Cayadi"
//! og_image = { src = "/images/banner.webp", alt = "Vincent Cayadi" }
//! ```

mod meta;
mod pages;
mod socials;

pub use meta::DefaultMeta;
pub use pages::{Metadata, Page, PagesConfig};
pub use socials::Social;

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Posts listed on the homepage when `num_posts_on_homepage` is unset.
pub const DEFAULT_HOMEPAGE_POSTS: usize = 3;

/// Site owner metadata, read by every page template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    /// Owner name, also the default OG author caption.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Number of recent posts shown on the homepage.
    pub num_posts_on_homepage: Option<usize>,
}

impl Site {
    pub const NAME: FieldPath = FieldPath::new("site.name");
    pub const EMAIL: FieldPath = FieldPath::new("site.email");
    pub const NUM_POSTS: FieldPath = FieldPath::new("site.num_posts_on_homepage");

    /// Homepage post count with the default applied.
    pub fn homepage_posts(&self) -> usize {
        self.num_posts_on_homepage.unwrap_or(DEFAULT_HOMEPAGE_POSTS)
    }

    /// # Checks
    /// - `name` is non-empty
    /// - `email` is non-empty and looks like `local@domain`
    /// - `num_posts_on_homepage`, when set, is at least 1
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(Self::NAME, "site name must not be empty", "name = \"Jane Doe\"");
        }

        if self.email.trim().is_empty() {
            diag.error(Self::EMAIL, "contact email must not be empty");
        } else if !is_plausible_email(self.email.trim()) {
            diag.error_with_hint(
                Self::EMAIL,
                format!("'{}' is not a valid email address", self.email),
                "use format like me@example.com",
            );
        }

        if self.num_posts_on_homepage == Some(0) {
            diag.error_with_hint(
                Self::NUM_POSTS,
                "must be at least 1",
                "remove the key to use the default of 3",
            );
        }
    }
}

/// `local@domain` with exactly one `@`, no whitespace and a dotted domain.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}
