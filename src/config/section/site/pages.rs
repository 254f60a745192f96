//! `[pages.*]` title/description pairs per logical page.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Title and description of one logical page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub title: String,
    pub description: String,
}

impl Metadata {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
        }
    }
}

/// Logical pages that carry their own metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Blog,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Blog];

    pub const fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Blog => "blog",
        }
    }

    const fn title_field(self) -> FieldPath {
        match self {
            Page::Home => FieldPath::new("pages.home.title"),
            Page::Blog => FieldPath::new("pages.blog.title"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub home: Metadata,
    pub blog: Metadata,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            home: Metadata::new("Home"),
            blog: Metadata::new("Blog"),
        }
    }
}

impl PagesConfig {
    pub fn get(&self, page: Page) -> &Metadata {
        match page {
            Page::Home => &self.home,
            Page::Blog => &self.blog,
        }
    }

    /// Every page needs a title; descriptions may be empty.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for page in Page::ALL {
            if self.get(page).title.trim().is_empty() {
                diag.error(page.title_field(), format!("{} page title must not be empty", page.key()));
            }
        }
    }
}
