//! Blog post collection.
//!
//! Posts live under `{content}/{collection}` as `.md` or `.mdx` files with
//! frontmatter. Only the metadata is read here; rendering the body is the
//! page build's job.

pub mod frontmatter;
pub mod slug;

use crate::log;
use crate::utils::date::DateTimeUtc;
use anyhow::{Context, Result, anyhow, bail};
use jwalk::WalkDir;
use serde::Serialize;
use std::fs;
use std::path::Path;

const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Frontmatter of a post after required-field checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostData {
    pub title: String,
    pub description: Option<String>,
    pub date: Option<DateTimeUtc>,
    pub draft: bool,
    pub tags: Vec<String>,
}

/// One collection entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Path relative to the collection root, `/`-separated (`hello/index.md`).
    pub id: String,
    /// URL slug (`hello`).
    pub slug: String,
    pub data: PostData,
}

impl Post {
    /// Build a post from its id and raw file content.
    pub fn parse(id: &str, content: &str) -> Result<Self> {
        let (meta, _body) = frontmatter::extract(content)?
            .ok_or_else(|| anyhow!("missing frontmatter"))?;

        let Some(title) = meta.title else {
            bail!("missing required field `title`");
        };

        let date = meta.date.and_then(|d| {
            let parsed = DateTimeUtc::parse(&d);
            if parsed.is_none() {
                log!("warning"; "{id}: unrecognized date '{d}', treating as undated");
            }
            parsed
        });

        let slug = match meta.slug {
            Some(s) => slug::slugify_path(&s),
            None => slug::slug_from_id(id),
        };
        if slug.is_empty() {
            bail!("slug of '{id}' is empty after slugification");
        }

        Ok(Self {
            id: id.to_string(),
            slug,
            data: PostData {
                title,
                description: meta.description,
                date,
                draft: meta.draft,
                tags: meta.tags,
            },
        })
    }
}

/// All posts of the collection, sorted by id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Collection {
    posts: Vec<Post>,
}

impl Collection {
    pub fn new(mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| a.id.cmp(&b.id));
        Self { posts }
    }

    /// Load every `.md`/`.mdx` file under `dir`.
    ///
    /// A missing directory yields an empty collection. Any unreadable
    /// directory or malformed post fails the whole load.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Ok(Self::default());
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).sort(true) {
            let mut entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
            let path = entry.path();
            if let Some(err) = entry.read_children_error.take() {
                return Err(err).with_context(|| format!("failed to walk {}", path.display()));
            }
            if entry.file_type().is_file() && has_post_extension(&path) {
                paths.push(path);
            }
        }

        let posts = paths
            .into_iter()
            .map(|path| {
                let id = entry_id(dir, &path);
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Post::parse(&id, &content).with_context(|| format!("invalid post {}", path.display()))
            })
            .collect::<Result<Vec<_>>>()?;

        let collection = Self::new(posts);
        collection.check_unique_slugs()?;
        Ok(collection)
    }

    fn check_unique_slugs(&self) -> Result<()> {
        let mut seen = std::collections::HashMap::new();
        for post in &self.posts {
            if let Some(other) = seen.insert(post.slug.as_str(), post.id.as_str()) {
                bail!("posts '{other}' and '{}' share the slug '{}'", post.id, post.slug);
            }
        }
        Ok(())
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Newest `n` posts by date; undated posts sort last.
    pub fn latest(&self, n: usize) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| match (a.data.date, b.data.date) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        posts.truncate(n);
        posts
    }
}

fn has_post_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| EXTENSIONS.contains(&e))
}

/// `{dir}/hello/index.md` -> `hello/index.md`
fn entry_id(dir: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(dir).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
