//! Image routes: which slugs exist for a variant and which title each renders.

use super::Variant;
use crate::config::OgConfig;
use crate::content::Collection;
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One generated image: `/{prefix}/{slug}.png` showing `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub slug: String,
    pub title: String,
}

impl Route {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
        }
    }

    /// URL path under the site root.
    pub fn url_path(&self, variant: Variant) -> String {
        format!("/{}/{}.png", variant.prefix(), self.slug)
    }

    /// File written by `build`.
    pub fn output_path(&self, variant: Variant, output: &Path) -> PathBuf {
        output
            .join(variant.prefix())
            .join(format!("{}.png", self.slug))
    }
}

/// Slug of an `image` route: the entry id without a trailing `/index.md`.
///
/// `hello/index.md` -> `hello`, `hello.md` -> `hello.md`
pub fn image_slug(id: &str) -> &str {
    id.strip_suffix("/index.md").unwrap_or(id)
}

/// Every route of `variant`, one per post plus the configured extra pages
/// for [`Variant::Og`].
pub fn routes(variant: Variant, collection: &Collection, og: &OgConfig) -> Vec<Route> {
    let posts = collection.posts().iter();

    match variant {
        Variant::Image => posts
            .map(|post| Route::new(image_slug(&post.id), &post.data.title))
            .collect(),
        Variant::Og => posts
            .map(|post| Route::new(format!("blog/{}", post.slug), &post.data.title))
            .chain(
                og.extra_pages
                    .iter()
                    .map(|page| Route::new(&page.slug, &page.title)),
            )
            .collect(),
    }
}

/// Find the route a request path points at.
///
/// `/og/blog/hello.png` -> `(Og, Route { slug: "blog/hello", .. })`
pub fn resolve(path: &str, collection: &Collection, og: &OgConfig) -> Option<(Variant, Route)> {
    let (variant, slug) = parse_path(path)?;
    if !og.variant(variant).enable {
        return None;
    }
    routes(variant, collection, og)
        .into_iter()
        .find(|route| route.slug == slug)
        .map(|route| (variant, route))
}

/// Split a request path into variant and percent-decoded slug.
///
/// `/image/hello.md.png` -> `(Image, "hello.md")`,
/// `/og/blog/caf%C3%A9.png` -> `(Og, "blog/café")`
pub fn parse_path(path: &str) -> Option<(Variant, String)> {
    let raw = path.split(['?', '#']).next()?;
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let (prefix, rest) = decoded.trim_start_matches('/').split_once('/')?;
    let variant = Variant::from_prefix(prefix)?;
    let slug = rest.strip_suffix(".png")?;
    (!slug.is_empty()).then(|| (variant, slug.to_string()))
}
