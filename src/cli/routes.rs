//! `routes`: print the image routes as JSON.
//!
//! ```json
//! [
//!   { "variant": "og", "path": "/og/blog/hello.png", "slug": "blog/hello", "title": "Hello" }
//! ]
//! ```

use crate::{
    config::SiteConfig,
    content::Collection,
    og::{Variant, route},
};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RouteEntry {
    variant: Variant,
    path: String,
    slug: String,
    title: String,
}

/// Print routes of `only`, or of every enabled variant.
pub fn list_routes(config: &SiteConfig, only: Option<Variant>, pretty: bool) -> Result<()> {
    let collection = Collection::load(&config.build.collection_dir())?;
    let entries = collect(config, &collection, only);

    let json = if pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    println!("{json}");
    Ok(())
}

fn collect(config: &SiteConfig, collection: &Collection, only: Option<Variant>) -> Vec<RouteEntry> {
    let variants: Vec<Variant> = match only {
        Some(variant) => vec![variant],
        None => config.og.enabled().collect(),
    };

    variants
        .into_iter()
        .flat_map(|variant| {
            route::routes(variant, collection, &config.og)
                .into_iter()
                .map(move |route| RouteEntry {
                    variant,
                    path: route.url_path(variant),
                    slug: route.slug,
                    title: route.title,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::Post;

    #[test]
    fn test_collect_routes_json() {
        let config = test_parse_config("");
        let collection =
            Collection::new(vec![Post::parse("hello/index.md", "---\ntitle: Hello\n---\n").unwrap()]);

        let entries = collect(&config, &collection, None);
        let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["/image/hello.png", "/og/blog/hello.png", "/og/blog.png"]);

        let json = serde_json::to_value(&entries[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "variant": "og",
                "path": "/og/blog/hello.png",
                "slug": "blog/hello",
                "title": "Hello",
            })
        );
    }

    #[test]
    fn test_collect_single_variant() {
        let config = test_parse_config("");
        let entries = collect(&config, &Collection::default(), Some(Variant::Og));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Blogs");
    }
}
