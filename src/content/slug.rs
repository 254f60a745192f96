//! URL slugs for posts.

/// Slugify one path segment the way github-slugger does: lowercase, every
/// space becomes `-`, anything but alphanumerics, `-` and `_` is dropped.
///
/// Runs of spaces are not collapsed, so `"a  b"` -> `"a--b"`.
pub fn slugify_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());

    for c in segment.chars() {
        if c == ' ' {
            out.push('-');
        } else if c.is_alphanumeric() || c == '-' || c == '_' {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Slugify every `/`-separated segment, dropping empty ones.
pub fn slugify_path(path: &str) -> String {
    path.split('/')
        .map(slugify_segment)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Default slug of a collection entry: the id without its extension and
/// without a trailing `/index`.
///
/// `hello-world.md` -> `hello-world`, `2024/Trip Notes/index.mdx` -> `2024/trip-notes`
pub fn slug_from_id(id: &str) -> String {
    let stem = id.rsplit_once('.').map_or(id, |(stem, ext)| {
        if ext.contains('/') { id } else { stem }
    });
    let stem = stem.strip_suffix("/index").unwrap_or(stem);
    slugify_path(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_segment() {
        assert_eq!(slugify_segment("Hello World"), "hello-world");
        assert_eq!(slugify_segment("Rust & Astro!"), "rust--astro");
        assert_eq!(slugify_segment(" Two  Spaces "), "-two--spaces-");
        assert_eq!(slugify_segment("tab\tand\nnewline"), "tabandnewline");
        assert_eq!(slugify_segment("snake_case-ok"), "snake_case-ok");
        assert_eq!(slugify_segment("Café"), "café");
        assert_eq!(slugify_segment("!!!"), "");
    }

    #[test]
    fn test_slug_from_id() {
        assert_eq!(slug_from_id("hello-world.md"), "hello-world");
        assert_eq!(slug_from_id("hello/index.md"), "hello");
        assert_eq!(slug_from_id("2024/Trip Notes/index.mdx"), "2024/trip-notes");
        assert_eq!(slug_from_id("v1.2/notes"), "v12/notes");
    }
}
