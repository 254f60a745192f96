//! MIME type detection utilities.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const JSON: &str = "application/json";
    pub const OCTET_STREAM: &str = "application/octet-stream";

    pub const PNG: &str = "image/png";
    pub const SVG: &str = "image/svg+xml";

    pub const TTF: &str = "font/ttf";
    pub const OTF: &str = "font/otf";
    pub const WOFF: &str = "font/woff";
    pub const WOFF2: &str = "font/woff2";
}

/// Guess MIME type from file extension.
pub fn from_path(path: &Path) -> &'static str {
    from_extension(path.extension().and_then(|e| e.to_str()))
}

/// Guess MIME type from file extension string.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext.map(str::to_ascii_lowercase).as_deref() {
        Some("html" | "htm") => types::HTML,
        Some("txt") => types::PLAIN,
        Some("json") => types::JSON,
        Some("png") => types::PNG,
        Some("svg") => types::SVG,
        Some("ttf") => types::TTF,
        Some("otf") => types::OTF,
        Some("woff") => types::WOFF,
        Some("woff2") => types::WOFF2,
        _ => types::OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(Path::new("og/blog/hello.png")), types::PNG);
        assert_eq!(from_path(Path::new("fonts/Inter-Bold.TTF")), types::TTF);
        assert_eq!(from_path(Path::new("README")), types::OCTET_STREAM);
    }
}
