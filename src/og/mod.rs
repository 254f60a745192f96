//! Open Graph preview image generation.
//!
//! # Pipeline
//!
//! ```text
//! title ──► Layout::compose ──► Scene ──► SVG ──► usvg ──► resvg ──► PNG
//!              (wrap, anchor)             (escaped)  (fonts)  (fit width)
//! ```
//!
//! | Module    | Purpose                                        |
//! |-----------|------------------------------------------------|
//! | `variant` | `image` / `og` flavors and their layouts        |
//! | `layout`  | Text block placement and styles                |
//! | `scene`   | Typed scene graph and SVG serialization        |
//! | `font`    | Font loading and text measurement              |
//! | `raster`  | Rasterization and PNG encoding                 |
//! | `route`   | Slugs and titles per variant                   |
//!
//! Every call is independent: fonts are read from disk per generation and
//! nothing is cached.

mod error;
pub mod font;
pub mod layout;
mod raster;
pub mod route;
pub mod scene;
mod variant;

pub use error::RenderError;
pub use font::FontSet;
pub use route::Route;
pub use variant::Variant;

use crate::config::SiteConfig;

/// MIME type of every generated image.
pub const CONTENT_TYPE: &str = crate::utils::mime::types::PNG;

/// Encoded PNG plus its pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Render `title` with the author caption using already loaded fonts.
pub fn render(
    title: &str,
    author: &str,
    variant: Variant,
    fonts: &FontSet,
) -> Result<OgImage, RenderError> {
    let layout = variant.layout();
    let scene = layout.compose(title, author, fonts.family(), |text, style| {
        fonts.measure(text, style)
    })?;
    raster::rasterize(&scene.to_svg(), fonts, layout.width)
}

/// Load the variant's fonts from `config` and render `title`.
pub fn generate(title: &str, variant: Variant, config: &SiteConfig) -> Result<OgImage, RenderError> {
    let paths = config.og.fonts(variant);
    if paths.is_empty() {
        return Err(RenderError::NoFonts {
            variant: variant.prefix(),
        });
    }

    let fonts = FontSet::load(&paths)?;
    crate::debug!("og"; "{} face(s) of `{}` for {}", fonts.face_count(), fonts.family(), variant);
    render(title, config.og_author(), variant, &fonts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn shipped_fonts() -> Vec<PathBuf> {
        ["DejaVuSans.ttf", "DejaVuSans-Bold.ttf"]
            .iter()
            .map(|name| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fonts").join(name))
            .collect()
    }

    /// Rows that contain at least one pixel differing from the top-left one.
    fn inked_rows(image: &OgImage) -> Vec<u32> {
        let decoded = image::load_from_memory(&image.bytes).unwrap().to_rgba8();
        let background = *decoded.get_pixel(0, 0);
        (0..decoded.height())
            .filter(|&y| (0..decoded.width()).any(|x| *decoded.get_pixel(x, y) != background))
            .collect()
    }

    fn decode(image: &OgImage) -> (u32, u32) {
        let decoded = image::load_from_memory_with_format(&image.bytes, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        decoded.dimensions()
    }

    #[test]
    fn test_render_sizes() {
        let fonts = FontSet::default();
        for variant in Variant::ALL {
            let image = render("Hello World", "Jane Doe", variant, &fonts).unwrap();
            assert_eq!((image.width, image.height), variant.size());
            assert_eq!(decode(&image), variant.size());
        }
    }

    #[test]
    fn test_render_empty_title() {
        let image = render("", "Jane Doe", Variant::Og, &FontSet::default()).unwrap();
        assert_eq!(decode(&image), (800, 400));
    }

    #[test]
    fn test_render_escapes_markup() {
        let title = "<script>alert('x')</script> & \"friends\"";
        let image = render(title, "</text>", Variant::Image, &FontSet::default()).unwrap();
        assert_eq!(decode(&image), (1200, 630));
    }

    #[test]
    fn test_render_is_deterministic() {
        let fonts = FontSet::default();
        let a = render("Same", "Author", Variant::Og, &fonts).unwrap();
        let b = render("Same", "Author", Variant::Og, &fonts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_background_colors() {
        let image = render("", "", Variant::Image, &FontSet::default()).unwrap();
        let decoded = image::load_from_memory(&image.bytes).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [0xe7, 0xe5, 0xe4, 0xff]);

        let image = render("", "", Variant::Og, &FontSet::default()).unwrap();
        let decoded = image::load_from_memory(&image.bytes).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [0xff, 0xff, 0xff, 0xff]);
        // Dot centers are gray
        let [r, g, b, _] = decoded.get_pixel(25, 25).0;
        assert!(r < 0xff && r == g && g == b);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(CONTENT_TYPE, "image/png");
    }

    #[test]
    fn test_generate_missing_fonts() {
        let dir = TempDir::new().unwrap();
        let mut config = crate::config::test_parse_config("");
        config.og.og.fonts = Some(vec![dir.path().join("fonts/DejaVuSans-Bold.ttf")]);

        let err = generate("Hello", Variant::Og, &config).unwrap_err();
        assert!(matches!(err, RenderError::FontIo { .. }));

        config.og.og.fonts = Some(Vec::new());
        let err = generate("Hello", Variant::Og, &config).unwrap_err();
        assert!(matches!(err, RenderError::NoFonts { variant: "og" }));
    }

    #[test]
    fn test_render_draws_text_at_bottom() {
        let fonts = FontSet::load(&shipped_fonts()).unwrap();
        assert_eq!(fonts.family(), "DejaVu Sans");

        let image = render("Hello World", "Jane Doe", Variant::Image, &fonts).unwrap();
        let rows = inked_rows(&image);
        assert!(!rows.is_empty());
        // Title and caption sit in the last 65px (36px line + 29px caption)
        assert!(rows.iter().all(|&y| y >= 630 - 65 - 4), "ink above text block: {rows:?}");
        assert!(rows.iter().any(|&y| y >= 630 - 29));

        let blank = render("", "", Variant::Image, &fonts).unwrap();
        assert!(inked_rows(&blank).is_empty());
    }

    #[test]
    fn test_render_wraps_long_title() {
        let fonts = FontSet::load(&shipped_fonts()).unwrap();
        let short = render("Hello", "", Variant::Image, &fonts).unwrap();
        let long = render(&"Lorem ipsum dolor ".repeat(12), "", Variant::Image, &fonts).unwrap();

        let top = |image: &OgImage| inked_rows(image).first().copied().unwrap();
        // Extra lines grow the block upward from the bottom edge
        assert!(top(&long) + 36 <= top(&short));
    }

    #[test]
    fn test_generate_with_shipped_fonts() {
        let mut config = crate::config::test_parse_config("");
        config.og.og.fonts = Some(shipped_fonts());

        let image = generate("Hello", Variant::Og, &config).unwrap();
        assert_eq!(decode(&image), (800, 400));
    }
}
