//! `[og]` section configuration.
//!
//! Controls the generated Open Graph preview images.
//!
//! # Example
//!
//! ```toml
//! [og]
//! author = "Vincent Cayadi"          # Caption under the title (default: site.name)
//! extra_pages = [{ slug = "blog", title = "Blogs" }]
//!
//! [og.image]                         # /image/{slug}.png, 1200x630
//! enable = true
//! fonts = ["fonts/DejaVuSans.ttf", "fonts/DejaVuSans-Bold.ttf"]
//!
//! [og.og]                            # /og/{...slug}.png, 800x400
//! enable = true
//! fonts = ["fonts/DejaVuSans-Bold.ttf"]
//! ```
//!
//! Font paths are relative to the site root. TrueType/OpenType only.
//! Omitting `fonts` uses the variant's default set shipped in `fonts/`.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::og::Variant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "ttc", "otc"];

const DEFAULT_IMAGE_FONTS: &[&str] = &["fonts/DejaVuSans.ttf", "fonts/DejaVuSans-Bold.ttf"];
const DEFAULT_OG_FONTS: &[&str] = &["fonts/DejaVuSans-Bold.ttf"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OgConfig {
    /// Caption rendered under every title. Falls back to `site.name`.
    pub author: Option<String>,

    /// Non-post pages that get an `og` variant image.
    pub extra_pages: Vec<ExtraPage>,

    /// Settings for [`Variant::Image`].
    pub image: VariantConfig,

    /// Settings for [`Variant::Og`].
    pub og: VariantConfig,
}

/// A fixed page rendered alongside the posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPage {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Render this variant in `build` and answer its route in `serve`.
    pub enable: bool,
    /// Font files loaded for every generation. `None` means the variant's
    /// default set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fonts: Option<Vec<PathBuf>>,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            enable: true,
            fonts: None,
        }
    }
}

impl Default for OgConfig {
    fn default() -> Self {
        Self {
            author: None,
            extra_pages: vec![ExtraPage {
                slug: "blog".into(),
                title: "Blogs".into(),
            }],
            image: VariantConfig::default(),
            og: VariantConfig::default(),
        }
    }
}

impl OgConfig {
    pub const IMAGE_FONTS: FieldPath = FieldPath::new("og.image.fonts");
    pub const OG_FONTS: FieldPath = FieldPath::new("og.og.fonts");

    pub const fn variant(&self, variant: Variant) -> &VariantConfig {
        match variant {
            Variant::Image => &self.image,
            Variant::Og => &self.og,
        }
    }

    /// Font files of `variant`, falling back to its default set.
    pub fn fonts(&self, variant: Variant) -> Vec<PathBuf> {
        match &self.variant(variant).fonts {
            Some(fonts) => fonts.clone(),
            None => default_fonts(variant).iter().map(PathBuf::from).collect(),
        }
    }

    /// Enabled variants in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = Variant> + '_ {
        Variant::ALL
            .into_iter()
            .filter(|v| self.variant(*v).enable)
    }

    /// Author caption, defaulting to the site owner.
    pub fn author<'a>(&'a self, site_name: &'a str) -> &'a str {
        self.author.as_deref().unwrap_or(site_name)
    }

    /// Fill in default fonts and resolve all font paths against the site root.
    pub fn normalize(&mut self, root: &Path) {
        let image = self.fonts(Variant::Image);
        let og = self.fonts(Variant::Og);
        let resolve = |fonts: Vec<PathBuf>| -> Vec<PathBuf> {
            fonts
                .iter()
                .map(|font| crate::config::util::normalize_path(root, font))
                .collect()
        };
        self.image.fonts = Some(resolve(image));
        self.og.fonts = Some(resolve(og));
    }

    /// # Checks
    /// - every enabled variant lists at least one font
    /// - font files are TrueType/OpenType (by extension)
    /// - extra pages have a relative, non-empty slug and a title
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (variant, field) in [(Variant::Image, Self::IMAGE_FONTS), (Variant::Og, Self::OG_FONTS)] {
            let fonts = self.fonts(variant);
            if self.variant(variant).enable && fonts.is_empty() {
                diag.error_with_hint(
                    field.clone(),
                    "at least one font is required",
                    "fonts = [\"fonts/DejaVuSans-Bold.ttf\"]",
                );
            }
            for font in &fonts {
                if !has_font_extension(font) {
                    diag.error_with_hint(
                        field.clone(),
                        format!("'{}' is not a TrueType/OpenType font", font.display()),
                        "convert woff/woff2 files to ttf",
                    );
                }
            }
        }

        for (i, page) in self.extra_pages.iter().enumerate() {
            if !is_route_slug(&page.slug) {
                diag.error_with_hint(
                    FieldPath::indexed("og.extra_pages", i, "slug"),
                    format!("'{}' is not a valid route slug", page.slug),
                    "use a relative path like blog or notes/archive",
                );
            }
            if page.title.trim().is_empty() {
                diag.error(
                    FieldPath::indexed("og.extra_pages", i, "title"),
                    "title must not be empty",
                );
            }
        }
    }
}

const fn default_fonts(variant: Variant) -> &'static [&'static str] {
    match variant {
        Variant::Image => DEFAULT_IMAGE_FONTS,
        Variant::Og => DEFAULT_OG_FONTS,
    }
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_EXTENSIONS.iter().any(|f| e.eq_ignore_ascii_case(f)))
}

/// Non-empty `/`-separated segments without `.` or `..`.
pub fn is_route_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('/')
            .all(|seg| !seg.is_empty() && seg != "." && seg != ".." && !seg.contains('\\'))
}
