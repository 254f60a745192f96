//! Font loading and text measurement.

use super::error::RenderError;
use super::layout::TextStyle;
use crate::utils::html::{escape, escape_attr};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use usvg::fontdb;

/// Generic family used when no face was loaded.
const FALLBACK_FAMILY: &str = "sans-serif";

/// Fonts available to one generation call.
#[derive(Clone)]
pub struct FontSet {
    db: Arc<fontdb::Database>,
    family: String,
}

impl Default for FontSet {
    /// No faces: text is measured as zero-width and not drawn.
    fn default() -> Self {
        Self {
            db: Arc::new(fontdb::Database::new()),
            family: FALLBACK_FAMILY.to_string(),
        }
    }
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("faces", &self.db.len())
            .field("family", &self.family)
            .finish()
    }
}

impl FontSet {
    /// Read every font file from disk.
    ///
    /// Each file must contribute at least one face. The family of the first
    /// face becomes the family used for all text.
    pub fn load(paths: &[PathBuf]) -> Result<Self, RenderError> {
        let mut db = fontdb::Database::new();

        for path in paths {
            let data = fs::read(path).map_err(|source| RenderError::FontIo {
                path: path.clone(),
                source,
            })?;

            let before = db.len();
            db.load_font_data(data);
            if db.len() == before {
                return Err(RenderError::InvalidFont { path: path.clone() });
            }
        }

        let family = db
            .faces()
            .next()
            .and_then(|face| face.families.first())
            .map_or_else(|| FALLBACK_FAMILY.to_string(), |(name, _)| name.clone());

        Ok(Self {
            db: Arc::new(db),
            family,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Parser options resolving text against these fonts only.
    pub fn options(&self) -> usvg::Options<'static> {
        usvg::Options {
            fontdb: Arc::clone(&self.db),
            font_family: self.family.clone(),
            ..usvg::Options::default()
        }
    }

    /// Advance width of `text` in `style`, in px.
    ///
    /// Shapes `text` the same way the final render does.
    pub fn measure(&self, text: &str, style: &TextStyle) -> Result<f32, RenderError> {
        if text.trim().is_empty() || self.db.is_empty() {
            return Ok(0.0);
        }

        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="10000" height="{h}"><text x="0" y="{y}" font-family="{}" font-size="{}" font-weight="{}" letter-spacing="{}" xml:space="preserve">{}</text></svg>"#,
            escape_attr(&self.family),
            style.size,
            style.weight,
            style.letter_spacing(),
            escape(text),
            h = style.line_height.max(style.size) * 2.0,
            y = style.size,
        );
        let tree = usvg::Tree::from_str(&svg, &self.options())?;

        let width = tree
            .root()
            .children()
            .iter()
            .filter_map(|node| match node {
                usvg::Node::Text(text) => Some(text.bounding_box().width()),
                _ => None,
            })
            .fold(0.0, f32::max);
        Ok(width)
    }
}
