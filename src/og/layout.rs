//! Fixed layout of a preview image: background, padding and two text styles.
//!
//! The text block (wrapped title over the author caption) is anchored to the
//! bottom-left corner:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │                                      │
//! │                                      │
//! │ pad_x ┊ A Long Post Title That       │
//! │       ┊ Wraps Onto Two Lines         │
//! │       ┊ Author Name                  │
//! │                                pad_y │
//! └──────────────────────────────────────┘
//! ```

use super::scene::{Scene, SceneBuilder, wrap_words};
use std::fmt;

/// Ascender height of the text face, in em.
const ASCENT: f32 = 0.97;
/// Descender depth of the text face, in em.
const DESCENT: f32 = 0.24;

/// Opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    Solid(Rgb),
    /// Repeating tile of dots on a solid base.
    Dots {
        base: Rgb,
        dot: Rgb,
        tile: f32,
        radius: f32,
        centers: [(f32, f32); 2],
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in px.
    pub size: f32,
    pub line_height: f32,
    pub weight: u16,
    /// Letter spacing in em.
    pub tracking: f32,
    pub fill: Rgb,
    /// Vertical padding around the whole text run.
    pub pad_y: f32,
}

impl TextStyle {
    /// Baseline of a line box whose top edge is at `top`.
    fn baseline(&self, top: f32) -> f32 {
        let half_leading = (self.line_height - (ASCENT + DESCENT) * self.size) / 2.0;
        top + half_leading + ASCENT * self.size
    }

    /// Letter spacing in px.
    pub fn letter_spacing(&self) -> f32 {
        self.tracking * self.size
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub background: Background,
    pub pad_x: f32,
    pub pad_y: f32,
    pub title: TextStyle,
    pub author: TextStyle,
}

impl Layout {
    /// Width available to a line of text.
    pub fn text_width(&self) -> f32 {
        self.width as f32 - 2.0 * self.pad_x
    }

    /// Lay out `title` and `author` in `family`.
    ///
    /// `measure` returns the advance width of a string set in a style; it
    /// drives the greedy title wrap.
    pub fn compose<E>(
        &self,
        title: &str,
        author: &str,
        family: &str,
        mut measure: impl FnMut(&str, &TextStyle) -> Result<f32, E>,
    ) -> Result<Scene, E> {
        let lines = wrap_words(title, self.text_width(), |s| measure(s, &self.title))?;

        let title_block = lines.len() as f32 * self.title.line_height + 2.0 * self.title.pad_y;
        let author_block = self.author.line_height + 2.0 * self.author.pad_y;
        let top = self.height as f32 - self.pad_y - author_block - title_block;

        let mut scene = SceneBuilder::new(self.width, self.height).background(self.background);

        let mut y = top + self.title.pad_y;
        for line in lines {
            scene = scene.text(self.pad_x, self.title.baseline(y), line, family, self.title);
            y += self.title.line_height;
        }

        y += self.title.pad_y + self.author.pad_y;
        scene = scene.text(self.pad_x, self.author.baseline(y), author, family, self.author);

        Ok(scene.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::og::Variant;
    use crate::og::scene::Node;
    use std::convert::Infallible;

    /// Every character is 10px wide.
    fn fixed(s: &str, _: &TextStyle) -> Result<f32, Infallible> {
        Ok(s.chars().count() as f32 * 10.0)
    }

    fn text_nodes(scene: &Scene) -> Vec<(&str, f32)> {
        scene
            .nodes()
            .iter()
            .filter_map(|n| match n {
                Node::Text { content, y, .. } => Some((content.as_str(), *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb(0xe7, 0xe5, 0xe4).to_string(), "#e7e5e4");
        assert_eq!(Rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_compose_anchors_bottom_left() {
        let layout = Variant::Og.layout();
        let scene = layout.compose("Hello", "Jane", "Inter", fixed).unwrap();

        let texts = text_nodes(&scene);
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].0, "Hello");
        assert_eq!(texts[1].0, "Jane");
        // Title sits above the caption, both in the lower part of the canvas
        assert!(texts[0].1 < texts[1].1);
        assert!(texts[1].1 < layout.height as f32);
        assert!(texts[0].1 > layout.height as f32 / 2.0);
    }

    #[test]
    fn test_compose_wraps_long_titles() {
        let layout = Variant::Og.layout();
        // 736px of text width fits 73 characters per line
        let title = "word ".repeat(40);
        let scene = layout.compose(title.trim(), "Jane", "Inter", fixed).unwrap();

        let texts = text_nodes(&scene);
        assert!(texts.len() > 3);
        for (line, _) in &texts {
            assert!(line.chars().count() * 10 <= layout.text_width() as usize);
        }
        // Lines are stacked one line-height apart
        let step = texts[1].1 - texts[0].1;
        assert!((step - layout.title.line_height).abs() < 0.01);
    }

    #[test]
    fn test_compose_empty_title() {
        let scene = Variant::Image
            .layout()
            .compose("", "Jane", "Inter", fixed)
            .unwrap();
        let texts = text_nodes(&scene);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].0, "Jane");
    }

    #[test]
    fn test_compose_propagates_measure_error() {
        let result = Variant::Image
            .layout()
            .compose("Hello", "Jane", "Inter", |_, _| Err("no font"));
        assert_eq!(result.err(), Some("no font"));
    }
}
