//! Typed scene graph serialized to SVG.
//!
//! Scenes are built with [`SceneBuilder`] and only ever contain the handful
//! of primitives a preview card needs. All text goes through XML escaping.

use super::layout::{Background, Rgb, TextStyle};
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

const PATTERN_ID: &str = "bg-dots";

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rect {
        width: f32,
        height: f32,
        fill: Rgb,
    },
    /// Full-canvas repeating tile of dots.
    Pattern {
        tile: f32,
        radius: f32,
        centers: [(f32, f32); 2],
        fill: Rgb,
    },
    /// One line of text; `y` is the baseline.
    Text {
        x: f32,
        y: f32,
        content: String,
        family: String,
        style: TextStyle,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    width: u32,
    height: u32,
    nodes: Vec<Node>,
}

impl Scene {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Serialize as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        for node in &self.nodes {
            write_node(&mut svg, node);
        }
        svg.push_str("</svg>");
        svg
    }
}

fn write_node(svg: &mut String, node: &Node) {
    // Writing into a String cannot fail
    let _ = match node {
        Node::Rect {
            width,
            height,
            fill,
        } => write!(svg, r#"<rect width="{width}" height="{height}" fill="{fill}"/>"#),
        Node::Pattern {
            tile,
            radius,
            centers,
            fill,
        } => {
            let _ = write!(
                svg,
                r#"<defs><pattern id="{PATTERN_ID}" width="{tile}" height="{tile}" patternUnits="userSpaceOnUse">"#
            );
            for (cx, cy) in centers {
                let _ = write!(svg, r#"<circle cx="{cx}" cy="{cy}" r="{radius}" fill="{fill}"/>"#);
            }
            write!(
                svg,
                r#"</pattern></defs><rect width="100%" height="100%" fill="url(#{PATTERN_ID})"/>"#
            )
        }
        Node::Text {
            x,
            y,
            content,
            family,
            style,
        } => write!(
            svg,
            r#"<text x="{x}" y="{y}" font-family="{}" font-size="{}" font-weight="{}" letter-spacing="{}" fill="{}" xml:space="preserve">{}</text>"#,
            escape_attr(family),
            style.size,
            style.weight,
            style.letter_spacing(),
            style.fill,
            escape(content),
        ),
    };
}

/// Incremental scene construction.
///
/// ```ignore
/// let scene = SceneBuilder::new(800, 400)
///     .background(Background::Solid(Rgb(255, 255, 255)))
///     .text(32.0, 360.0, "Hello", "Inter", style)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            scene: Scene {
                width,
                height,
                nodes: Vec::new(),
            },
        }
    }

    pub fn background(mut self, background: Background) -> Self {
        let (width, height) = (self.scene.width as f32, self.scene.height as f32);
        match background {
            Background::Solid(fill) => self.scene.nodes.push(Node::Rect {
                width,
                height,
                fill,
            }),
            Background::Dots {
                base,
                dot,
                tile,
                radius,
                centers,
            } => {
                self.scene.nodes.push(Node::Rect {
                    width,
                    height,
                    fill: base,
                });
                self.scene.nodes.push(Node::Pattern {
                    tile,
                    radius,
                    centers,
                    fill: dot,
                });
            }
        }
        self
    }

    pub fn text(
        mut self,
        x: f32,
        y: f32,
        content: impl Into<String>,
        family: &str,
        style: TextStyle,
    ) -> Self {
        self.scene.nodes.push(Node::Text {
            x,
            y,
            content: content.into(),
            family: family.to_string(),
            style,
        });
        self
    }

    pub fn build(self) -> Scene {
        self.scene
    }
}

/// Greedy word wrap.
///
/// Words are split on whitespace and joined with single spaces. A word wider
/// than `max_width` gets a line of its own. Every candidate line, including
/// the first word, goes through `measure`.
pub fn wrap_words<E>(
    text: &str,
    max_width: f32,
    mut measure: impl FnMut(&str) -> Result<f32, E>,
) -> Result<Vec<String>, E> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() {
            let candidate = format!("{current} {word}");
            if measure(&candidate)? <= max_width {
                current = candidate;
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }

        // Starts a line regardless of width
        measure(word)?;
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    const STYLE: TextStyle = TextStyle {
        size: 48.0,
        line_height: 48.0,
        weight: 700,
        tracking: -0.0625,
        fill: Rgb(0x1c, 0x19, 0x17),
        pad_y: 0.0,
    };

    fn chars(s: &str) -> Result<f32, Infallible> {
        Ok(s.chars().count() as f32)
    }

    #[test]
    fn test_wrap_words() {
        let lines = wrap_words("the quick brown fox jumps", 10.0, chars).unwrap();
        assert_eq!(lines, ["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        let lines = wrap_words("  a \n b\tc  ", 100.0, chars).unwrap();
        assert_eq!(lines, ["a b c"]);
        assert!(wrap_words("   ", 100.0, chars).unwrap().is_empty());
    }

    #[test]
    fn test_wrap_long_word() {
        let lines = wrap_words("a supercalifragilistic b", 5.0, chars).unwrap();
        assert_eq!(lines, ["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_measures_every_line_start() {
        let mut measured = Vec::new();
        let lines = wrap_words("alpha beta", 6.0, |s| {
            measured.push(s.to_string());
            chars(s)
        })
        .unwrap();
        assert_eq!(lines, ["alpha", "beta"]);
        assert_eq!(measured, ["alpha", "alpha beta", "beta"]);

        let err = wrap_words("single", 100.0, |_| Err::<f32, _>("unmeasurable"));
        assert_eq!(err, Err("unmeasurable"));
    }

    #[test]
    fn test_svg_escapes_text() {
        let scene = SceneBuilder::new(800, 400)
            .text(0.0, 10.0, "Tom & Jerry <3 \"quotes\"", "Inter", STYLE)
            .build();
        let svg = scene.to_svg();

        assert!(svg.contains("Tom &amp; Jerry &lt;3"));
        assert!(!svg.contains("<3"));
        assert!(svg.contains(r#"font-family="Inter""#));
        assert!(svg.contains(r#"letter-spacing="-3""#));
        assert!(svg.contains(r##"fill="#1c1917""##));
    }

    #[test]
    fn test_svg_background() {
        let scene = SceneBuilder::new(800, 400)
            .background(Background::Dots {
                base: Rgb(255, 255, 255),
                dot: Rgb(0xd3, 0xd3, 0xd3),
                tile: 100.0,
                radius: 2.0,
                centers: [(25.0, 25.0), (75.0, 75.0)],
            })
            .build();

        assert_eq!(scene.nodes().len(), 2);
        let svg = scene.to_svg();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="400""#));
        assert!(svg.contains(r##"<circle cx="25" cy="25" r="2" fill="#d3d3d3"/>"##));
        assert!(svg.contains("url(#bg-dots)"));
        assert!(svg.ends_with("</svg>"));
    }
}
