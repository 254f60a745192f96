//! SVG → PNG rasterization.

use super::OgImage;
use super::error::RenderError;
use super::font::FontSet;
use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use std::io::Cursor;

/// Parse `svg`, scale it to `width` keeping the aspect ratio, and encode
/// the result as PNG.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rasterize(svg: &str, fonts: &FontSet, width: u32) -> Result<OgImage, RenderError> {
    let tree = usvg::Tree::from_str(svg, &fonts.options())?;

    let size = tree.size();
    let scale = width as f32 / size.width();
    let height = (size.height() * scale).round() as u32;

    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Pixmap { width, height })?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let bytes = encode_png(&pixmap)?;
    Ok(OgImage {
        bytes,
        width,
        height,
    })
}

/// Encode a premultiplied pixmap as straight-alpha PNG.
fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    let (width, height) = (pixmap.width(), pixmap.height());

    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    let image =
        RgbaImage::from_raw(width, height, rgba).ok_or(RenderError::Pixmap { width, height })?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
