//! Image generation errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failure at any stage of the title → SVG → PNG pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read font `{}`", path.display())]
    FontIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}` contains no usable TrueType/OpenType face", path.display())]
    InvalidFont { path: PathBuf },

    #[error("no fonts configured for the `{variant}` variant")]
    NoFonts { variant: &'static str },

    #[error("failed to parse generated SVG")]
    Svg(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("failed to encode PNG")]
    Encode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_display() {
        let err = RenderError::FontIo {
            path: PathBuf::from("fonts/Inter-Bold.ttf"),
            source: Error::new(ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("fonts/Inter-Bold.ttf"));
        assert!(std::error::Error::source(&err).is_some());

        let err = RenderError::Pixmap {
            width: 0,
            height: 630,
        };
        assert_eq!(err.to_string(), "cannot allocate a 0x630 pixmap");
    }
}
