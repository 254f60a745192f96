//! The two preview image flavors and their fixed layouts.

use super::layout::{Background, Layout, Rgb, TextStyle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which image to generate.
///
/// | Variant | Route                | Size     |
/// |---------|----------------------|----------|
/// | `Image` | `/image/{slug}.png`  | 1200x630 |
/// | `Og`    | `/og/{...slug}.png`  | 800x400  |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Image,
    Og,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Image, Variant::Og];

    /// First path segment of the route.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Og => "og",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.prefix() == prefix)
    }

    /// Output `(width, height)` in pixels.
    pub const fn size(self) -> (u32, u32) {
        (self.layout().width, self.layout().height)
    }

    pub const fn layout(self) -> &'static Layout {
        match self {
            Self::Image => &IMAGE_LAYOUT,
            Self::Og => &OG_LAYOUT,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

// ============================================================================
// layouts
// ============================================================================

const STONE_200: Rgb = Rgb(0xe7, 0xe5, 0xe4);
const STONE_600: Rgb = Rgb(0x57, 0x53, 0x4e);
const STONE_900: Rgb = Rgb(0x1c, 0x19, 0x17);
const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
const LIGHT_GRAY: Rgb = Rgb(0xd3, 0xd3, 0xd3);

/// Stone background, bold 30px title over a 24px caption.
const IMAGE_LAYOUT: Layout = Layout {
    width: 1200,
    height: 630,
    background: Background::Solid(STONE_200),
    pad_x: 16.0,
    pad_y: 0.0,
    title: TextStyle {
        size: 30.0,
        line_height: 36.0,
        weight: 700,
        tracking: -0.025,
        fill: STONE_900,
        pad_y: 0.0,
    },
    author: TextStyle {
        size: 24.0,
        line_height: 29.0,
        weight: 700,
        tracking: 0.0,
        fill: STONE_600,
        pad_y: 0.0,
    },
};

/// White dotted background, 48px title over a 30px caption.
const OG_LAYOUT: Layout = Layout {
    width: 800,
    height: 400,
    background: Background::Dots {
        base: WHITE,
        dot: LIGHT_GRAY,
        tile: 100.0,
        radius: 2.0,
        centers: [(25.0, 25.0), (75.0, 75.0)],
    },
    pad_x: 32.0,
    pad_y: 8.0,
    title: TextStyle {
        size: 48.0,
        line_height: 48.0,
        weight: 400,
        tracking: -0.05,
        fill: STONE_900,
        pad_y: 8.0,
    },
    author: TextStyle {
        size: 30.0,
        line_height: 36.0,
        weight: 400,
        tracking: 0.0,
        fill: STONE_600,
        pad_y: 0.0,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(Variant::Image.size(), (1200, 630));
        assert_eq!(Variant::Og.size(), (800, 400));
    }

    #[test]
    fn test_prefix_roundtrip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_prefix(variant.prefix()), Some(variant));
        }
        assert_eq!(Variant::from_prefix("images"), None);
        assert_eq!(Variant::Og.to_string(), "og");
    }
}
