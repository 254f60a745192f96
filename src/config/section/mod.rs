//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module  | TOML Section                               | Purpose                         |
//! |---------|--------------------------------------------|---------------------------------|
//! | `site`  | `[site]`, `[pages.*]`, `[[socials]]`, `[meta]` | Owner info, page meta, links |
//! | `theme` | `[theme]`                                  | Layout, date and post toggles   |
//! | `build` | `[build]`                                  | Paths and platform settings     |
//! | `og`    | `[og]`                                     | Preview image generation        |
//! | `serve` | `[serve]`                                  | On-demand image server          |

pub mod build;
pub mod og;
mod serve;
pub mod site;
pub mod theme;

// Re-export section configs
pub use build::BuildSectionConfig;
pub use og::OgConfig;
pub use serve::ServeConfig;
pub use site::{DefaultMeta, Metadata, Page, PagesConfig, Site, Social};
pub use theme::ThemeConfig;
