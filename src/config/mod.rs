//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── og         # [og]
//! │   ├── serve      # [serve]
//! │   ├── site/      # [site], [pages.*], [[socials]], [meta]
//! │   └── theme/     # [theme] and [theme.date]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, diagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── util           # Config lookup, path and URL helpers
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `[site]`         | Owner name, email, homepage post count           |
//! | `[pages.*]`      | Title and description of the home/blog pages    |
//! | `[[socials]]`    | Social links in display order                    |
//! | `[meta]`         | Fallback `<head>` metadata                       |
//! | `[theme]`        | Layout, date format and per-post toggles         |
//! | `[build]`        | Content/output paths and platform settings       |
//! | `[og]`           | Preview image author, fonts and extra pages      |
//! | `[serve]`        | Image server interface and port                  |

pub mod section;
pub mod types;
pub mod util;

use util::{find_config_file, normalize_path};

// Re-export from section/
pub use section::{
    BuildSectionConfig, DefaultMeta, Metadata, OgConfig, Page, PagesConfig, ServeConfig, Site,
    Social, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site owner metadata
    #[serde(default)]
    pub site: Site,

    /// Home and blog page metadata
    #[serde(default)]
    pub pages: PagesConfig,

    /// Social links, in display order
    #[serde(default)]
    pub socials: Vec<Social>,

    /// Fallback page metadata
    #[serde(default)]
    pub meta: DefaultMeta,

    /// Theme settings
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Preview image settings
    #[serde(default)]
    pub og: OgConfig,

    /// Image server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file.
    /// The project root is the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(
                "config file '{}' not found in this directory or any parent",
                cli.config.display()
            );
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.normalize_paths(&root, cli);
        self.apply_command_options(cli);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Metadata of a fixed page.
    pub fn page(&self, page: Page) -> &Metadata {
        self.pages.get(page)
    }

    /// Caption rendered under preview image titles.
    pub fn og_author(&self) -> &str {
        self.og.author(&self.site.name)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { clean, verbose, .. } => {
                crate::logger::set_verbose(*verbose);
                self.build.clean = *clean;
            }
            Commands::Serve {
                interface,
                port,
                verbose,
            } => {
                crate::logger::set_verbose(*verbose);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Render { .. } | Commands::Routes { .. } | Commands::Check { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path, cli: &Cli) {
        // Apply CLI path overrides first
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let cwd = std::env::current_dir().unwrap_or_default();
        self.root = normalize_path(&cwd, root);
        self.config_path = normalize_path(&cwd, &self.config_path);

        self.build.content = normalize_path(&self.root, &self.build.content);
        self.build.output = normalize_path(&self.root, &self.build.output);
        self.og.normalize(&self.root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.pages.validate(&mut diag);
        Social::validate_all(&self.socials, &mut diag);
        self.meta.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.build.validate(&mut diag);
        self.og.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\nname = \"Test\"\nemail = \"test@example.com\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}
