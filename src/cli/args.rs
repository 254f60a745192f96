//! Command-line interface definitions.

use crate::og::Variant;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Open Graph image generator for the blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: site.toml)
    #[arg(short = 'C', long, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render every image route into the output directory
    #[command(visible_alias = "b")]
    Build {
        /// Only render this variant (default: all enabled)
        #[arg(short = 't', long, value_enum)]
        variant: Option<Variant>,

        /// Remove previously generated images first
        #[arg(long)]
        clean: bool,

        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Serve images on demand over HTTP
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Render a single title to a PNG file
    #[command(visible_alias = "r")]
    Render {
        /// Title text to render
        title: String,

        /// Output file (default: `<variant>.png`)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: Option<PathBuf>,

        /// Image variant
        #[arg(short = 't', long, value_enum, default_value_t = Variant::Og)]
        variant: Variant,
    },

    /// Print the image routes as JSON
    Routes {
        /// Only list this variant (default: all enabled)
        #[arg(short = 't', long, value_enum)]
        variant: Option<Variant>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate the config and content collection
    Check {
        /// Print the resolved config as JSON
        #[arg(long)]
        json: bool,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
}
