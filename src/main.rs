//! nano-og - site configuration and Open Graph image generator for a
//! markdown blog.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod logger;
mod og;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    cli::serve::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Build { variant, .. } => cli::build::build_images(&config, *variant).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve(&config),
        Commands::Render {
            title,
            path,
            variant,
        } => cli::render::render_title(&config, title, *variant, path.as_deref()).map(|_| ()),
        Commands::Routes { variant, pretty } => {
            cli::routes::list_routes(&config, *variant, *pretty)
        }
        Commands::Check { json } => cli::check::check_site(&config, *json),
    }
}
