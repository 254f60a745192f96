//! On-demand image server.
//!
//! Every request reloads `site.toml` if it changed, re-reads the collection
//! and renders the matching image from scratch. Nothing is written to disk.

mod lifecycle;
mod response;

pub use lifecycle::setup_shutdown_handler;

use crate::{
    config::{SiteConfig, cfg, reload_config},
    content::Collection,
    debug, log,
    og::{self, route},
};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Method, Request, Server};

/// Worker threads answering requests.
const WORKERS: usize = 4;

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
}

/// Bind the HTTP server and register it for Ctrl+C shutdown.
pub fn bind_server(config: &SiteConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    for variant in config.og.enabled() {
        debug!("serve"; "http://{}/{}/<slug>.png", addr, variant.prefix());
    }

    Ok(BoundServer { server, addr })
}

impl BoundServer {
    /// Get the bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the request loop (blocking until shutdown).
    pub fn run(self) -> Result<()> {
        run_request_loop(&self.server)
    }
}

/// Serve until Ctrl+C.
pub fn serve(config: &SiteConfig) -> Result<()> {
    bind_server(config)?.run()
}

fn run_request_loop(server: &Server) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKERS)
        .build()
        .context("failed to create thread pool")?;

    for request in server.incoming_requests() {
        pool.spawn(move || {
            if let Err(e) = handle_request(request) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request against the latest config.
fn handle_request(request: Request) -> Result<()> {
    if lifecycle::is_shutdown() {
        return response::respond_unavailable(request);
    }

    match reload_config() {
        Ok(true) => log!("serve"; "config reloaded"),
        Ok(false) => {}
        Err(e) => log!("serve"; "config reload failed, keeping previous: {e:#}"),
    }

    respond(request, &cfg())
}

/// Route a request to its image.
fn respond(request: Request, config: &SiteConfig) -> Result<()> {
    if !matches!(request.method(), Method::Get | Method::Head) {
        return response::respond_method_not_allowed(request);
    }

    let collection = match Collection::load(&config.build.collection_dir()) {
        Ok(collection) => collection,
        Err(e) => {
            log!("serve"; "{e:#}");
            return response::respond_error(request, &format!("{e:#}"));
        }
    };

    let Some((variant, route)) = route::resolve(request.url(), &collection, &config.og) else {
        debug!("serve"; "404 {}", request.url());
        return response::respond_not_found(request);
    };

    match og::generate(&route.title, variant, config) {
        Ok(image) => {
            debug!("serve"; "200 {} ({} bytes)", request.url(), image.bytes.len());
            response::respond_png(request, image)
        }
        Err(e) => {
            log!("serve"; "failed to render {}: {e}", route.url_path(variant));
            response::respond_error(request, &e)
        }
    }
}
