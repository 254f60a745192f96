//! HTTP response handlers.

use crate::og::{self, OgImage};
use crate::utils::mime::types::PLAIN;
use anyhow::{Result, anyhow};
use std::fmt::Display;
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with a generated image.
pub fn respond_png(request: Request, image: OgImage) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, og::CONTENT_TYPE);
    }
    send_body(request, 200, og::CONTENT_TYPE, image.bytes)
}

/// Respond with 404 (no such image route).
pub fn respond_not_found(request: Request) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 404, PLAIN);
    }
    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with 405 for anything but GET/HEAD.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_data(b"405 Method Not Allowed".to_vec())
        .with_status_code(StatusCode(405))
        .with_header(make_header("Content-Type", PLAIN)?)
        .with_header(make_header("Allow", "GET, HEAD")?);
    request.respond(response)?;
    Ok(())
}

/// Respond with 500 carrying the failure as plain text.
pub fn respond_error(request: Request, error: &dyn Display) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 500, PLAIN);
    }
    let body = format!("500 Internal Server Error\n\n{error}\n");
    send_body(request, 500, PLAIN, body.into_bytes())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type)?)
        .with_header(make_header("Cache-Control", "no-cache")?);
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header {key}: {value}"))
}
