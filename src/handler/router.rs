//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, path
//! resolution, trace logging and conversion of errors into responses.

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::error::ServeError;
use crate::handler::static_files::{self, ServedFile};
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Main entry point for HTTP request handling
///
/// Never fails: not-found and I/O errors become 404/500 responses.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
{
    let started = Instant::now();
    let method = req.method().clone();
    let path = static_files::rewrite_index(req.uri().path()).to_string();
    let is_head = method == Method::HEAD;

    logger::log_request(&path);

    let response = match method {
        Method::GET | Method::HEAD => serve(&path, &state, is_head).await,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    if state.config.logging.access_log {
        let entry = access_entry(&req, peer_addr, &response, started);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

async fn serve(path: &str, state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    match static_files::load_file(&state.root, path, &state.mime).await {
        Ok(file) => {
            log_served(&file);
            http::build_file_response(file.content, &file.content_type, is_head)
        }
        Err(ServeError::NotFound(missing)) => {
            logger::log_not_found(&missing);
            http::build_404_response(&missing)
        }
        Err(ServeError::TraversalBlocked(detail)) => {
            logger::log_warning(&format!("Path traversal attempt blocked: {detail}"));
            http::build_404_response(static_files::relative_path(path))
        }
        Err(e) => {
            logger::log_serve_error(static_files::relative_path(path), &e);
            http::build_500_response(&e.to_string())
        }
    }
}

fn log_served(file: &ServedFile) {
    let ext = Path::new(&file.path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("wasm") => logger::log_wasm_served(&file.content_type),
        Some("js") => logger::log_js_served(),
        _ => {}
    }
    logger::log_sent(file.size(), &file.content_type);
}

fn access_entry<B>(
    req: &Request<B>,
    peer_addr: SocketAddr,
    response: &Response<Full<Bytes>>,
    started: Instant,
) -> AccessLogEntry {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };
    let response_header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(
        peer_addr.to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = format!("{:?}", req.version()).trim_start_matches("HTTP/").to_string();
    entry.status = response.status().as_u16();
    // Bytes actually sent: HEAD responses keep Content-Length but carry no body
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.content_type = response_header("content-type");
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    entry
}
