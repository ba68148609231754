//! HTTP response building module
//!
//! Every builder routes through `with_dev_headers`, so isolation and
//! cache-defeating headers are present on success and error responses alike.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::headers::with_dev_headers;

/// Build 200 OK response for a file
///
/// `Content-Length` is the file size even for HEAD, where the body is dropped.
pub fn build_file_response(data: Bytes, content_type: &str, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    with_dev_headers(Response::builder().status(200))
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response naming the missing path
pub fn build_404_response(path: &str) -> Response<Full<Bytes>> {
    build_text_response(404, format!("File not found: {path}"))
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let mut resp = build_text_response(405, "405 Method Not Allowed".to_string());
    resp.headers_mut().insert(
        hyper::header::ALLOW,
        hyper::header::HeaderValue::from_static("GET, HEAD"),
    );
    resp
}

/// Build 500 Internal Server Error response carrying the error text
pub fn build_500_response(message: &str) -> Response<Full<Bytes>> {
    build_text_response(500, format!("Server error: {message}"))
}

fn build_text_response(status: u16, body: String) -> Response<Full<Bytes>> {
    with_dev_headers(Response::builder().status(status))
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body.clone())))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
