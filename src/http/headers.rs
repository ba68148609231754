//! Development response headers
//!
//! Cross-origin isolation (needed for `SharedArrayBuffer` and threaded WASM)
//! plus cache-defeating headers so every rebuild is picked up.

use hyper::http::response::Builder;

/// Header set attached to every response
pub const DEV_HEADERS: [(&str, &str); 5] = [
    ("Cross-Origin-Embedder-Policy", "require-corp"),
    ("Cross-Origin-Opener-Policy", "same-origin"),
    ("Cache-Control", "no-cache, no-store, must-revalidate"),
    ("Pragma", "no-cache"),
    ("Expires", "0"),
];

/// Append the development header set to a response builder
pub fn with_dev_headers(builder: Builder) -> Builder {
    DEV_HEADERS
        .iter()
        .fold(builder, |b, (name, value)| b.header(*name, *value))
}
