//! Logger module
//!
//! Console/file logging for the development server:
//! - Startup banner and preflight results
//! - Per-request trace lines and access log entries
//! - Error and warning logging

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

const RULE: &str = "============================================================";

pub fn log_banner(port: u16, root: &Path) {
    write_info(RULE);
    write_info("WebAssembly Development Server");
    write_info(RULE);
    write_info(&format!("Server starting at: http://localhost:{port}"));
    write_info(&format!("Serving directory: {}", root.display()));
    write_info("");
}

#[allow(clippy::cast_precision_loss)]
pub fn log_preflight_present(name: &str, size: u64) {
    let size_mb = size as f64 / (1024.0 * 1024.0);
    write_info(&format!("✓ {name} ({size_mb:.2} MB)"));
}

pub fn log_preflight_missing(name: &str) {
    write_info(&format!("✗ {name} - MISSING!"));
}

pub fn log_preflight_failed(missing: &[String]) {
    write_error(&format!("\nERROR: Missing required files: {}", missing.join(", ")));
    write_error("Please run the build script first and copy wasm_exec.js next to index.html");
}

pub fn log_server_ready(addr: &SocketAddr, port: u16) {
    write_info(&format!("\nListening on: {addr}"));
    write_info(&format!("Open http://localhost:{port} in your browser"));
    write_info("Check the browser console and this terminal for messages");
    write_info("Press Ctrl+C to stop the server\n");
}

pub fn log_request(path: &str) {
    write_info(&format!("Request: {path}"));
}

pub fn log_wasm_served(content_type: &str) {
    write_info(&format!("  -> Serving WASM file with MIME type: {content_type}"));
}

pub fn log_js_served() {
    write_info("  -> Serving JS file");
}

pub fn log_sent(size: usize, content_type: &str) {
    write_info(&format!("  -> Sent {size} bytes as {content_type}"));
}

pub fn log_not_found(path: &str) {
    write_info(&format!("  -> File not found: {path}"));
}

pub fn log_serve_error(path: &str, err: &impl std::fmt::Display) {
    write_error(&format!("  -> Error serving {path}: {err}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_signal(name: &str) {
    write_info(&format!("\n[SIGNAL] {name} received, initiating shutdown..."));
}

pub fn log_shutdown() {
    write_info("\nServer stopped by user");
}
