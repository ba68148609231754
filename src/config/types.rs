// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::HashMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub preflight: PreflightConfig,
    /// Extension -> MIME type overrides, merged over the built-in table
    #[serde(default)]
    pub mime: HashMap<String, String>,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serving root, relative to the working directory
    pub root: String,
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Seconds a client may take to send a request's headers; 0 disables
    pub header_read_timeout: u64,
}

/// Startup asset check
#[derive(Debug, Deserialize, Clone)]
pub struct PreflightConfig {
    pub enabled: bool,
    #[serde(default = "default_required_files")]
    pub required_files: Vec<String>,
}

pub fn default_required_files() -> Vec<String> {
    vec![
        "index.html".to_string(),
        "ruea.wasm".to_string(),
        "wasm_exec.js".to_string(),
    ]
}
