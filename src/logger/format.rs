//! Access log format module
//!
//! Supports multiple log formats:
//! - `combined` (Apache/Nginx combined format)
//! - `common` (Common Log Format - CLF)
//! - `json` (one JSON object per line)
//! - Custom patterns with variables

use chrono::Local;

/// Access log entry containing all request/response information
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client address
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    pub http_version: String,
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    pub content_type: Option<String>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    /// Request processing time in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            content_type: None,
            referer: None,
            user_agent: None,
            request_time_us: 0,
        }
    }

    /// Format the log entry according to the specified format
    pub fn format(&self, format: &str) -> String {
        match format {
            "combined" => self.format_combined(),
            "common" => self.format_common(),
            "json" => self.format_json(),
            custom => self.format_custom(custom),
        }
    }

    fn request_uri(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        }
    }

    fn time_local(&self) -> String {
        self.time.format("%d/%b/%Y:%H:%M:%S %z").to_string()
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent "$http_referer" "$http_user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} \"{}\" \"{}\"",
            self.format_common(),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time_local(),
            self.method,
            self.request_uri(),
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }

    fn format_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "http_version": self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "content_type": self.content_type,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }

    /// Custom format with variable substitution
    ///
    /// Supported variables: `$remote_addr`, `$time_local`, `$time_iso8601`,
    /// `$request`, `$request_method`, `$request_uri`, `$request_time`
    /// (seconds, 3 decimals), `$status`, `$body_bytes_sent`, `$content_type`,
    /// `$http_referer`, `$http_user_agent`.
    fn format_custom(&self, pattern: &str) -> String {
        let request_uri = self.request_uri();
        let request_line = format!("{} {} HTTP/{}", self.method, request_uri, self.http_version);
        #[allow(clippy::cast_precision_loss)]
        let request_time = self.request_time_us as f64 / 1_000_000.0;

        // $request_time and $request_* must be replaced before $request
        pattern
            .replace("$remote_addr", &self.remote_addr)
            .replace("$time_local", &self.time_local())
            .replace("$time_iso8601", &self.time.to_rfc3339())
            .replace("$request_time", &format!("{request_time:.3}"))
            .replace("$request_method", &self.method)
            .replace("$request_uri", &request_uri)
            .replace("$request", &request_line)
            .replace("$status", &self.status.to_string())
            .replace("$body_bytes_sent", &self.body_bytes.to_string())
            .replace("$content_type", self.content_type.as_deref().unwrap_or("-"))
            .replace("$http_referer", self.referer.as_deref().unwrap_or("-"))
            .replace("$http_user_agent", self.user_agent.as_deref().unwrap_or("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1:51234".to_string(),
            "GET".to_string(),
            "/ruea.wasm".to_string(),
        );
        entry.query = Some("v=2".to_string());
        entry.status = 200;
        entry.body_bytes = 1024;
        entry.content_type = Some("application/wasm".to_string());
        entry.referer = Some("http://localhost:8099/".to_string());
        entry.user_agent = Some("Mozilla/5.0".to_string());
        entry.request_time_us = 12_000;
        entry
    }

    #[test]
    fn test_format_common() {
        let log = create_test_entry().format("common");
        assert!(log.starts_with("127.0.0.1:51234 - - ["));
        assert!(log.ends_with("\"GET /ruea.wasm?v=2 HTTP/1.1\" 200 1024"));
        assert!(!log.contains("Mozilla/5.0"));
    }

    #[test]
    fn test_format_combined() {
        let log = create_test_entry().format("combined");
        assert!(log.contains("\"GET /ruea.wasm?v=2 HTTP/1.1\" 200 1024"));
        assert!(log.ends_with("\"http://localhost:8099/\" \"Mozilla/5.0\""));
    }

    #[test]
    fn test_format_json() {
        let log = create_test_entry().format("json");
        let value: serde_json::Value = serde_json::from_str(&log).unwrap();
        assert_eq!(value["method"], "GET");
        assert_eq!(value["status"], 200);
        assert_eq!(value["body_bytes"], 1024);
        assert_eq!(value["content_type"], "application/wasm");
        assert_eq!(value["query"], "v=2");
    }

    #[test]
    fn test_format_custom() {
        let log = create_test_entry().format("$request_method $request_uri $status $content_type $request_time");
        assert_eq!(log, "GET /ruea.wasm?v=2 200 application/wasm 0.012");
    }

    #[test]
    fn test_missing_headers_render_as_dash() {
        let entry = AccessLogEntry::new("10.0.0.1:1".into(), "HEAD".into(), "/".into());
        let log = entry.format("combined");
        assert!(log.ends_with("\"-\" \"-\""));
    }
}
