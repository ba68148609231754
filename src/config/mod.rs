// Configuration module entry point
// Loads the server configuration and builds the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::ServeError;

pub use state::AppState;
pub use types::Config;
use types::{default_required_files, LoggingConfig, PerformanceConfig, PreflightConfig, ServerConfig};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "devserver.toml";

impl Config {
    /// Load configuration from the default file, falling back to defaults
    pub fn load() -> Result<Self, ServeError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from the given TOML file path
    /// A missing file is not an error; every field has a default
    pub fn load_from(config_path: &str) -> Result<Self, ServeError> {
        let settings = config::Config::builder()
            .add_source(
                config::File::new(config_path, config::FileFormat::Toml).required(false),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8099)?
            .set_default("server.root", ".")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.header_read_timeout", 30)?
            .set_default("preflight.enabled", true)?
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would only fail later, e.g. inside the runtime builder
    pub fn validate(&self) -> Result<(), ServeError> {
        if self.server.workers == Some(0) {
            return Err(ServeError::InvalidSetting {
                key: "server.workers",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, ServeError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|_| ServeError::Address(addr))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8099,
                root: ".".to_string(),
                workers: None,
            },
            logging: LoggingConfig {
                access_log: true,
                access_log_format: "common".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
            performance: PerformanceConfig {
                keep_alive: true,
                header_read_timeout: 30,
            },
            preflight: PreflightConfig {
                enabled: true,
                required_files: default_required_files(),
            },
            mime: std::collections::HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();

        assert_eq!(cfg.server.port, 8099);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.root, ".");
        assert!(cfg.logging.access_log);
        assert!(cfg.preflight.enabled);
        assert_eq!(
            cfg.preflight.required_files,
            vec!["index.html", "ruea.wasm", "wasm_exec.js"]
        );
        assert!(cfg.mime.is_empty());
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "0.0.0.0:8099".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devserver.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9000
root = "dist"

[preflight]
required_files = ["index.html", "app.wasm"]

[mime]
map = "application/json"
"#
        )
        .unwrap();

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.root, "dist");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.preflight.required_files, vec!["index.html", "app.wasm"]);
        assert_eq!(cfg.mime.get("map").map(String::as_str), Some("application/json"));
    }

    #[test]
    fn test_zero_workers_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devserver.toml");
        std::fs::write(&path, "[server]\nworkers = 0\n").unwrap();

        let err = Config::load_from(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            ServeError::InvalidSetting { key: "server.workers", .. }
        ));
        assert!(err.to_string().contains("server.workers"));
    }

    #[test]
    fn test_positive_workers_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devserver.toml");
        std::fs::write(&path, "[server]\nworkers = 2\n").unwrap();

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.workers, Some(2));
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let mut cfg = Config::default();
        cfg.server.host = "not a host".to_string();
        assert!(matches!(cfg.get_socket_addr(), Err(ServeError::Address(_))));
    }
}
