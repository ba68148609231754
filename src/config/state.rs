// Application state module
// Immutable per-process state shared by every connection

use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::ServeError;
use crate::http::mime::MimeTable;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Canonical serving root, fixed for the lifetime of the process
    pub root: PathBuf,
    pub mime: MimeTable,
}

impl AppState {
    /// Resolve the serving root and build the MIME table from `config`
    pub fn new(config: Config) -> Result<Self, ServeError> {
        let root = Path::new(&config.server.root)
            .canonicalize()
            .map_err(|source| ServeError::Root {
                path: PathBuf::from(&config.server.root),
                source,
            })?;
        let mime = MimeTable::with_overrides(&config.mime);

        Ok(Self { config, root, mime })
    }
}
