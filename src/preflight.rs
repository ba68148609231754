//! Startup asset check
//!
//! Verifies the expected build outputs exist in the serving root before the
//! listener is bound.

use std::path::Path;

use crate::error::ServeError;
use crate::logger;

/// Result of looking up one expected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub name: String,
    /// File size in bytes, `None` when the file is missing
    pub size: Option<u64>,
}

#[derive(Debug, Default)]
pub struct PreflightReport {
    pub files: Vec<FileStatus>,
}

impl PreflightReport {
    pub fn missing(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| f.size.is_none())
            .map(|f| f.name.clone())
            .collect()
    }

    pub fn into_result(self) -> Result<(), ServeError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ServeError::MissingFiles(missing))
        }
    }
}

/// Check every file in `required` under `root`, logging one line per file
pub fn check_required_files(root: &Path, required: &[String]) -> PreflightReport {
    let files = required
        .iter()
        .map(|name| {
            let size = std::fs::metadata(root.join(name))
                .ok()
                .filter(std::fs::Metadata::is_file)
                .map(|m| m.len());
            match size {
                Some(bytes) => logger::log_preflight_present(name, bytes),
                None => logger::log_preflight_missing(name),
            }
            FileStatus {
                name: name.clone(),
                size,
            }
        })
        .collect();

    PreflightReport { files }
}
