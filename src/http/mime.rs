//! MIME type detection module
//!
//! Returns the Content-Type for a file based on its extension. The table is
//! authoritative: no platform MIME database is consulted, so `.wasm` always
//! maps to `application/wasm`.

use std::collections::HashMap;
use std::path::Path;

/// Content type for files whose extension is not in the table
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Built-in extension table
const BUILTIN: &[(&str, &str)] = &[
    ("wasm", "application/wasm"),
    ("js", "application/javascript"),
    ("html", "text/html; charset=utf-8"),
    ("css", "text/css"),
];

/// Extension -> MIME type table, keyed by lowercase extension
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<String, String>,
}

impl MimeTable {
    /// Built-in table extended (or overridden) by `overrides`
    ///
    /// # Examples
    /// ```ignore
    /// let mut extra = HashMap::new();
    /// extra.insert("map".to_string(), "application/json".to_string());
    /// let table = MimeTable::with_overrides(&extra);
    /// assert_eq!(table.content_type(Path::new("app.js.map")), "application/json");
    /// ```
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut table = Self::default();
        for (ext, content_type) in overrides {
            let ext = ext.trim_start_matches('.').to_ascii_lowercase();
            table.types.insert(ext, content_type.clone());
        }
        table
    }

    /// Content type for `path`, matching the extension case-insensitively
    pub fn content_type(&self, path: &Path) -> &str {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|e| self.types.get(&e.to_ascii_lowercase()))
            .map_or(DEFAULT_CONTENT_TYPE, String::as_str)
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        let types = BUILTIN
            .iter()
            .map(|(ext, ty)| ((*ext).to_string(), (*ty).to_string()))
            .collect();
        Self { types }
    }
}
