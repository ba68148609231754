//! Static file serving module
//!
//! Maps a request path onto the serving root and loads the file fresh on
//! every request.

use hyper::body::Bytes;
use percent_encoding::percent_decode_str;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

use crate::error::ServeError;
use crate::http::mime::MimeTable;

const INDEX_FILE: &str = "/index.html";

/// A file resolved for one request
#[derive(Debug)]
pub struct ServedFile {
    /// Path relative to the serving root, as requested
    pub path: String,
    pub content: Bytes,
    pub content_type: String,
}

impl ServedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Rewrite `/` to the index page
pub fn rewrite_index(path: &str) -> &str {
    if path == "/" {
        INDEX_FILE
    } else {
        path
    }
}

/// Strip leading separators, leaving a path relative to the serving root
pub fn relative_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Percent-decode a request path; invalid UTF-8 yields `None`
pub fn decode_path(path: &str) -> Option<String> {
    percent_decode_str(path)
        .decode_utf8()
        .ok()
        .map(|p| p.into_owned())
}

/// Load the file named by `request_path` from `root`
///
/// `root` must already be canonical. The path is percent-decoded first;
/// directories count as missing, and a path that canonicalizes outside
/// `root` is refused.
pub async fn load_file(
    root: &Path,
    request_path: &str,
    mime: &MimeTable,
) -> Result<ServedFile, ServeError> {
    let decoded = decode_path(request_path)
        .ok_or_else(|| ServeError::NotFound(relative_path(request_path).to_string()))?;
    let relative = relative_path(&decoded);
    if relative.is_empty() {
        return Err(ServeError::NotFound(relative.to_string()));
    }

    let candidate = root.join(relative);
    let metadata = fs::metadata(&candidate).await;
    match metadata {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(ServeError::NotFound(relative.to_string())),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(ServeError::Io {
                path: candidate,
                source: e,
            })
        }
        Err(_) => return Err(ServeError::NotFound(relative.to_string())),
    }

    let canonical = fs::canonicalize(&candidate)
        .await
        .map_err(|_| ServeError::NotFound(relative.to_string()))?;
    if !canonical.starts_with(root) {
        return Err(ServeError::TraversalBlocked(format!(
            "{request_path} -> {}",
            canonical.display()
        )));
    }

    let content = fs::read(&canonical)
        .await
        .map_err(|source| ServeError::Io {
            path: canonical.clone(),
            source,
        })?;

    Ok(ServedFile {
        path: relative.to_string(),
        content: Bytes::from(content),
        content_type: mime.content_type(Path::new(relative)).to_string(),
    })
}
