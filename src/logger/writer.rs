//! Log writer module
//!
//! Thread-safe log writing to files or stdout/stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

/// Thread-safe log writer
pub struct LogWriter {
    /// Access/info log target
    access: LogTarget,
    /// Error log target
    error: LogTarget,
}

impl LogWriter {
    /// Create a new log writer with optional file paths
    fn new(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<Self> {
        let access = match access_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stdout,
        };

        let error = match error_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stderr,
        };

        Ok(Self { access, error })
    }

    /// Write info or access message
    pub fn write_info(&self, message: &str) {
        write_to_target(&self.access, message);
    }

    /// Write to error log
    pub fn write_error(&self, message: &str) {
        write_to_target(&self.error, message);
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

fn write_to_target(target: &LogTarget, message: &str) {
    match target {
        LogTarget::Stdout => println!("{message}"),
        LogTarget::Stderr => eprintln!("{message}"),
        LogTarget::File(file) => {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{message}");
            }
        }
    }
}

/// Initialize the global log writer
///
/// Returns error if log files cannot be opened or the writer is already set.
pub fn init(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let writer = LogWriter::new(access_log_file, error_log_file)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Global log writer, if `init()` has been called
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_targets() {
        let dir = tempfile::tempdir().unwrap();
        let access = dir.path().join("logs/access.log");
        let error = dir.path().join("logs/error.log");

        let writer =
            LogWriter::new(Some(access.to_str().unwrap()), Some(error.to_str().unwrap())).unwrap();
        writer.write_info("Request: /index.html");
        writer.write_error("[ERROR] boom");
        writer.write_info("Request: /app.wasm");

        let access_text = std::fs::read_to_string(&access).unwrap();
        assert_eq!(access_text, "Request: /index.html\nRequest: /app.wasm\n");
        let error_text = std::fs::read_to_string(&error).unwrap();
        assert_eq!(error_text, "[ERROR] boom\n");
    }
}
