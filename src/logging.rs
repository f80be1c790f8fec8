//! Diagnostic log setup.
//!
//! The terminal belongs to the UI, so events go to a file instead of stderr.
//! Logging is optional: if the file cannot be opened the app runs without it.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the global subscriber described by `config`.
///
/// Returns the log file path when logging was enabled. Safe to call more
/// than once; only the first successful call installs a subscriber.
pub fn init_logging(config: &AppConfig) -> Option<PathBuf> {
    let path = config.log_file.clone()?;
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    installed.then_some(path)
}

fn open_log_file(path: &Path) -> Option<std::fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok()?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_when_no_file() {
        let config = AppConfig::new("k").with_log_file(None);
        assert!(init_logging(&config).is_none());
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("browser.log");
        assert!(open_log_file(&path).is_some());
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_fails_under_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        assert!(open_log_file(&blocker.join("browser.log")).is_none());
    }
}
