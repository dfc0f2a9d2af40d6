//! Tracing setup.
//!
//! Logs go to a file with ANSI colors off so they never land on the
//! alternate screen.

use crate::config::LogConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber appending to the configured log file.
///
/// `RUST_LOG` takes precedence over the configured filter. Calling this
/// twice keeps the first subscriber and leaves its file intact.
pub fn init(config: &LogConfig) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.file())
        .with_context(|| format!("Failed to open log file {}", config.file().display()))?;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(select_filter(rust_log.as_deref(), config.filter()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Uses `from_env` when it is set and valid, the configured filter otherwise.
fn select_filter(from_env: Option<&str>, configured: &str) -> EnvFilter {
    from_env
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(configured))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::io::Write;

    fn log_config(path: &std::path::Path) -> LogConfig {
        let toml = format!("[log]\nfile = {:?}\n", path.display().to_string());
        AppConfig::from_toml(&toml).unwrap().log().clone()
    }

    #[test]
    fn test_env_filter_wins_over_config() {
        let filter = select_filter(Some("debug"), "info").to_string();
        assert!(filter.eq_ignore_ascii_case("debug"));
    }

    #[test]
    fn test_config_filter_used_without_env() {
        for from_env in [None, Some("  ")] {
            let filter = select_filter(from_env, "warn").to_string();
            assert!(filter.eq_ignore_ascii_case("warn"));
        }
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewind.log");

        init(&log_config(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_second_init_keeps_existing_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewind.log");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "earlier session").unwrap();

        let config = log_config(&path);
        init(&config).unwrap();
        init(&config).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("earlier session\n"));
    }

    #[test]
    fn test_unwritable_log_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("rewind.log");
        assert!(init(&log_config(&path)).is_err());
    }
}
