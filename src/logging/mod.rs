//! Application logging functionality
//!
//! Handles log file management, output redirection and logging for runs that
//! never start a Bevy app.

use crate::core::config::ConfigFile;
use std::fs;
use std::fs::OpenOptions;
use std::os::unix::io::AsRawFd;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Filter used by headless runs when `RUST_LOG` is unset
pub const HEADLESS_LOG_FILTER: &str = "pointlayer=info";

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    logs_dir().join(format!("pointlayer-{}.log", timestamp))
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> anyhow::Result<()> {
    let logs_dir = logs_dir();
    fs::create_dir_all(&logs_dir)?;
    Ok(())
}

/// Set up log redirection to ~/.config/pointlayer/logs/
pub fn setup_log_redirection() -> anyhow::Result<()> {
    // Only log to files once the user has created a config directory
    let config_dir = ConfigFile::config_dir();
    if !config_dir.exists() {
        return Err(anyhow::anyhow!(
            "Config directory doesn't exist, run with --new-config first"
        ));
    }

    initialize_logs_directory()?;

    let log_file_path = current_log_file();

    // Truncate: one log file per day, last run wins
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_file_path)?;

    // Redirect stdout and stderr to the log file
    unsafe {
        libc::dup2(log_file.as_raw_fd(), libc::STDOUT_FILENO);
        libc::dup2(log_file.as_raw_fd(), libc::STDERR_FILENO);
    }

    println!(
        "=== pointlayer started at {} ===",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Logs redirected to: {:?}", log_file_path);

    Ok(())
}

/// Install a plain fmt subscriber for runs without a Bevy `LogPlugin`.
///
/// Respects `RUST_LOG`; a subscriber that is already installed is kept.
pub fn init_headless_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(HEADLESS_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_logs_dir() {
        let log_file = current_log_file();
        assert_eq!(log_file.parent(), Some(logs_dir().as_path()));

        let name = log_file.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("pointlayer-"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn test_headless_logging_can_be_initialized_twice() {
        init_headless_logging();
        init_headless_logging();
    }
}
