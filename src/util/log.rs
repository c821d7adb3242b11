// src/util/log.rs

//! Logger Utility - Routes `tracing` output to a file, since a TUI owns stdout
use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use chrono::Local;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info";

/// Path of the log file for a session started now
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    log_dir.join(format!("chat-{}.log", stamp))
}

/// Install the global subscriber writing to a fresh file under `log_dir`.
/// Returns the file path so the caller can mention it on exit.
pub fn init(log_dir: &Path) -> std::io::Result<PathBuf> {
    create_dir_all(log_dir)?;
    let path = log_file_path(log_dir);
    let file = File::create(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(path)
}
