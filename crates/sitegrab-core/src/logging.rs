//! Logging init: file under the XDG state dir, falling back to stderr.
//!
//! Stdout is reserved for user-facing progress output, so the structured
//! log goes to `~/.local/state/sitegrab/sitegrab.log` when that path is
//! writable and to stderr otherwise.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

fn log_file() -> Option<File> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitegrab").ok()?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir).ok()?;
    let path: PathBuf = log_dir.join("sitegrab.log");
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
}

/// Initialize structured logging. Never fails: if the state-dir log file
/// cannot be opened, logs go to stderr instead.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sitegrab=debug"));

    let writer = match log_file() {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
}
