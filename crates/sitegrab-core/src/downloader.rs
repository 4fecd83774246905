//! Sequential image downloader.
//!
//! One GET per URL, one attempt each, fixed pacing sleep after every
//! attempt. Failures are collected per item; the run never aborts on a
//! single bad URL.

use crate::config::ScrapeConfig;
use crate::fetch::{self, FetchError};
use crate::url_model;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Why a single image download failed.
#[derive(Debug)]
pub enum DownloadError {
    /// The GET itself failed (curl error or non-2xx status).
    Fetch(FetchError),
    /// The bytes arrived but could not be written to disk.
    Write(std::io::Error),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::Fetch(e) => write!(f, "{}", e),
            DownloadError::Write(e) => write!(f, "write failed: {}", e),
        }
    }
}

impl std::error::Error for DownloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DownloadError::Fetch(e) => Some(e),
            DownloadError::Write(e) => Some(e),
        }
    }
}

/// Result of one download attempt: the source URL, the derived local
/// filename, and either the written path or the failure reason.
#[derive(Debug)]
pub struct DownloadOutcome {
    pub url: String,
    pub filename: String,
    pub result: Result<PathBuf, DownloadError>,
}

impl DownloadOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Fetches `url` and writes the body verbatim to `dest`, overwriting any
/// existing file (collision policy: last write wins).
pub fn download_one(url: &str, dest: &Path, cfg: &ScrapeConfig) -> Result<(), DownloadError> {
    let bytes = fetch::fetch_bytes(url, cfg).map_err(DownloadError::Fetch)?;
    fs::write(dest, &bytes).map_err(DownloadError::Write)?;
    tracing::debug!(url, dest = %dest.display(), len = bytes.len(), "image written");
    Ok(())
}

/// Downloads every URL in order into `cfg.images_dir`, printing per-item
/// progress and sleeping `cfg.delay_ms` after each attempt (success or
/// failure). Returns one outcome per URL.
pub fn download_all(urls: &[String], cfg: &ScrapeConfig) -> Vec<DownloadOutcome> {
    let total = urls.len();
    let mut outcomes = Vec::with_capacity(total);

    for (i, url) in urls.iter().enumerate() {
        let ordinal = i + 1;
        let filename = url_model::derive_filename(url, ordinal);
        let dest = cfg.images_dir.join(&filename);

        println!("\n📥 Downloading {}/{}: {}", ordinal, total, filename);
        let result = match download_one(url, &dest, cfg) {
            Ok(()) => {
                println!("✅ Downloaded: {}", filename);
                Ok(dest)
            }
            Err(e) => {
                println!("❌ Failed to download {}: {}", url, e);
                tracing::warn!(url = %url, error = %e, "download failed");
                Err(e)
            }
        };

        outcomes.push(DownloadOutcome {
            url: url.clone(),
            filename,
            result,
        });

        // Be respectful: fixed pacing delay, not a backoff.
        thread::sleep(Duration::from_millis(cfg.delay_ms));
    }

    outcomes
}
