use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default desktop-browser User-Agent sent with every request.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// One page to scrape: a path suffix under the base URL plus a human-readable
/// name used in progress output ("homepage", "gallery", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSpec {
    /// Path suffix appended to the base URL; empty string means the base URL itself.
    pub path: String,
    /// Display name for progress and log lines.
    pub name: String,
}

impl PageSpec {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

/// Global configuration loaded from `~/.config/sitegrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Domain root from which page paths and root-relative image paths are resolved.
    pub base_url: String,
    /// Pages to scrape for `<img>` tags, in order.
    pub pages: Vec<PageSpec>,
    /// Directory (relative to the working directory) where images are written.
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    /// Path of the markdown mapping report, overwritten each run.
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Total per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Fixed pacing delay between downloads, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("IMAGE_MAPPING.md")
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_delay_ms() -> u64 {
    500
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://partipoodlesaustralia.com".to_string(),
            pages: vec![
                PageSpec::new("", "homepage"),
                PageSpec::new("/gallery", "gallery"),
            ],
            images_dir: default_images_dir(),
            report_path: default_report_path(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl ScrapeConfig {
    /// Full URL for a page: base URL plus the page's path suffix.
    pub fn page_url(&self, page: &PageSpec) -> String {
        format!("{}{}", self.base_url, page.path)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitegrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScrapeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScrapeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit path (e.g. `--config`).
pub fn load_from_path(path: &Path) -> Result<ScrapeConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: ScrapeConfig = toml::from_str(&data)?;
    Ok(cfg)
}
