//! CLI for the sitegrab image scraper.
//!
//! Zero-argument invocation runs the whole pipeline with the configured
//! defaults; flags override the config file's output locations.

use anyhow::Result;
use clap::Parser;
use sitegrab_core::config;
use sitegrab_core::scrape;
use std::path::PathBuf;

/// Top-level CLI for the sitegrab image scraper.
#[derive(Debug, Parser)]
#[command(name = "sitegrab")]
#[command(about = "Scrape a site's pages for images, download them, and write a mapping report", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (default: ~/.config/sitegrab/config.toml, created on first run).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to write downloaded images into (overrides the config file).
    #[arg(long, value_name = "DIR")]
    pub images_dir: Option<PathBuf>,

    /// Path of the markdown mapping report (overrides the config file).
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        if let Some(dir) = self.images_dir {
            cfg.images_dir = dir;
        }
        if let Some(report) = self.report {
            cfg.report_path = report;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        println!("🐩 sitegrab image extractor: {}", cfg.base_url);
        println!("{}", "=".repeat(50));

        let summary = scrape::run(&cfg)?;
        tracing::info!(
            unique_urls = summary.unique_urls,
            downloaded = summary.downloaded,
            "run complete"
        );
        Ok(())
    }
}
