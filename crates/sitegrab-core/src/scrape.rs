//! End-to-end scrape pipeline.
//!
//! Strictly sequential: every page is fetched and parsed before the first
//! download starts, and the report is written only after the last download
//! attempt. A failed page or image is logged and skipped; only failure to
//! create the images directory aborts the run.

use crate::config::ScrapeConfig;
use crate::downloader;
use crate::extract;
use crate::fetch;
use crate::report;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;

/// Counts from a completed run.
#[derive(Debug)]
pub struct ScrapeSummary {
    /// Unique image URLs discovered across all pages.
    pub unique_urls: usize,
    /// Downloads that succeeded.
    pub downloaded: usize,
    /// Filenames listed in the mapping report.
    pub report_files: Vec<String>,
}

/// Fetches every configured page and returns the deduplicated image URLs
/// in insertion order (first sighting wins), so download order and the
/// ordinals of synthesized filenames are stable across runs.
pub fn collect_image_urls(cfg: &ScrapeConfig) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut urls: Vec<String> = Vec::new();

    for page in &cfg.pages {
        println!("\n🔍 Scraping {}...", page.name);
        let page_url = cfg.page_url(page);

        let html = match fetch::fetch_text(&page_url, cfg) {
            Ok(html) => html,
            Err(e) => {
                println!("❌ Error scraping {}: {}", page.name, e);
                tracing::warn!(page = %page.name, url = %page_url, error = %e, "page fetch failed");
                continue;
            }
        };

        println!("Found {} image tags", extract::count_img_tags(&html));
        for url in extract::extract_image_urls(&html, &page_url, &cfg.base_url) {
            if seen.insert(url.clone()) {
                urls.push(url);
            }
        }
    }

    urls
}

/// Runs the whole pipeline: scrape pages, download images, write the
/// mapping report.
pub fn run(cfg: &ScrapeConfig) -> Result<ScrapeSummary> {
    fs::create_dir_all(&cfg.images_dir).with_context(|| {
        format!("failed to create images dir {}", cfg.images_dir.display())
    })?;

    let urls = collect_image_urls(cfg);
    println!("\n📊 Found {} unique images to download", urls.len());

    let outcomes = downloader::download_all(&urls, cfg);
    let downloaded = outcomes.iter().filter(|o| o.succeeded()).count();

    println!(
        "\n🎉 Successfully downloaded {}/{} images!",
        downloaded,
        urls.len()
    );
    let images_abs = fs::canonicalize(&cfg.images_dir).unwrap_or_else(|_| cfg.images_dir.clone());
    println!("Images saved to: {}", images_abs.display());

    let report_files = report::write_mapping(&cfg.images_dir, &cfg.report_path)?;
    println!(
        "📝 Created {} with organization guide",
        cfg.report_path.display()
    );

    Ok(ScrapeSummary {
        unique_urls: urls.len(),
        downloaded,
        report_files,
    })
}
