pub mod config;
pub mod logging;

pub mod downloader;
pub mod extract;
pub mod fetch;
pub mod report;
pub mod scrape;
pub mod url_model;
