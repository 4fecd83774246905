//! Blocking HTTP GET helpers over the curl crate (libcurl).
//!
//! One attempt per request, no retry. Every request carries the configured
//! User-Agent and total timeout, follows redirects, and treats any non-2xx
//! final status as a failure.

use crate::config::ScrapeConfig;
use std::fmt;
use std::time::Duration;

/// Error from a single GET attempt. Kept as a dedicated type so per-item
/// outcomes can be collected and reported instead of aborting the run.
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, connection, TLS, etc.).
    Curl(curl::Error),
    /// The final response had a non-2xx status.
    Http(u32),
    /// The response body was not valid UTF-8 (page fetches only).
    Encoding(std::string::FromUtf8Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Encoding(e) => write!(f, "response not UTF-8: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Encoding(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}

/// GET `url` and return the raw body bytes.
pub fn fetch_bytes(url: &str, cfg: &ScrapeConfig) -> Result<Vec<u8>, FetchError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(&cfg.user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    Ok(body)
}

/// GET `url` and return the body decoded as UTF-8 text (for HTML pages).
pub fn fetch_text(url: &str, cfg: &ScrapeConfig) -> Result<String, FetchError> {
    let body = fetch_bytes(url, cfg)?;
    String::from_utf8(body).map_err(FetchError::Encoding)
}
