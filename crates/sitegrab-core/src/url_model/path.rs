//! Filename extraction from URL path.

/// Extracts the basename of a URL's path (the segment after the last `/`),
/// excluding query and fragment.
///
/// Returns `None` if the URL cannot be parsed or the path ends in `/`
/// (no basename); the caller falls back to a synthesized name.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let path = parsed.path();
    let basename = path.rsplit('/').next().unwrap_or("");
    if basename.is_empty() {
        return None;
    }
    Some(basename.to_string())
}
