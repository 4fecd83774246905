//! URL modeling and local filename derivation.
//!
//! Derives the on-disk filename for a downloaded image from the URL path
//! basename, with a synthesized `image_<n>.jpg` fallback for URLs whose
//! path has no usable image filename.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename;

/// Extensions accepted both for derived filenames and for the report listing.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

/// True if `name` ends with an accepted image extension (case-insensitive).
pub fn has_accepted_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Derives the local filename for an image URL.
///
/// Uses the URL path's basename when it carries an accepted image extension;
/// otherwise synthesizes `image_<ordinal>.jpg` (ordinal is the 1-based
/// position in download order). Spaces and literal `%20` sequences are
/// replaced with underscores.
///
/// # Examples
///
/// - `derive_filename("https://example.com/photos/pup.jpg", 3)` → `"pup.jpg"`
/// - `derive_filename("https://example.com/", 3)` → `"image_3.jpg"`
/// - `derive_filename("https://example.com/page.html", 7)` → `"image_7.jpg"`
pub fn derive_filename(url: &str, ordinal: usize) -> String {
    let candidate = filename_from_url_path(url).filter(|name| has_accepted_extension(name));

    match candidate {
        Some(name) => sanitize_filename(&name),
        None => format!("image_{}.jpg", ordinal),
    }
}
