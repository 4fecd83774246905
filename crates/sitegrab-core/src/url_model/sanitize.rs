//! Filename cleanup for downloaded images.

/// Replaces literal spaces and `%20` sequences in `name` with underscores.
///
/// Idempotent: applying it twice yields the same result as applying it once.
pub fn sanitize_filename(name: &str) -> String {
    name.replace(' ', "_").replace("%20", "_")
}
