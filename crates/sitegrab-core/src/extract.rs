//! Image URL extraction from fetched HTML.
//!
//! Selects every `<img>` element, reads `src` (falling back to the
//! lazy-load `data-src`), normalizes the value to an absolute URL, and
//! drops icon/logo/favicon-like entries.

use scraper::{Html, Selector};

/// URL substrings that mark small decorative images we never want.
const SKIP_MARKERS: &[&str] = &["icon", "logo", "favicon"];

/// Extracts absolute image URLs from `html` in document order.
///
/// Normalization, applied in order:
/// - scheme-relative (`//...`) gets an `https:` prefix
/// - root-relative (`/...`) gets the base URL prefix
/// - anything else not already absolute is resolved against `page_url`
///
/// URLs containing `icon`, `logo`, or `favicon` (case-insensitive) are
/// discarded. Duplicates within one page are kept; cross-page dedup is the
/// caller's job.
pub fn extract_image_urls(html: &str, page_url: &str, base_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    // "img" is a valid selector, so parse cannot fail here.
    let selector = Selector::parse("img").unwrap();

    let mut urls = Vec::new();
    for element in document.select(&selector) {
        let src = match element
            .value()
            .attr("src")
            .or_else(|| element.value().attr("data-src"))
        {
            Some(s) if !s.is_empty() => s,
            _ => continue,
        };

        let absolute = match normalize(src, page_url, base_url) {
            Some(u) => u,
            None => {
                tracing::debug!(src, page_url, "skipping unresolvable image src");
                continue;
            }
        };

        let lower = absolute.to_lowercase();
        if SKIP_MARKERS.iter().any(|m| lower.contains(m)) {
            continue;
        }

        urls.push(absolute);
    }
    urls
}

fn normalize(src: &str, page_url: &str, base_url: &str) -> Option<String> {
    if src.starts_with("//") {
        Some(format!("https:{}", src))
    } else if src.starts_with('/') {
        Some(format!("{}{}", base_url, src))
    } else if src.starts_with("http") {
        Some(src.to_string())
    } else {
        let page = url::Url::parse(page_url).ok()?;
        page.join(src).ok().map(|u| u.to_string())
    }
}

/// Number of `<img>` elements in `html`, reported before extraction filters.
pub fn count_img_tags(html: &str) -> usize {
    let document = Html::parse_document(html);
    let selector = Selector::parse("img").unwrap();
    document.select(&selector).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://partipoodlesaustralia.com/gallery";
    const BASE: &str = "https://partipoodlesaustralia.com";

    #[test]
    fn scheme_relative_gets_https() {
        let html = r#"<img src="//cdn.example.com/a.JPG">"#;
        let urls = extract_image_urls(html, PAGE, BASE);
        assert_eq!(urls, vec!["https://cdn.example.com/a.JPG"]);
    }

    #[test]
    fn root_relative_gets_base_url() {
        let html = r#"<img src="/b.png">"#;
        let urls = extract_image_urls(html, PAGE, BASE);
        assert_eq!(urls, vec!["https://partipoodlesaustralia.com/b.png"]);
    }

    #[test]
    fn relative_resolves_against_page() {
        let html = r#"<img src="pics/c.webp">"#;
        let urls = extract_image_urls(html, PAGE, BASE);
        assert_eq!(urls, vec!["https://partipoodlesaustralia.com/pics/c.webp"]);
    }

    #[test]
    fn absolute_passes_through() {
        let html = r#"<img src="http://other.example.org/d.jpeg">"#;
        let urls = extract_image_urls(html, PAGE, BASE);
        assert_eq!(urls, vec!["http://other.example.org/d.jpeg"]);
    }

    #[test]
    fn data_src_fallback() {
        let html = r#"<img data-src="/lazy.png">"#;
        let urls = extract_image_urls(html, PAGE, BASE);
        assert_eq!(urls, vec!["https://partipoodlesaustralia.com/lazy.png"]);
    }

    #[test]
    fn src_wins_over_data_src() {
        let html = r#"<img src="/eager.png" data-src="/lazy.png">"#;
        let urls = extract_image_urls(html, PAGE, BASE);
        assert_eq!(urls, vec!["https://partipoodlesaustralia.com/eager.png"]);
    }

    #[test]
    fn icon_logo_favicon_filtered() {
        let html = r#"
            <img data-src="logo-small.png">
            <img src="/assets/FavIcon.ico">
            <img src="/sprites/Icon-32.png">
            <img src="/photos/real.jpg">
        "#;
        let urls = extract_image_urls(html, PAGE, BASE);
        assert_eq!(urls, vec!["https://partipoodlesaustralia.com/photos/real.jpg"]);
    }

    #[test]
    fn every_url_is_absolute() {
        let html = r#"
            <img src="//cdn.example.com/a.jpg">
            <img src="/b.png">
            <img src="rel/c.webp">
            <img src="https://x.example.com/d.jpg">
        "#;
        for url in extract_image_urls(html, PAGE, BASE) {
            assert!(url.starts_with("http"), "not absolute: {url}");
        }
    }

    #[test]
    fn spec_gallery_scenario() {
        let html = r#"
            <img src="//cdn.example.com/a.JPG">
            <img src="/b.png">
            <img data-src="logo-small.png">
        "#;
        let urls = extract_image_urls(html, PAGE, BASE);
        assert_eq!(
            urls,
            vec![
                "https://cdn.example.com/a.JPG",
                "https://partipoodlesaustralia.com/b.png",
            ]
        );
    }

    #[test]
    fn missing_and_empty_src_skipped() {
        let html = r#"<img><img src=""><img src="/ok.jpg">"#;
        let urls = extract_image_urls(html, PAGE, BASE);
        assert_eq!(urls, vec!["https://partipoodlesaustralia.com/ok.jpg"]);
    }

    #[test]
    fn counts_all_img_tags_before_filtering() {
        let html = r#"<img src="/a.jpg"><img src="/logo.png"><img>"#;
        assert_eq!(count_img_tags(html), 3);
    }
}
