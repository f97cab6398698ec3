//! Link discovery
//!
//! Extracts anchors whose resolved URL path matches a caller-supplied
//! pattern. The guide uses `/parcours-detours/guide-des-golfs/<region>` for
//! region pages and one more segment for course pages, so the same
//! extractor serves both levels with different patterns.

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

/// A discovered link: display text plus resolved absolute URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

/// Extracts matching links from an HTML page
///
/// * Relative hrefs are resolved against `base_url`; anchors that do not
///   resolve are skipped.
/// * An anchor qualifies when the resolved URL's path matches `pattern`.
/// * Anchors whose raw href contains any of `exclude` are dropped (used to
///   filter the login/search utility links out of course listings).
/// * Results are deduplicated by resolved URL; the first occurrence's
///   display text wins. Blank display text falls back to the last
///   non-empty path segment of the href.
///
/// Zero matching anchors is a valid outcome and yields an empty vector.
pub fn extract_links(html: &str, pattern: &Regex, base_url: &Url, exclude: &[&str]) -> Vec<Link> {
    let document = Html::parse_document(html);
    let mut links: Vec<Link> = Vec::new();

    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return links,
    };

    for element in document.select(&selector) {
        let href = match element.value().attr("href") {
            Some(h) => h.trim(),
            None => continue,
        };
        if href.is_empty() {
            continue;
        }
        if exclude.iter().any(|needle| href.contains(needle)) {
            continue;
        }

        let resolved = match base_url.join(href) {
            Ok(u) => u,
            Err(_) => continue,
        };
        if !pattern.is_match(resolved.path()) {
            continue;
        }

        let url = resolved.to_string();
        if links.iter().any(|l| l.url == url) {
            continue;
        }

        let text = element.text().collect::<String>().trim().to_string();
        let text = if text.is_empty() {
            last_path_segment(&resolved)
        } else {
            text
        };

        links.push(Link { text, url });
    }

    links
}

/// Last non-empty path segment of a URL, or empty string if there is none
fn last_path_segment(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or("")
        .to_string()
}
