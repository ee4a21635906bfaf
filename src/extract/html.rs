// src/extract/html.rs
// =============================================================================
// This module pulls link candidates out of an HTML document.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Never fails: broken markup is repaired the way a browser would
//
// Two kinds of elements are interesting:
// - <a href="...">     every anchor target except in-page/mail/chat/script links
// - <script src="..."> every external script
// =============================================================================

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::resolve::resolve_against_origin;

// The selectors are constants, so parsing them can only fail on a typo here.
static ANCHORS: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));
static SCRIPTS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script[src]").expect("valid selector"));

// Anchor targets starting with any of these never point at another page
const SKIPPED_PREFIXES: [&str; 4] = ["#", "mailto:", "xmpp:", "javascript"];

// Extracts anchor and script links from HTML content
//
// Parameters:
//   html: the raw page body
//   origin: scheme + host of the seed, used for root-relative attributes
//
// Returns: the candidates in document order, anchors first
//
// Example:
//   html = "<a href='/docs'>Docs</a><script src='app.js'></script>"
//   origin = "https://example.com"
//   result = ["https://example.com/docs", "https://example.com/app.js"]
pub fn extract_markup_links(html: &str, origin: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for element in document.select(&ANCHORS) {
        if let Some(href) = element.value().attr("href") {
            if is_followable(href) {
                links.push(resolve_against_origin(href, origin));
            }
        }
    }

    for element in document.select(&SCRIPTS) {
        if let Some(src) = element.value().attr("src") {
            links.push(resolve_against_origin(src, origin));
        }
    }

    links
}

fn is_followable(href: &str) -> bool {
    !SKIPPED_PREFIXES
        .iter()
        .any(|prefix| href.starts_with(prefix))
}
