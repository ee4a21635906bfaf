// src/extract/text.rs
// =============================================================================
// This module finds path-looking strings in the raw page text.
//
// Links do not only live in href attributes: inline scripts, JSON blobs and
// plain text mention paths too. Two regex passes run over the whole body:
//
// 1. LOOSE:  "/" followed by anything up to the end of the line
// 2. STRICT: one or more "/segment" groups, optionally prefixed with
//            "http:/" or "https:/" and optionally ending with "/"
//
// Both are intentionally over-inclusive. Duplicates are expected, the dedup
// registry filters them later. Any markup tags inside a match are stripped.
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;

static LOOSE_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\S.*").expect("valid regex"));
static STRICT_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:https?:/)?(?:/[^\s"'<>]+)+/?"#).expect("valid regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

// Lazily yields every path-looking substring of `body`, tags stripped
//
// The iterator borrows the body, so nothing is copied until a match is found.
pub fn extract_text_links(body: &str) -> impl Iterator<Item = String> + '_ {
    LOOSE_PATH
        .find_iter(body)
        .chain(STRICT_PATH.find_iter(body))
        .map(|found| strip_tags(found.as_str()))
        .filter(|candidate| !candidate.is_empty())
}

// Removes anything that looks like an HTML tag: "<p>/a</p>" -> "/a"
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}
