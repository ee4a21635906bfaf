// src/extract/mod.rs
// =============================================================================
// This module turns a fetched page into raw link candidates.
//
// Submodules:
// - html: anchor targets and script sources from the parsed markup
// - text: path-looking substrings of the raw body
// - resolve: string-level URL resolution used by both the extractor and
//   the crawl engine
//
// The extractor is stateless. Running it twice over the same page gives the
// same candidates, so the crawl engine never needs to keep them around.
// =============================================================================

mod html;
mod resolve;
mod text;

pub use html::extract_markup_links;
pub use resolve::resolve;
pub use text::extract_text_links;

use crate::fetch::Page;

// A raw string found on a page, not yet resolved or validated
pub type CandidateLink = String;

/// Knobs for the link extractor
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Also scan the raw body text for path-looking strings
    pub scan_text: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { scan_text: true }
    }
}

// Extracts every link candidate from a fetched page
//
// Markup is parsed up front (scraper's document is not Send, so it must not
// outlive this call); the text passes stay lazy and borrow the page body.
pub fn extract_links<'a>(
    page: &'a Page,
    origin: &str,
    options: &ExtractOptions,
) -> impl Iterator<Item = CandidateLink> + 'a {
    let markup = extract_markup_links(&page.body, origin);
    let text = options
        .scan_text
        .then(|| extract_text_links(&page.body))
        .into_iter()
        .flatten();

    markup
        .into_iter()
        .chain(text)
        .filter(|candidate| !candidate.is_empty())
}
