// src/crawl/context.rs
// =============================================================================
// Everything one crawl run shares between its tasks.
//
// A run owns exactly one `CrawlContext`, wrapped in an Arc and handed to
// every task. There are no globals, so two crawls in the same process never
// see each other's URLs or counters.
// =============================================================================

use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use url::Url;

use super::registry::DedupRegistry;
use super::stream::ResultSink;
use super::tracker::WorkTracker;
use crate::extract::ExtractOptions;
use crate::fetch::Fetcher;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid seed URL '{0}': expected http(s)://<target>")]
    InvalidSeed(String),
}

// Parses `target` as an absolute http(s) URL with a host
//
// Anything else (relative paths, mailto:, garbage from the text scanner)
// is not something we can fetch.
pub fn parse_target(target: &str) -> Option<Url> {
    Url::parse(target)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// Scheme and host (plus explicit port) of the seed URL, e.g. `https://example.com`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

impl Origin {
    pub fn parse(seed: &str) -> Result<Self, CrawlError> {
        let url = parse_target(seed).ok_or_else(|| CrawlError::InvalidSeed(seed.to_string()))?;
        let host = url
            .host_str()
            .ok_or_else(|| CrawlError::InvalidSeed(seed.to_string()))?;

        let origin = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };

        Ok(Self(origin))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Scope membership is a plain substring test, same as the output filter
    pub fn contains(&self, url: &str) -> bool {
        url.contains(&self.0)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tunables of a single crawl run
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Pages found at this depth are reported but never fetched
    pub max_depth: usize,
    /// Report (and follow) URLs outside the seed origin too
    pub log_out_of_scope: bool,
    /// Upper bound on simultaneous fetches; `None` means unbounded
    pub concurrency: Option<usize>,
    pub extract: ExtractOptions,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_depth: 1,
            log_out_of_scope: false,
            concurrency: None,
            extract: ExtractOptions::default(),
        }
    }
}

pub struct CrawlContext {
    pub origin: Origin,
    pub options: CrawlOptions,
    pub registry: DedupRegistry,
    pub tracker: WorkTracker,
    pub fetcher: Arc<dyn Fetcher>,
    pub limiter: Option<Semaphore>,
    pub sink: ResultSink,
}

impl CrawlContext {
    pub fn new(
        origin: Origin,
        options: CrawlOptions,
        fetcher: Arc<dyn Fetcher>,
        sink: ResultSink,
    ) -> Self {
        // A ceiling of 0 would deadlock the crawl, treat it as 1
        let limiter = options
            .concurrency
            .map(|limit| Semaphore::new(limit.max(1)));

        Self {
            origin,
            options,
            registry: DedupRegistry::new(),
            tracker: WorkTracker::new(),
            fetcher,
            limiter,
            sink,
        }
    }

    pub fn in_scope(&self, url: &str) -> bool {
        self.options.log_out_of_scope || self.origin.contains(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_drops_path_and_query() {
        let origin = Origin::parse("https://example.com/blog/post?id=3").unwrap();
        assert_eq!(origin.as_str(), "https://example.com");
    }

    #[test]
    fn test_origin_keeps_explicit_port() {
        let origin = Origin::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(origin.as_str(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_origin_rejects_non_http() {
        assert!(Origin::parse("example.com").is_err());
        assert!(Origin::parse("ftp://example.com").is_err());
        assert!(Origin::parse("mailto:me@example.com").is_err());
    }

    #[test]
    fn test_origin_contains() {
        let origin = Origin::parse("http://example.test/").unwrap();
        assert!(origin.contains("http://example.test/a"));
        assert!(!origin.contains("http://other.test/b"));
        assert!(!origin.contains("https://example.test/a"));
    }

    #[test]
    fn test_parse_target() {
        assert!(parse_target("http://example.test//a").is_some());
        assert!(parse_target("/relative").is_none());
        assert!(parse_target("./x").is_none());
    }
}
