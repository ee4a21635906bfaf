// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's only door to the network.
//
// The crawl engine talks to a `Fetcher` trait rather than to reqwest
// directly. That keeps the engine testable (tests plug in an in-memory
// fetcher) and lets every task share one configured HTTP client.
//
// Submodules:
// - http: the reqwest-backed implementation used by the CLI
// =============================================================================

mod http;

pub use http::{FetchSettings, ReqwestFetcher};

use async_trait::async_trait;
use thiserror::Error;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct Page {
    /// The URL that was requested
    pub url: String,
    /// HTTP status code of the final response
    pub status: u16,
    /// Decoded response body
    pub body: String,
}

/// Everything that can go wrong while fetching a single page
#[derive(Debug, Error)]
pub enum FetchError {
    /// The shared HTTP client could not be built
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Network, TLS or timeout failure
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    /// The server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),
    /// The body could not be read or decoded
    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl FetchError {
    /// Short label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Client(_) => "client",
            FetchError::Request(e) if e.is_timeout() => "timeout",
            FetchError::Request(e) if e.is_connect() => "connect",
            FetchError::Request(_) => "request",
            FetchError::Status(_) => "status",
            FetchError::Body(_) => "body",
        }
    }
}

// Fetches pages for the crawl engine
//
// Implementations must be shareable across tasks (Send + Sync), because one
// fetcher instance serves every concurrently running crawl task.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_kind_and_message() {
        let err = FetchError::Status(404);
        assert_eq!(err.kind(), "status");
        assert_eq!(err.to_string(), "HTTP 404");
    }
}
