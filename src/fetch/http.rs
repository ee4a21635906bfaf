// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP with reqwest.
//
// One client is built per crawl and shared by every task:
// - fixed per-request timeout (30 seconds unless configured otherwise)
// - certificate validation switched off, so self-signed hosts still crawl
// - a cookie jar pre-seeded from a literal "A=1;B=2" string for the seed origin
// - a fixed User-Agent header
//
// Non-2xx responses count as failures. The crawl engine logs them and
// simply doesn't expand that page.
// =============================================================================

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use super::{FetchError, Fetcher, Page};

/// Configuration of the shared HTTP client
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Per-request timeout
    pub timeout: Duration,
    /// Value of the User-Agent header
    pub user_agent: String,
    /// Skip TLS certificate validation
    pub accept_invalid_certs: bool,
    /// Literal cookie string such as "ID=1ymu32x7;SESSION=29"
    pub cookie: String,
    /// URL the cookies are registered for (the seed origin)
    pub cookie_url: Option<Url>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "link-extract".to_string(),
            accept_invalid_certs: true,
            cookie: String::new(),
            cookie_url: None,
        }
    }
}

/// Fetcher backed by a single pooled reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .cookie_provider(cookie_jar(&settings.cookie, settings.cookie_url.as_ref()))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::Body)?;

        Ok(Page {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

// Builds a cookie jar holding every "name=value" pair of `cookie`
//
// The pairs are registered for `url` only, so they are never leaked to
// out-of-scope hosts the crawler happens to visit.
fn cookie_jar(cookie: &str, url: Option<&Url>) -> Arc<Jar> {
    let jar = Jar::default();

    if let Some(url) = url {
        cookie
            .split(';')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .for_each(|pair| jar.add_cookie_str(pair, url));
    }

    Arc::new(jar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body_and_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", "link-extract"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<a href=\"/x\">x</a>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = ReqwestFetcher::new(&FetchSettings::default()).unwrap();
        let url = format!("{}/page", server.uri());
        let page = fetcher.fetch(&url).await.unwrap();

        assert_eq!(page.url, url);
        assert_eq!(page.status, 200);
        assert_eq!(page.body, "<a href=\"/x\">x</a>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = ReqwestFetcher::new(&FetchSettings::default()).unwrap();
        let err = fetcher
            .fetch(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status(404)), "{err:?}");
    }

    #[tokio::test]
    async fn test_cookie_sent_to_seed_origin() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/private"))
            .and(header("cookie", "SESSION=29"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let settings = FetchSettings {
            cookie: "SESSION=29".to_string(),
            cookie_url: Some(Url::parse(&server.uri()).unwrap()),
            ..FetchSettings::default()
        };
        let fetcher = ReqwestFetcher::new(&settings).unwrap();
        let page = fetcher
            .fetch(&format!("{}/private", server.uri()))
            .await
            .unwrap();

        assert_eq!(page.body, "ok");
    }

    #[test]
    fn test_cookie_jar_splits_pairs() {
        use reqwest::cookie::CookieStore;

        let url = Url::parse("http://example.test").unwrap();
        let jar = cookie_jar("ID=1ymu32x7; SESSION=29;", Some(&url));
        let header = jar.cookies(&url).unwrap();
        let header = header.to_str().unwrap();

        assert!(header.contains("ID=1ymu32x7"), "{header}");
        assert!(header.contains("SESSION=29"), "{header}");
    }

    #[test]
    fn test_empty_cookie_string_leaves_jar_empty() {
        use reqwest::cookie::CookieStore;

        let url = Url::parse("http://example.test").unwrap();
        let jar = cookie_jar("", Some(&url));
        assert!(jar.cookies(&url).is_none());
    }
}
