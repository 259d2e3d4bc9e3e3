//! Fetches raw page HTML for extraction.

use std::time::Duration;

use lede_core::error::{LedeError, Result};
use reqwest::redirect::Policy;
use reqwest::Client;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_REDIRECTS: usize = 10;

/// Downloads article pages over HTTP.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|err| LedeError::page(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { client })
    }

    /// Fetches the page at `url` and returns its body as text.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| LedeError::page(format!("Failed to fetch {url}: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LedeError::page(format!(
                "Fetching {url} returned HTTP {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|err| LedeError::page(format!("Failed to read body of {url}: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_returns_body_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/article"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>hi</body></html>"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new().unwrap();
        let body = fetcher.fetch(&format!("{}/article", server.uri())).await.unwrap();

        assert!(body.contains("hi"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_page_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new().unwrap();
        let err = fetcher.fetch(&format!("{}/gone", server.uri())).await.unwrap_err();

        assert!(matches!(err, LedeError::Page(_)));
        assert!(err.to_string().contains("404"));
    }
}
