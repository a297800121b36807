use serde::Deserialize;
use swapi_search::{Character, CharacterSource, SearchError};

/// Public catalog used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// HTTP client for the Star Wars catalog API.
///
/// Issues one request per search, never retries, and enforces no timeout
/// beyond what the transport itself applies.
pub struct SwapiClient {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl SwapiClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn base(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// Build `{base}/people/?search={query}` with the query form-encoded.
    pub fn search_url(&self, query: &str) -> Result<reqwest::Url, SearchError> {
        let mut url = reqwest::Url::parse(&format!("{}/people/", self.base()))
            .map_err(|e| SearchError::Network(format!("invalid base URL {}: {e}", self.base())))?;
        url.query_pairs_mut().append_pair("search", query);
        Ok(url)
    }

    /// Search characters by name. An empty (or whitespace-only) query
    /// returns no records without touching the network.
    pub async fn search(&self, query: &str) -> Result<Vec<Character>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.search_url(query)?;
        tracing::debug!(%url, "searching catalog");

        let response = self
            .client
            .get(url)
            .header("User-Agent", "swapi-search")
            .send()
            .await
            .map_err(|e| SearchError::Network(format!("search request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "catalog returned an error status");
            return Err(SearchError::Transport {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_owned(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Network(format!("failed to read response body: {e}")))?;

        let page: SearchPage = serde_json::from_slice(&body)
            .map_err(|e| SearchError::Decode(format!("failed to parse search JSON: {e}")))?;

        tracing::debug!(count = page.results.len(), "catalog search finished");
        Ok(page.results)
    }
}

#[async_trait::async_trait]
impl CharacterSource for SwapiClient {
    fn label(&self) -> &str {
        self.base()
    }

    async fn search(&self, query: &str) -> Result<Vec<Character>, SearchError> {
        SwapiClient::search(self, query).await
    }
}

/// One page of search results. Pagination links are ignored.
#[derive(Debug, Deserialize)]
struct SearchPage {
    results: Vec<Character>,
}
