//! Client for the web search API used to run boolean sourcing queries.
//!
//! Pagination is caller-driven: the caller tracks the page number and
//! re-issues the query with a new start offset.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Results per page requested from the search API.
pub const PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
    start: u32,
    num: u32,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<OrganicItem>,
}

#[derive(Debug, Deserialize)]
struct OrganicItem {
    title: String,
    link: String,
    #[serde(default)]
    snippet: String,
}

#[derive(Clone)]
pub struct WebSearchClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl WebSearchClient {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            endpoint,
        }
    }

    /// Fetches one page of results for a boolean query, starting at the
    /// given result offset.
    pub async fn search(&self, query: &str, start: u32) -> Result<Vec<SearchResult>, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&SearchRequest {
                q: query,
                start,
                num: PAGE_SIZE,
            })
            .send()
            .await
            .map_err(|e| AppError::Search(format!("search request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Search(format!(
                "search API returned {status}: {body}"
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("search response parse failed: {e}")))?;

        Ok(parsed
            .organic
            .into_iter()
            .map(|item| SearchResult {
                title: item.title,
                link: item.link,
                snippet: item.snippet,
            })
            .collect())
    }
}
