use crate::book::{Book, RawBook};
use crate::error::{BookhoundError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const CATALOG_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";
const CATALOG_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(rename = "volumeInfo")]
    volume_info: RawBook,
}

/// Search the catalog. `query` is the raw search expression (e.g.
/// `intitle:dune`); the client percent-encodes it as a query parameter.
/// Transport failures and non-2xx responses are returned as errors and are
/// not recovered here.
pub async fn search(query: &str) -> Result<Vec<Book>> {
    tracing::debug!(query, "searching catalog");

    let client = Client::builder()
        .timeout(Duration::from_secs(CATALOG_TIMEOUT_SECS))
        .build()
        .map_err(|e| BookhoundError::Catalog(format!("Failed to create HTTP client: {}", e)))?;

    let response = client
        .get(CATALOG_API_URL)
        .query(&[("q", query)])
        .send()
        .await
        .map_err(|e| BookhoundError::Catalog(format!("Request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(BookhoundError::Catalog(format!(
            "API returned status {}: {}",
            status, body
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| BookhoundError::Catalog(format!("Failed to read response: {}", e)))?;

    parse_search_response(&body)
}

/// Map a search response body to books. A response without an `items` key
/// yields an empty list; each item's `volumeInfo` goes through the validating
/// Book constructor.
fn parse_search_response(body: &str) -> Result<Vec<Book>> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| BookhoundError::Catalog(format!("Failed to parse response: {}", e)))?;

    response
        .items
        .into_iter()
        .map(|item| Book::try_from(item.volume_info))
        .collect()
}
