//! Typed HTTP client for the paper service.
//!
//! [`PaperApi`] wraps one endpoint per server operation, all relative to a
//! fixed base URL. It is a pass-through wrapper: no retries, no caching,
//! no client-side validation and no response transformation. A failed
//! call surfaces as an [`ApiError`] and nothing else happens.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::models::{
    BatchSaveResponse, ListQuery, Paper, PapersResponse, SearchResponse, Stats, SubscribeResponse,
    VersionsResponse,
};

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors surfaced by [`PaperApi`] calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network or transport error (connect failure, timeout, broken body)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The requested paper does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Typed client for the paper service's `/api` surface.
///
/// Cloning is cheap; the underlying `reqwest::Client` is shared and holds
/// no state beyond the base URL and timeouts it was built with.
#[derive(Debug, Clone)]
pub struct PaperApi {
    client: Client,
    base_url: String,
}

impl PaperApi {
    /// Create a client for the given base URL (e.g. `http://127.0.0.1:8000/api`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List stored papers. GET `/papers` with the query's limit, offset,
    /// sort_by and order.
    pub async fn list(&self, query: &ListQuery) -> Result<PapersResponse, ApiError> {
        let url = format!(
            "{}/papers?limit={}&offset={}&sort_by={}&order={}",
            self.base_url,
            query.limit,
            query.offset,
            urlencoding::encode(&query.sort_by),
            urlencoding::encode(&query.order)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to list papers: {}", e)))?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse paper list: {}", e)))
    }

    /// Fetch one paper version by its unique key. GET `/papers/{unique_key}`;
    /// a missing key surfaces as [`ApiError::NotFound`].
    pub async fn get(&self, unique_key: &str) -> Result<Paper, ApiError> {
        let url = format!(
            "{}/papers/{}",
            self.base_url,
            urlencoding::encode(unique_key)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to fetch paper: {}", e)))?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse paper: {}", e)))
    }

    /// Delete one paper version by its unique key. DELETE
    /// `/papers/{unique_key}`; the acknowledgement body is dropped unread.
    pub async fn delete(&self, unique_key: &str) -> Result<(), ApiError> {
        let url = format!(
            "{}/papers/{}",
            self.base_url,
            urlencoding::encode(unique_key)
        );

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to delete paper: {}", e)))?;
        check_status(response).await?;

        Ok(())
    }

    /// Fetch every stored version of an arXiv id. GET
    /// `/papers/{arxiv_id}/versions`.
    pub async fn versions(&self, arxiv_id: &str) -> Result<VersionsResponse, ApiError> {
        let url = format!(
            "{}/papers/{}/versions",
            self.base_url,
            urlencoding::encode(arxiv_id)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to fetch versions: {}", e)))?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse versions: {}", e)))
    }

    /// Save a batch of papers. POST `/papers/batch-save` with the JSON
    /// array as the request body; the server's acknowledgement comes back
    /// unmodified.
    pub async fn batch_save(&self, papers: &[Paper]) -> Result<BatchSaveResponse, ApiError> {
        let url = format!("{}/papers/batch-save", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&papers)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to save papers: {}", e)))?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse batch-save response: {}", e)))
    }

    /// Run a harvest query against the upstream index. POST `/search` with
    /// `query` and `max_results` as query parameters and an empty body.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<SearchResponse, ApiError> {
        let url = format!(
            "{}/search?query={}&max_results={}",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to search: {}", e)))?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse search response: {}", e)))
    }

    /// Subscribe to a category and fetch its current papers. POST
    /// `/subscribe` with `category` as a query parameter and an empty body.
    pub async fn subscribe(&self, category: &str) -> Result<SubscribeResponse, ApiError> {
        let url = format!(
            "{}/subscribe?category={}",
            self.base_url,
            urlencoding::encode(category)
        );

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to subscribe: {}", e)))?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse subscribe response: {}", e)))
    }

    /// Fetch aggregate store statistics. GET `/stats`.
    pub async fn stats(&self) -> Result<Stats, ApiError> {
        let url = format!("{}/stats", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to fetch stats: {}", e)))?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Failed to parse stats: {}", e)))
    }
}

/// Map a non-2xx response to an error, reading the body as the message.
/// 404 gets its own variant so callers can tell a missing key apart from
/// a failing server.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    if status == StatusCode::NOT_FOUND {
        Err(ApiError::NotFound(message))
    } else {
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = PaperApi::new("http://localhost:8000/api/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 500): boom");

        let err = ApiError::NotFound("Paper not found".to_string());
        assert_eq!(err.to_string(), "Not found: Paper not found");
    }
}
