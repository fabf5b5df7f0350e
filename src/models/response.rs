//! Response envelopes returned by the paper service.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Paper;

/// Pagination envelope for the listing endpoint.
///
/// The server guarantees `papers.len() <= limit`; `total` is the count of
/// all stored papers, independent of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PapersResponse {
    pub papers: Vec<Paper>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// Aggregate store statistics. Read-only snapshot; `categories` holds the
/// server's top categories sorted by paper count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub total_papers: usize,
    pub db_size_bytes: u64,
    pub db_size_mb: f64,
    pub categories: HashMap<String, usize>,
}

/// Envelope for search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub papers: Vec<Paper>,
}

/// Envelope for a category subscription: the papers fetched for the
/// category plus their count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub papers: Vec<Paper>,
    pub count: usize,
}

/// Acknowledgement for a batch save
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSaveResponse {
    pub message: String,
    pub count: usize,
}

/// Envelope for all stored versions of one arXiv id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionsResponse {
    pub versions: Vec<Paper>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_papers_response_deserialize() {
        let json = r#"{
            "papers": [],
            "total": 42,
            "limit": 20,
            "offset": 0
        }"#;

        let response: PapersResponse = serde_json::from_str(json).unwrap();
        assert!(response.papers.is_empty());
        assert_eq!(response.total, 42);
        assert_eq!(response.limit, 20);
    }

    #[test]
    fn test_stats_deserialize() {
        let json = r#"{
            "total_papers": 3,
            "db_size_bytes": 65536,
            "db_size_mb": 0.06,
            "categories": {"cs.LG": 2, "math.CO": 1}
        }"#;

        let stats: Stats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_papers, 3);
        assert_eq!(stats.db_size_bytes, 65536);
        assert_eq!(stats.categories.get("cs.LG"), Some(&2));
    }

    #[test]
    fn test_batch_save_response_deserialize() {
        let json = r#"{"message": "Saved 2 papers", "count": 2}"#;
        let response: BatchSaveResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "Saved 2 papers");
        assert_eq!(response.count, 2);
    }
}
