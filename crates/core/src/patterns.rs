//! Pattern search and detail endpoints

use serde::{Deserialize, Serialize};

use crate::query;

/// Top-level field holding pattern search results.
pub const PATTERNS_FIELD: &str = "patterns";

/// Top-level field holding a single pattern's details.
pub const PATTERN_FIELD: &str = "pattern";

/// Options for searching patterns.
///
/// The API exposes no other search filters than these, unlike the web
/// browser search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSearchParams {
    /// Free-text search query (e.g. "hats").
    pub query: String,

    /// Page number, 1-indexed.
    pub page: u32,

    /// Number of results per page.
    pub page_size: u32,
}

impl Default for PatternSearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: 100,
        }
    }
}

/// Request path for `/patterns/search.json`.
pub fn search_path(params: &PatternSearchParams) -> String {
    let pairs = [
        ("query", params.query.clone()),
        ("page", params.page.to_string()),
        ("page_size", params.page_size.to_string()),
    ];

    format!("/patterns/search.json?{}", query::query_string(&pairs))
}

/// Request path for `/patterns/{id}.json`.
pub fn details_path(pattern_id: u64) -> String {
    format!("/patterns/{pattern_id}.json")
}
