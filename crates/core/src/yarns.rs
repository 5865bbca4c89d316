//! Yarn search and detail endpoints

use serde::{Deserialize, Serialize};

use crate::query;

/// Top-level field holding yarn search results.
pub const YARNS_FIELD: &str = "yarns";

/// Top-level field holding a single yarn's details.
pub const YARN_FIELD: &str = "yarn";

/// Sort order for yarn search. These are the only orders the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YarnSort {
    #[default]
    Best,
    Rating,
    Projects,
}

impl YarnSort {
    /// Wire value for the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            YarnSort::Best => "best",
            YarnSort::Rating => "rating",
            YarnSort::Projects => "projects",
        }
    }
}

/// Options for searching yarns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YarnSearchParams {
    /// Free-text search query.
    pub query: String,

    /// Page number, 1-indexed.
    pub page: u32,

    /// Number of results per page.
    pub page_size: u32,

    /// Sort order.
    pub sort: YarnSort,
}

impl Default for YarnSearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: 50,
            sort: YarnSort::Best,
        }
    }
}

/// Request path for `/yarns/search.json`.
pub fn search_path(params: &YarnSearchParams) -> String {
    let pairs = [
        ("query", params.query.clone()),
        ("page", params.page.to_string()),
        ("page_size", params.page_size.to_string()),
        ("sort", params.sort.as_str().to_string()),
    ];

    format!("/yarns/search.json?{}", query::query_string(&pairs))
}

/// Request path for `/yarns/{id}.json`.
pub fn details_path(yarn_id: u64) -> String {
    format!("/yarns/{yarn_id}.json")
}
