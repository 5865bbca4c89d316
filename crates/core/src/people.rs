//! Per-user queue and favorites endpoints

use serde::{Deserialize, Serialize};

use crate::query;

/// Top-level field holding a user's queued projects.
pub const QUEUED_PROJECTS_FIELD: &str = "queued_projects";

/// Top-level field holding a user's favorites.
pub const FAVORITES_FIELD: &str = "favorites";

/// Options for listing a user's pattern queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueParams {
    /// Free-text filter over the queue.
    pub query: String,

    /// Page number, 1-indexed.
    pub page: u32,

    /// Number of results per page.
    pub page_size: u32,
}

impl Default for QueueParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: 100,
        }
    }
}

/// Options for listing a user's favorites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesParams {
    /// Favorite type to list (e.g. "patterns", "yarns").
    pub types: String,

    /// Free-text filter over the favorites.
    pub query: String,

    /// When set, also match against pattern notes and tags. Rendered as an
    /// empty value when unset, which the API treats as its default.
    pub deep_search: Option<bool>,

    /// Page number, 1-indexed.
    pub page: u32,

    /// Number of results per page.
    pub page_size: u32,
}

impl Default for FavoritesParams {
    fn default() -> Self {
        Self {
            types: "patterns".to_string(),
            query: String::new(),
            deep_search: None,
            page: 1,
            page_size: 100,
        }
    }
}

/// Request path for `/people/{user}/queue/list.json`.
pub fn queue_path(username: &str, params: &QueueParams) -> String {
    let pairs = [
        ("query", params.query.clone()),
        ("page", params.page.to_string()),
        ("page_size", params.page_size.to_string()),
    ];

    format!(
        "/people/{}/queue/list.json?{}",
        query::encode(username),
        query::query_string(&pairs)
    )
}

/// Request path for `/people/{user}/favorites/list.json`.
pub fn favorites_path(username: &str, params: &FavoritesParams) -> String {
    let deep_search = match params.deep_search {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    };

    let pairs = [
        ("type", params.types.clone()),
        ("query", params.query.clone()),
        ("deep_search", deep_search.to_string()),
        ("page", params.page.to_string()),
        ("page_size", params.page_size.to_string()),
    ];

    format!(
        "/people/{}/favorites/list.json?{}",
        query::encode(username),
        query::query_string(&pairs)
    )
}
