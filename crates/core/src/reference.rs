//! Reference-data endpoints (color families, yarn weights)
//!
//! Both take no parameters and return the full list in one response.

/// Top-level field holding the color family list.
pub const COLOR_FAMILIES_FIELD: &str = "color_families";

/// Top-level field holding the yarn weight list.
pub const YARN_WEIGHTS_FIELD: &str = "yarn_weights";

/// Request path for `/color_families.json`.
pub fn color_families_path() -> String {
    "/color_families.json".to_string()
}

/// Request path for `/yarn_weights.json`.
pub fn yarn_weights_path() -> String {
    "/yarn_weights.json".to_string()
}
