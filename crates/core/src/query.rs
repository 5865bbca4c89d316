//! Percent-encoded query-string construction

/// Percent-encode a single query value or path segment.
///
/// Spaces become `%20`, never `+`, matching what the Ravelry API expects in
/// search queries.
pub fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Join name/value pairs into a query string.
///
/// Every pair is emitted, including empty values, so the generated URL for a
/// given set of parameters is always the same shape (`query=&page=1&...`).
/// Names are taken as-is; values are percent-encoded.
pub fn query_string(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={}", encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
