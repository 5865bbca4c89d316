//! Pattern search and detail calls

use ravelry_core::{patterns, response, Error, PatternSearchParams, Table};

use crate::http::{get, Credentials};

/// Search patterns by free-text query.
///
/// One page per call; callers wanting more results loop over `params.page`
/// themselves.
pub fn search_patterns(creds: &Credentials, params: &PatternSearchParams) -> Result<Table, Error> {
    let (status, body) = get(creds, &patterns::search_path(params))?;
    response::decode_records(status, &body, patterns::PATTERNS_FIELD)
}

/// Fetch the full details of one pattern as a one-row table.
pub fn get_pattern(creds: &Credentials, pattern_id: u64) -> Result<Table, Error> {
    let (status, body) = get(creds, &patterns::details_path(pattern_id))?;
    response::decode_record(status, &body, patterns::PATTERN_FIELD)
}
