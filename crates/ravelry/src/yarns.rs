//! Yarn search and detail calls

use ravelry_core::{response, yarns, Error, Table, YarnSearchParams};

use crate::http::{get, Credentials};

/// Search yarns by free-text query and sort order.
///
/// One page per call; callers wanting more results loop over `params.page`
/// themselves.
pub fn search_yarns(creds: &Credentials, params: &YarnSearchParams) -> Result<Table, Error> {
    let (status, body) = get(creds, &yarns::search_path(params))?;
    response::decode_records(status, &body, yarns::YARNS_FIELD)
}

/// Fetch the full details of one yarn as a one-row table.
pub fn get_yarn(creds: &Credentials, yarn_id: u64) -> Result<Table, Error> {
    let (status, body) = get(creds, &yarns::details_path(yarn_id))?;
    response::decode_record(status, &body, yarns::YARN_FIELD)
}
