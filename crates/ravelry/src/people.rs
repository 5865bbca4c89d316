//! Per-user queue and favorites calls

use ravelry_core::{people, response, Error, FavoritesParams, QueueParams, Table};

use crate::http::{get, Credentials};

/// List the patterns in `username`'s queue.
pub fn list_queue(
    creds: &Credentials,
    username: &str,
    params: &QueueParams,
) -> Result<Table, Error> {
    let (status, body) = get(creds, &people::queue_path(username, params))?;
    response::decode_records(status, &body, people::QUEUED_PROJECTS_FIELD)
}

/// List `username`'s favorites of the type selected in `params`.
pub fn list_favorites(
    creds: &Credentials,
    username: &str,
    params: &FavoritesParams,
) -> Result<Table, Error> {
    let (status, body) = get(creds, &people::favorites_path(username, params))?;
    response::decode_records(status, &body, people::FAVORITES_FIELD)
}
