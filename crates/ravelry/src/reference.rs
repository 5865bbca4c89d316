//! Reference-data calls

use ravelry_core::{reference, response, Error, Table};

use crate::http::{get, Credentials};

/// List every valid color family.
pub fn get_color_families(creds: &Credentials) -> Result<Table, Error> {
    let (status, body) = get(creds, &reference::color_families_path())?;
    response::decode_records(status, &body, reference::COLOR_FAMILIES_FIELD)
}

/// List every valid yarn weight.
pub fn get_yarn_weights(creds: &Credentials) -> Result<Table, Error> {
    let (status, body) = get(creds, &reference::yarn_weights_path())?;
    response::decode_records(status, &body, reference::YARN_WEIGHTS_FIELD)
}
