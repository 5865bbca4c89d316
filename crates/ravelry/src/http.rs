//! Authenticated HTTP plumbing
//!
//! One client per call: credentials are accepted at the call boundary and
//! dropped with the client when the request completes. Nothing is retained
//! between calls and no timeout is set; callers wanting one should wrap the
//! call at the transport level.

use ravelry_core::Error;

/// Fixed base host for every endpoint.
pub const API_BASE: &str = "https://api.ravelry.com";

/// Caller-supplied Basic auth credentials, borrowed for a single call.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self { username, password }
    }
}

/// Create an HTTP client with Basic Auth headers
fn authenticated_client(creds: &Credentials) -> Result<reqwest::blocking::Client, Error> {
    use base64::Engine;
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

    let auth_string = format!("{}:{}", creds.username, creds.password);
    let auth_encoded = base64::engine::general_purpose::STANDARD.encode(&auth_string);

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Basic {auth_encoded}"))
            .map_err(|e| Error::Transport(format!("invalid header value: {e}")))?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::blocking::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| Error::Transport(format!("failed to build HTTP client: {e}")))
}

/// Perform exactly one blocking GET and hand back the status and raw body.
///
/// Status interpretation happens in `ravelry_core::response`, so this is the
/// only function in the crate that touches the network.
pub(crate) fn get(creds: &Credentials, path: &str) -> Result<(u16, String), Error> {
    let url = format!("{API_BASE}{path}");
    log::debug!("GET {url}");

    let client = authenticated_client(creds)?;
    let response = client
        .get(&url)
        .send()
        .map_err(|e| Error::Transport(format!("request to {url} failed: {e}")))?;

    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|e| Error::Transport(format!("failed to read response body: {e}")))?;
    log::debug!("{status} from {url} ({} bytes)", body.len());

    Ok((status, body))
}
