/// Error returned by every fallible operation in the client.
///
/// Each variant names the stage that failed so callers can tell a network
/// problem from a rejected credential or an upstream schema change. No
/// failure is retried or recovered locally.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The network call could not complete (DNS, connection, read failure).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered 401 Unauthorized.
    #[error("Authentication failed: the server rejected the supplied credentials")]
    Authentication,

    /// The body was not valid JSON, or lacked the expected top-level field.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Any other non-2xx status. Carries the status code and raw body for
    /// caller diagnosis.
    #[error("Request failed with status {status}: {body}")]
    Request { status: u16, body: String },
}
