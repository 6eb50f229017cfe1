//! Per-URL fetch failure.

use thiserror::Error;

/// Why a single document was not saved. Never aborts the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, timeout, TLS, bad URL...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// Final response status was outside 2xx/3xx.
    #[error("HTTP {0}")]
    Status(u32),
    /// Request succeeded but returned no content.
    #[error("empty response body")]
    EmptyBody,
}
