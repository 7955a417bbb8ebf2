//! Failure modes of a relation-tuple query
//!
//! These never leave the client: every variant is absorbed into the
//! fail-closed value of the operation that produced it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KetoError {
    /// Connection refused, DNS failure, reset mid-body
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The per-request timeout elapsed
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The store answered with something other than 200
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not the expected JSON document
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for KetoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            KetoError::Timeout(err)
        } else {
            KetoError::Transport(err)
        }
    }
}
