//! Client error types

/// Failure talking to the books API
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection, protocol or body decoding failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a status the caller does not handle
    #[error("unexpected status {status}")]
    UnexpectedStatus { status: u16 },
}
