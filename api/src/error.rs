//! Errors produced while talking to the token-pairs GraphQL server.

use thiserror::Error;

/// Every failure a read or write request can end in.
///
/// The `Display` text is what the dashboard shows when a read fails, so the
/// messages are kept short and user-facing.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("{0}")]
    GraphQl(String),

    #[error("response contained no data")]
    MissingData,

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
