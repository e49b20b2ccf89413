//! Error types for chat backends.

use thiserror::Error;

/// Errors that can occur when talking to a chat-completion endpoint.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Backend is misconfigured (missing key, bad URL, etc.)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Endpoint answered successfully but the reply carries no content.
    #[error("empty reply from model")]
    EmptyReply,
}
