//! Error types for Outlook operations

use thiserror::Error;

/// Result type for Outlook operations
pub type OutlookResult<T> = Result<T, OutlookError>;

/// Errors surfaced to callers.
///
/// Provider diagnostics (status codes, error envelopes, transport failures)
/// are logged where they happen and never carried in these variants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutlookError {
    /// The credential has no access token; nothing was sent
    #[error("No access token supplied")]
    NoAccessToken,

    /// The send request failed for any reason
    #[error("Email could not be sent")]
    SendFailed,

    /// The sent-items request failed for any reason
    #[error("Sent items could not be fetched")]
    FetchFailed,

    /// The HTTP client could not be built from the configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors raised below the client, before any status interpretation
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Failed to build request: {0}")]
    InvalidRequest(String),
}
