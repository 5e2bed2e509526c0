//! Outlook REST API mail adapter
//!
//! Sends HTML mail (optionally with file attachments) and searches the Sent
//! Items folder through the Outlook v2.0 REST API, authenticating with a
//! bearer token.

pub mod client;
mod config;
mod credential;
pub mod error;
mod message;
pub mod transport;
pub mod types;

pub use client::OutlookClient;
pub use config::{OutlookConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use credential::Credential;
pub use error::{OutlookError, OutlookResult, TransportError, TransportResult};
pub use message::{OutgoingAttachment, OutgoingMessage};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
pub use types::*;
