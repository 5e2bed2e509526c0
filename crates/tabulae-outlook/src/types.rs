//! Wire types for the Outlook REST API (v2.0)
//!
//! Field names follow the service's PascalCase schema.

use serde::{Deserialize, Serialize};

/// Discriminator the service expects on every file attachment
pub const FILE_ATTACHMENT_TYPE: &str = "#Microsoft.OutlookServices.FileAttachment";

/// Body content type for every outgoing message
pub const HTML_CONTENT_TYPE: &str = "HTML";

/// Request body for POST /me/sendmail
#[derive(Debug, Serialize)]
pub struct SendMailRequest {
    #[serde(rename = "Message")]
    pub message: OutlookMessage,
}

#[derive(Debug, Serialize)]
pub struct OutlookMessage {
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Body")]
    pub body: OutlookBody,
    #[serde(rename = "ToRecipients")]
    pub to_recipients: Vec<OutlookRecipient>,
    #[serde(rename = "Attachments", skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<OutlookAttachment>,
}

#[derive(Debug, Serialize)]
pub struct OutlookBody {
    #[serde(rename = "ContentType")]
    pub content_type: String,
    #[serde(rename = "Content")]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlookRecipient {
    #[serde(rename = "EmailAddress")]
    pub email_address: OutlookEmailAddress,
}

impl OutlookRecipient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            email_address: OutlookEmailAddress {
                name: None,
                address: Some(address.into()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlookEmailAddress {
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OutlookAttachment {
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ContentBytes")]
    pub content_bytes: String,
}

/// Error envelope returned on failed requests: `{"error": {"code", "message"}}`
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ProviderError,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProviderError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Response wrapper for sent-items searches
#[derive(Debug, Deserialize)]
pub struct SentItemsResponse {
    #[serde(rename = "@odata.context", default)]
    pub odata_context: Option<String>,
    #[serde(default)]
    pub value: Vec<SentItem>,
}

/// A message from the Sent Items folder, limited to `Sender` and `Subject`
#[derive(Debug, Clone, Deserialize)]
pub struct SentItem {
    #[serde(rename = "@odata.id", default)]
    pub odata_id: Option<String>,
    #[serde(rename = "@odata.etag", default)]
    pub odata_etag: Option<String>,
    #[serde(rename = "@odata.type", default)]
    pub odata_type: Option<String>,
    /// Empty when the service omits it
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Subject", default)]
    pub subject: Option<String>,
    #[serde(rename = "Sender", default)]
    pub sender: Option<OutlookRecipient>,
}

impl SentItem {
    /// Sender address, if the service returned one
    pub fn sender_address(&self) -> Option<&str> {
        self.sender
            .as_ref()
            .and_then(|s| s.email_address.address.as_deref())
    }
}
