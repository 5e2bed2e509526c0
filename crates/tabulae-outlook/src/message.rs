//! Outgoing message model and its mapping onto the sendmail schema

use crate::types::{
    OutlookAttachment, OutlookBody, OutlookMessage, OutlookRecipient, SendMailRequest,
    FILE_ATTACHMENT_TYPE, HTML_CONTENT_TYPE,
};
use base64::Engine;

/// An attachment to include in an outgoing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingAttachment {
    /// Filename to display
    pub filename: String,
    /// Raw file data
    pub data: Vec<u8>,
}

impl OutgoingAttachment {
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }
}

/// Email message to send
///
/// The sender is whoever the access token belongs to; `from` is kept for
/// logging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    /// From address
    pub from: String,
    /// To address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub html_body: String,
    /// File attachments, sent in this order
    pub attachments: Vec<OutgoingAttachment>,
}

impl OutgoingMessage {
    /// Create a new message builder
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            html_body: String::new(),
            attachments: Vec::new(),
        }
    }

    /// Set the HTML body
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html_body = body.into();
        self
    }

    /// Add an attachment
    pub fn attachment(mut self, filename: impl Into<String>, data: Vec<u8>) -> Self {
        self.attachments.push(OutgoingAttachment::new(filename, data));
        self
    }

    /// Append several attachments, keeping their order
    pub fn attachments(mut self, attachments: impl IntoIterator<Item = OutgoingAttachment>) -> Self {
        self.attachments.extend(attachments);
        self
    }

    /// Map onto the `POST /me/sendmail` body
    pub fn to_request(&self) -> SendMailRequest {
        let engine = base64::engine::general_purpose::STANDARD;

        let attachments = self
            .attachments
            .iter()
            .map(|att| OutlookAttachment {
                odata_type: FILE_ATTACHMENT_TYPE.to_string(),
                name: att.filename.clone(),
                content_bytes: engine.encode(&att.data),
            })
            .collect();

        SendMailRequest {
            message: OutlookMessage {
                subject: self.subject.clone(),
                body: OutlookBody {
                    content_type: HTML_CONTENT_TYPE.to_string(),
                    content: self.html_body.clone(),
                },
                to_recipients: vec![OutlookRecipient::new(self.to.clone())],
                attachments,
            },
        }
    }
}
