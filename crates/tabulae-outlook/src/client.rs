use crate::config::OutlookConfig;
use crate::credential::Credential;
use crate::error::{OutlookError, OutlookResult};
use crate::message::{OutgoingAttachment, OutgoingMessage};
use crate::transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
use crate::types::*;
use reqwest::Method;
use tracing::{debug, error, info, warn};

const SEND_MAIL_PATH: &str = "api/v2.0/me/sendmail";
const SENT_ITEMS_PATH: &str = "api/v2.0/me/MailFolders/sentitems/messages/";

/// Fields to select in sent-items searches
const SENT_ITEMS_SELECT: &str = "Sender,Subject";

/// Longest prefix of a non-envelope error body that gets logged
const LOGGED_BODY_LIMIT: usize = 512;

/// Outlook REST client bound to a single mailbox credential
pub struct OutlookClient<T = ReqwestTransport> {
    transport: T,
    credential: Credential,
    config: OutlookConfig,
}

impl OutlookClient<ReqwestTransport> {
    pub fn new(credential: Credential, config: OutlookConfig) -> OutlookResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(credential, config, transport))
    }
}

impl<T: Transport> OutlookClient<T> {
    pub fn with_transport(credential: Credential, config: OutlookConfig, transport: T) -> Self {
        Self {
            transport,
            credential,
            config,
        }
    }

    /// Send an HTML email to a single recipient
    pub async fn send_email(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> OutlookResult<()> {
        let message = OutgoingMessage::new(from, to, subject).html(html_body);
        self.send_message(&message).await
    }

    /// Send an HTML email with file attachments, in the order given
    pub async fn send_email_with_attachments(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        html_body: &str,
        attachments: Vec<OutgoingAttachment>,
    ) -> OutlookResult<()> {
        let message = OutgoingMessage::new(from, to, subject)
            .html(html_body)
            .attachments(attachments);
        self.send_message(&message).await
    }

    /// POST a message to /me/sendmail.
    ///
    /// Succeeds on 200 or 202 whatever the body says. Every other outcome is
    /// logged and reported as [`OutlookError::SendFailed`].
    pub async fn send_message(&self, message: &OutgoingMessage) -> OutlookResult<()> {
        self.require_token()?;

        let body = serde_json::to_vec(&message.to_request()).map_err(|e| {
            error!("Outlook: failed to serialize sendmail body: {}", e);
            OutlookError::SendFailed
        })?;

        info!(
            "Outlook: sending mail from {} to {}, attachments={}",
            message.from,
            message.to,
            message.attachments.len()
        );
        debug!("Outlook: sendmail body {} bytes", body.len());

        let request = ApiRequest {
            method: Method::POST,
            url: self.config.endpoint(SEND_MAIL_PATH),
            authorization: self.credential.authorization_header(),
            body: Some(body),
        };

        let response = self.transport.execute(request).await.map_err(|e| {
            error!("Outlook: sendmail request failed: {}", e);
            OutlookError::SendFailed
        })?;

        if response.is_accepted() {
            info!("Outlook: mail accepted (status {})", response.status);
            return Ok(());
        }

        log_failure("sendmail", &response);
        Err(OutlookError::SendFailed)
    }

    /// Look up sent items matching `subject`.
    ///
    /// Only checks that the search request goes through; the response body is
    /// not parsed. `to` is used for logging.
    pub async fn get_email(&self, to: &str, subject: &str) -> OutlookResult<()> {
        self.require_token()?;
        debug!("Outlook: checking sent items for {} subject={:?}", to, subject);

        let response = self.fetch_sent_items(subject).await?;
        debug!("Outlook: sent items search returned {} bytes", response.body.len());
        Ok(())
    }

    /// Search the Sent Items folder by subject and decode the matches
    pub async fn search_sent_items(&self, subject: &str) -> OutlookResult<Vec<SentItem>> {
        self.require_token()?;

        let response = self.fetch_sent_items(subject).await?;
        let list: SentItemsResponse = serde_json::from_slice(&response.body).map_err(|e| {
            error!("Outlook: failed to parse sent items: {}", e);
            OutlookError::FetchFailed
        })?;

        info!("Outlook: found {} sent items for subject={:?}", list.value.len(), subject);
        Ok(list.value)
    }

    fn require_token(&self) -> OutlookResult<()> {
        if self.credential.has_token() {
            Ok(())
        } else {
            warn!("Outlook: no access token for {}", self.credential.email());
            Err(OutlookError::NoAccessToken)
        }
    }

    async fn fetch_sent_items(&self, subject: &str) -> OutlookResult<ApiResponse> {
        let request = ApiRequest {
            method: Method::GET,
            url: self.sent_items_url(subject),
            authorization: self.credential.authorization_header(),
            body: None,
        };

        let response = self.transport.execute(request).await.map_err(|e| {
            error!("Outlook: sent items request failed: {}", e);
            OutlookError::FetchFailed
        })?;

        if !response.is_accepted() {
            log_failure("sent items search", &response);
            return Err(OutlookError::FetchFailed);
        }

        Ok(response)
    }

    fn sent_items_url(&self, subject: &str) -> String {
        let subject: String = url::form_urlencoded::byte_serialize(subject.as_bytes()).collect();
        format!(
            "{}?$select={}&$search=\"subject:{}\"",
            self.config.endpoint(SENT_ITEMS_PATH),
            SENT_ITEMS_SELECT,
            subject
        )
    }
}

/// Decode the provider error envelope, if the body is one
pub fn provider_error(body: &[u8]) -> Option<ProviderError> {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error)
}

fn log_failure(operation: &str, response: &ApiResponse) {
    match provider_error(&response.body) {
        Some(err) => warn!(
            "Outlook: {} failed with status {}: {} ({})",
            operation, response.status, err.message, err.code
        ),
        None => {
            let shown = &response.body[..response.body.len().min(LOGGED_BODY_LIMIT)];
            warn!(
                "Outlook: {} failed with status {}: {}{}",
                operation,
                response.status,
                String::from_utf8_lossy(shown),
                if shown.len() < response.body.len() { " [truncated]" } else { "" }
            )
        }
    }
}
