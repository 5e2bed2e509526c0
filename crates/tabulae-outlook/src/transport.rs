//! HTTP transport seam
//!
//! The client builds an [`ApiRequest`], hands it to a [`Transport`], and
//! interprets the [`ApiResponse`]. Responses are fully buffered so the
//! connection goes back to the pool before the client looks at the status.

use crate::config::OutlookConfig;
use crate::error::{OutlookError, OutlookResult, TransportError, TransportResult};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tracing::debug;

/// A single outgoing API call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Full `Authorization` header value
    pub authorization: String,
    /// JSON body, if any
    pub body: Option<Vec<u8>>,
}

/// Status and buffered body of an API call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// 200 OK or 202 Accepted; anything else counts as a failure
    pub fn is_accepted(&self) -> bool {
        self.status == 200 || self.status == 202
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> TransportResult<ApiResponse>;
}

/// Transport backed by a shared `reqwest::Client`
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client with the configured timeout
    pub fn new(config: &OutlookConfig) -> OutlookResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| OutlookError::InvalidConfig(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> TransportResult<ApiResponse> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidRequest(format!("{}: {}", request.url, e)))?;
        debug!("HTTP {} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method, url)
            .header(AUTHORIZATION, request.authorization)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!("HTTP status {} ({} bytes)", status, body.len());

        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn execute(&self, request: ApiRequest) -> TransportResult<ApiResponse> {
        (**self).execute(request).await
    }
}
