// SPDX-License-Identifier: GPL-3.0-or-later

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// A failure inside a transport implementation.
///
/// Carries whatever error the implementation produced; the pipeline forwards
/// it without reclassifying.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// One protocol-level exchange as seen by the pipeline.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// The network seam of the client.
///
/// Implementations perform a single GET exchange and hand back the status
/// code and raw body. The default is [`HttpTransport`]; tests substitute a
/// scripted implementation to run the pipeline without a socket.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url, headers: HeaderMap) -> Result<TransportResponse, TransportError>;
}

/// Default transport backed by [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url, headers: HeaderMap) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url).headers(headers).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
