// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use tracing::{debug, instrument, trace};
use url::Url;

use utau_schema::{
    validate_requested_types, validate_response, LyricsData, LyricsResponse, LyricsType,
};

use crate::error::{BuildError, Result, UtauError};
use crate::transport::{HttpTransport, Transport};

/// The canonical Utau service origin.
pub const UTAU_API_BASE: &str = "https://utau.keia.one";

const NOT_FOUND: u16 = 404;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Supported Utau API versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    #[default]
    V1,
}

impl ApiVersion {
    fn number(self) -> u8 {
        match self {
            ApiVersion::V1 => 1,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

/// Utau lyrics API client.
#[derive(Clone)]
pub struct UtauClient {
    transport: Arc<dyn Transport>,
    endpoint: Url,
    headers: HeaderMap,
}

impl UtauClient {
    /// Create a client against the canonical service with default settings.
    pub fn new(
        api_key: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> std::result::Result<Self, BuildError> {
        Self::builder(api_key, user_agent).build()
    }

    /// Create a client builder for custom configuration.
    ///
    /// The API key and user agent have no defaults; the service rejects
    /// requests without them.
    pub fn builder(
        api_key: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> UtauClientBuilder {
        UtauClientBuilder {
            api_key: api_key.into(),
            user_agent: user_agent.into(),
            base_url: UTAU_API_BASE.to_string(),
            version: ApiVersion::default(),
            timeout: DEFAULT_TIMEOUT,
            transport: None,
        }
    }

    /// Look up lyrics for a query.
    ///
    /// `query` is free text (`flashlights by the forest powfu`) or a
    /// third-party track reference (`spotify:4iV5W9uYEdYUVa79Axb7Rh`).
    /// `types` filters which lyrics variants are requested: one to three
    /// unique values.
    ///
    /// Returns `Ok(Some(data))` on a success envelope, `Ok(None)` when the
    /// service reports it has no lyrics for the query (404 plus a failure
    /// envelope), and an error otherwise. To abandon an in-flight lookup,
    /// drop the future.
    #[instrument(skip(self))]
    pub async fn fetch_lyrics(
        &self,
        query: &str,
        types: &[LyricsType],
    ) -> Result<Option<LyricsData>> {
        validate_requested_types(types).map_err(|diagnostics| UtauError::Validation {
            subject: "requested types",
            diagnostics,
        })?;

        let mut url = self.endpoint.clone();
        let joined = types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",");
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("types", &joined);

        debug!(target: "utau", url = %url, "fetching lyrics");

        let response = self.transport.get(url, self.headers.clone()).await?;
        trace!(target: "utau", status = response.status, body = %response.body, "response received");

        let payload: serde_json::Value = serde_json::from_str(&response.body)?;
        let validated = validate_response(&payload).map_err(|diagnostics| {
            UtauError::Validation {
                subject: "server response",
                diagnostics,
            }
        })?;

        match validated {
            LyricsResponse::Failure(failure) if response.status == NOT_FOUND => {
                debug!(target: "utau", message = %failure.message, "no lyrics found");
                Ok(None)
            }
            LyricsResponse::Failure(failure) => Err(UtauError::FailedRequest {
                status: response.status,
                message: failure.message,
            }),
            LyricsResponse::Success(data) => Ok(Some(data)),
        }
    }
}

impl fmt::Debug for UtauClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UtauClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`UtauClient`].
#[derive(Clone)]
pub struct UtauClientBuilder {
    api_key: String,
    user_agent: String,
    base_url: String,
    version: ApiVersion,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl UtauClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API version to request.
    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Set the request timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Substitute the transport implementation.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> std::result::Result<UtauClient, BuildError> {
        let trimmed = self.base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{}/{}/lyrics", trimmed, self.version)).map_err(
            |source| BuildError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source,
            },
        )?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent).map_err(|source| {
                BuildError::InvalidHeader {
                    name: "User-Agent",
                    source,
                }
            })?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(|source| {
                BuildError::InvalidHeader {
                    name: "Authorization",
                    source,
                }
            })?,
        );

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.timeout).map_err(BuildError::Http)?),
        };

        Ok(UtauClient {
            transport,
            endpoint,
            headers,
        })
    }
}

impl fmt::Debug for UtauClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UtauClientBuilder")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
