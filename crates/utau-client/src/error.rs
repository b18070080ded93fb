// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;
use utau_schema::ValidationDiagnostics;

use crate::transport::TransportError;

pub type Result<T> = std::result::Result<T, UtauError>;

/// The ways one lyrics lookup can fail.
///
/// Only the first two variants carry semantics of their own. Transport and
/// JSON-parse failures belong to the collaborators that produced them and
/// pass through transparently.
#[derive(Debug, Error)]
pub enum UtauError {
    /// Local input or the server payload failed schema validation.
    ///
    /// Not retryable without the caller changing input: `subject` says which
    /// value broke the contract (`"requested types"` or `"server response"`).
    #[error("unable to validate {subject}: {diagnostics}")]
    Validation {
        subject: &'static str,
        diagnostics: ValidationDiagnostics,
    },

    /// The service returned a well-formed failure envelope for a status other
    /// than 404.
    #[error("[{status}] {message}")]
    FailedRequest { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A client could not be constructed from the supplied configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid {name} header value")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("failed to construct the HTTP transport")]
    Http(#[source] reqwest::Error),
}
