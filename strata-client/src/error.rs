//! Error types for the Strata client.

use serde::Deserialize;
use strata_types::Sys;
use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the management API.
///
/// Nothing is retried or swallowed internally; every failure propagates to
/// the caller, and retry policy is the caller's responsibility.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure (DNS, connect, timeout), surfaced unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the API.
    #[error("API error ({status}): {}", .body.message.as_deref().unwrap_or("no error body"))]
    Api { status: u16, body: ApiErrorBody },

    /// A 2xx response body that does not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The operation requires a server-assigned id the entity does not have.
    #[error("entity has not been created yet (empty id)")]
    MissingId,

    /// Entry creation requires a content type link in `sys`.
    #[error("entry has no content type link")]
    MissingContentType,
}

impl Error {
    /// Builds an API error from a non-2xx status and the raw response body.
    /// Absent or unparseable bodies are tolerated and yield an empty body.
    pub(crate) fn api(status: u16, raw_body: &str) -> Self {
        let body = serde_json::from_str(raw_body).unwrap_or_default();
        Error::Api { status, body }
    }

    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Structured error body returned by the API on failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiErrorBody {
    pub sys: Option<Sys>,
    pub message: Option<String>,
    pub request_id: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// Error code from the body's sys block ("NotFound", "VersionMismatch", ...).
    pub fn code(&self) -> Option<&str> {
        self.sys
            .as_ref()
            .map(|sys| sys.id.as_str())
            .filter(|id| !id.is_empty())
    }
}
