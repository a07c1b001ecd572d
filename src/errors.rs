use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Failure body emitted by the backend alongside non-2xx statuses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorResponse {
    pub status: Option<u16>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
    pub errors: Option<BTreeMap<String, String>>,
}

/// Error type that captures every failure category of the request wrapper.
///
/// HTTP statuses map onto the first eight variants; `Network` covers calls
/// where no response was received and `RequestSetup` covers requests that
/// could not be constructed in the first place.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400, with per-field validation details when the backend supplied them.
    #[error("{message}")]
    BadRequest {
        message: String,
        field_errors: BTreeMap<String, String>,
    },
    /// 401. The wrapper clears the session and requests a login redirect.
    #[error("Unauthorized. Please login again.")]
    Unauthorized,
    /// 403.
    #[error("Access forbidden")]
    Forbidden,
    /// 404.
    #[error("{message}")]
    NotFound { message: String },
    /// 500.
    #[error("{message}")]
    Server { message: String },
    /// 502.
    #[error("Bad Gateway. The server is unavailable or returned an invalid response.")]
    BadGateway,
    /// 503.
    #[error("Service unavailable. Please try again later.")]
    ServiceUnavailable,
    /// Any other non-success status.
    #[error("{message}")]
    Unexpected { status: u16, message: String },
    /// The request went out but no response came back.
    #[error("Network error. Please check your connection.")]
    Network(#[source] reqwest::Error),
    /// The request could not be built (bad URL, unserializable query, ...).
    #[error("Error: {message}")]
    RequestSetup { message: String },
}

impl ApiError {
    /// Classifies a response status plus its parsed body into a variant,
    /// letting a server-supplied `message` override the default text.
    pub fn classify(status: u16, body: Option<ErrorResponse>) -> Self {
        let body = body.unwrap_or_default();
        let server_message = body.message.filter(|m| !m.trim().is_empty());
        match status {
            400 => ApiError::BadRequest {
                message: server_message
                    .unwrap_or_else(|| "Bad request. Please check your input.".into()),
                field_errors: body.errors.unwrap_or_default(),
            },
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound {
                message: server_message.unwrap_or_else(|| "Resource not found".into()),
            },
            500 => ApiError::Server {
                message: server_message
                    .unwrap_or_else(|| "Internal server error. Please try again later.".into()),
            },
            502 => ApiError::BadGateway,
            503 => ApiError::ServiceUnavailable,
            other => ApiError::Unexpected {
                status: other,
                message: server_message.unwrap_or_else(|| "An error occurred".into()),
            },
        }
    }

    /// HTTP status behind the variant, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest { .. } => Some(400),
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Server { .. } => Some(500),
            ApiError::BadGateway => Some(502),
            ApiError::ServiceUnavailable => Some(503),
            ApiError::Unexpected { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::RequestSetup { .. } => None,
        }
    }

    /// User-facing notification line for this failure against `endpoint`.
    ///
    /// Most variants append the status code; server-side failures also name
    /// the endpoint so the message stays actionable in logs.
    pub fn notification(&self, endpoint: &str) -> String {
        match self {
            ApiError::BadRequest { .. }
            | ApiError::NotFound { .. }
            | ApiError::Forbidden
            | ApiError::ServiceUnavailable => {
                format!("{} ({})", self, self.status().unwrap_or_default())
            }
            ApiError::Server { .. } | ApiError::BadGateway => format!(
                "{} ({}) - Endpoint: {}",
                self,
                self.status().unwrap_or_default(),
                endpoint
            ),
            ApiError::Unexpected { status, .. } => {
                format!("{} ({}) - {}", self, status, endpoint)
            }
            ApiError::Unauthorized | ApiError::Network(_) | ApiError::RequestSetup { .. } => {
                self.to_string()
            }
        }
    }
}

/// Error type that captures session persistence failures.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
