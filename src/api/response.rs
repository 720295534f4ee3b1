//! Response types for the Custody Schedule Engine API.
//!
//! This module defines the response bodies and the mapping from engine
//! errors to HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::CustodyResolution;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an invalid query string error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_QUERY",
            message,
            "Expected a 'date' parameter in YYYY-MM-DD format",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        // Every engine error is a configuration problem on the server side.
        let (code, message) = match &error {
            EngineError::ConfigNotFound { .. } => ("CONFIG_NOT_FOUND", "Configuration not found"),
            EngineError::ConfigParseError { .. } => {
                ("CONFIG_INVALID", "Configuration parse error")
            }
            EngineError::InvalidWeekday { .. }
            | EngineError::MalformedDate { .. }
            | EngineError::MalformedTime { .. }
            | EngineError::UnknownHoliday { .. } => {
                ("CONFIG_INVALID", "Configuration validation error")
            }
            EngineError::InvalidSchoolCalendar { .. } => {
                ("CONFIG_INVALID", "School calendar validation error")
            }
        };

        ApiErrorResponse {
            status: StatusCode::SERVICE_UNAVAILABLE,
            error: ApiError::with_details(code, message, error.to_string()),
        }
    }
}

/// Body of `GET /custody/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// The resolved custody, with the rule that matched.
    #[serde(flatten)]
    pub resolution: CustodyResolution,
    /// Display name of the party with the children.
    pub party_name: String,
}

/// Body of `POST /config/reload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    /// Always "reloaded".
    pub status: String,
    /// The configuration generation now being served.
    pub generation: u64,
}
