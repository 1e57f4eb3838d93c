/*
[INPUT]:  Error sources (HTTP transport, API error bodies, serialization, login flow)
[OUTPUT]: Structured error types with composed messages and status hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::models::serde_helpers::null_as_default;

/// Main error type for the MoonPay adapter
#[derive(Error, Debug)]
pub enum MoonpayError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with status >= 400
    #[error("{0}")]
    Api(ApiError),

    /// Authentication flow used out of order
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Success body did not match the expected type
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoonpayError {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            MoonpayError::Api(err) => Some(err.status),
            MoonpayError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Check if the error is worth retrying. The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            MoonpayError::Http(_) => true,
            MoonpayError::Api(err) => {
                err.status == StatusCode::TOO_MANY_REQUESTS || err.status.is_server_error()
            }
            _ => false,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            MoonpayError::Authentication { .. } => true,
            MoonpayError::Api(err) => {
                err.status == StatusCode::UNAUTHORIZED || err.status == StatusCode::FORBIDDEN
            }
            _ => false,
        }
    }

    pub(crate) fn authentication(message: impl Into<String>) -> Self {
        MoonpayError::Authentication {
            message: message.into(),
        }
    }
}

impl From<ApiError> for MoonpayError {
    fn from(err: ApiError) -> Self {
        MoonpayError::Api(err)
    }
}

/// Result type alias for MoonPay operations
pub type Result<T> = std::result::Result<T, MoonpayError>;

/// One failed validation on a request field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// The object that failed validation, as sent
    #[serde(default)]
    pub target: Option<Map<String, Value>>,
    /// Offending value
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub property: String,
    /// Constraint name -> human readable message
    #[serde(default, deserialize_with = "null_as_default")]
    pub constraints: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<FieldError>,
}

impl FieldError {
    fn collect_messages(&self, out: &mut Vec<String>) {
        for message in self.constraints.values() {
            match message {
                Value::String(text) => out.push(text.clone()),
                other => out.push(other.to_string()),
            }
        }
        for child in &self.children {
            child.collect_messages(out);
        }
    }
}

/// Decoded error response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: Option<String>,
    pub name: Option<String>,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    errors: Vec<FieldError>,
}

impl ApiError {
    /// Decode an error body. A body that is not the expected JSON still yields
    /// an error carrying the status line.
    pub fn from_body(status: StatusCode, body: &[u8]) -> Self {
        let decoded = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::warn!(
                    status = %status,
                    error = %err,
                    "error response body is not valid JSON"
                );
                ErrorBody::default()
            }
        };

        Self {
            status,
            message: decoded.message.filter(|message| !message.is_empty()),
            name: decoded.name,
            errors: decoded.errors,
        }
    }

    /// Status line, e.g. `422 Unprocessable Entity`
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }

    /// All constraint messages, fields in order, nested children after their parent
    pub fn constraint_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        for error in &self.errors {
            error.collect_messages(&mut messages);
        }
        messages
    }

    /// Constraint messages joined by "; ", else the message, else the status line
    pub fn composed_message(&self) -> String {
        let messages = self.constraint_messages();
        if !messages.is_empty() {
            return messages.join("; ");
        }
        if let Some(message) = &self.message {
            return message.clone();
        }
        self.status_line()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.composed_message())
    }
}

impl std::error::Error for ApiError {}
