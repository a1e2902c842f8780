//! Registration endpoint client.
//!
//! Wire contract:
//!
//! ```text
//! POST <endpoint>            {"name": "...", "phone": "...", "age": "..."}
//! 200 success                {"status": "success", "data": {"patientId": "P100", "token": 7}}
//! 200 application failure    {"status": "error", "message": "..."}
//! ```
//!
//! `token` may be any JSON number or a string. Anything else in a 2xx body
//! is a malformed response.

use crate::validation::{RegistrationInput, ValidationError};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Discriminator value signalling a successful registration.
pub const SUCCESS_STATUS: &str = "success";

/// Longest slice of a non-2xx body kept in the error, in characters.
pub const MAX_ERROR_BODY_CHARS: usize = 200;

/// Queue token, as returned by the endpoint.
///
/// Numbers are kept as received and displayed in their JSON form, so `7.0`
/// and `-1` are shown as sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Token {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Text(s) => f.write_str(s),
        }
    }
}

/// A completed registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResult {
    pub patient_id: String,
    pub token: Token,
}

#[derive(Debug, Deserialize)]
struct RegistrationResponse {
    status: Option<String>,
    message: Option<String>,
    data: Option<serde_json::Value>,
}

/// Category shown to the user alongside the generic error notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The endpoint could not be reached (DNS, refused connection, TLS, CORS)
    Network,
    MalformedResponse,
    Generic,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("registration endpoint unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("registration endpoint returned HTTP {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("malformed registration response: {0}")]
    MalformedBody(String),

    #[error("registration rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
}

impl SubmitError {
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            SubmitError::Transport(_) => Diagnostic::Network,
            SubmitError::MalformedBody(_) => Diagnostic::MalformedResponse,
            SubmitError::Validation(_)
            | SubmitError::BadStatus { .. }
            | SubmitError::Rejected { .. } => Diagnostic::Generic,
        }
    }

    /// Human-readable message supplied by the endpoint, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected { message } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}

/// Interpret a response body received with a 2xx status.
pub fn parse_response(body: &str) -> Result<RegistrationResult, SubmitError> {
    let response: RegistrationResponse = serde_json::from_str(body)
        .map_err(|e| SubmitError::MalformedBody(e.to_string()))?;

    if response.status.as_deref() != Some(SUCCESS_STATUS) {
        return Err(SubmitError::Rejected {
            message: response.message,
        });
    }

    let data = response
        .data
        .ok_or_else(|| SubmitError::MalformedBody("missing `data` object".to_string()))?;

    serde_json::from_value(data).map_err(|e| SubmitError::MalformedBody(e.to_string()))
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}

/// HTTP client bound to the configured registration endpoint.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    endpoint_url: String,
}

impl RegistrationClient {
    pub fn new(http: reqwest::Client, endpoint_url: impl Into<String>) -> Self {
        Self {
            http,
            endpoint_url: endpoint_url.into(),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Send one registration request. No retry is attempted.
    pub async fn register(
        &self,
        input: &RegistrationInput,
    ) -> Result<RegistrationResult, SubmitError> {
        debug!("POST {}", self.endpoint_url);

        let response = self
            .http
            .post(&self.endpoint_url)
            .header("Content-Type", "application/json")
            .json(input)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(SubmitError::Transport)?;

        if !status.is_success() {
            return Err(SubmitError::BadStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        parse_response(&body)
    }
}
