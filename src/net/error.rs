//! Error taxonomy for the REST layer.
//!
//! ERROR HANDLING
//! ==============
//! Every API call resolves to `Result<T, ApiError>`. Failures surface to the
//! invoking UI handler, which renders an inline banner; nothing retries. The
//! one globally handled case is `SessionExpired` (HTTP 401), which the client
//! layer turns into a forced logout before it ever reaches a page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    /// The server rejected the stored token (HTTP 401).
    #[error("your session has expired; please sign in again")]
    SessionExpired,
    /// Any other non-2xx response, carrying the server-provided message.
    #[error("{message}")]
    Status { code: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Returned by the non-browser fallback branches.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response from its status code and raw body.
    pub fn from_status(code: u16, body: &str) -> Self {
        if code == 401 {
            return Self::SessionExpired;
        }
        let message = error_message(body)
            .unwrap_or_else(|| format!("request failed with status {code}"));
        Self::Status { code, message }
    }
}

/// Extract a human-readable message from an error body. The loans endpoints
/// respond with an `error` key, auth with `msg`, registration with `message`;
/// they are tried in that order.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "msg", "message"] {
        if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_owned());
            }
        }
    }
    None
}
