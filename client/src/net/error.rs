//! Error type shared by every REST call.
//!
//! ERROR HANDLING
//! ==============
//! Pages never panic on a failed request. They match on `ApiError` to decide
//! between clearing the session (`Unauthorized`) and showing a toast built
//! from `user_message()`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("not signed in or session expired")]
    Unauthorized,
    #[error("permission denied")]
    Forbidden,
    #[error("record not found")]
    NotFound,
    #[error("rejected: {0}")]
    Validation(String),
    #[error("request failed: {status} {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("api not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Map a non-2xx status and its body to an error. `body_message` is the
    /// backend's `message`/`error` field when the body carried one.
    #[must_use]
    pub fn from_status(status: u16, body_message: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400 | 422 => Self::Validation(body_message.unwrap_or_else(|| "invalid input".to_owned())),
            _ => Self::Status { status, message: body_message.unwrap_or_default() },
        }
    }

    /// Text suitable for a toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_owned(),
            Self::Forbidden => "You do not have permission to do that.".to_owned(),
            Self::NotFound => "That record no longer exists.".to_owned(),
            Self::Validation(message) => message.clone(),
            Self::Status { status, message } if message.is_empty() => format!("Server error ({status})."),
            Self::Status { message, .. } => message.clone(),
            Self::Network(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
            Self::Unavailable => "Not available yet.".to_owned(),
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Pull a human-readable message out of an error body such as
/// `{"message": "..."}` or `{"error": "..."}`.
#[must_use]
pub fn extract_body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error", "detail"]
        .into_iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
