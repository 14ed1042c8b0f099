use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API request.
///
/// `Display` renders only the human readable message so it can be shown to
/// the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response (unreachable host, timeout, ...).
    #[error("{0}")]
    Network(String),

    /// A success response whose body is not the expected JSON.
    #[error("Invalid response from server: {0}")]
    Decode(String),

    #[error("Invalid API address: {0}")]
    InvalidUrl(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Builds the error for a non-success response, preferring the server's
    /// `error` field over the generic status text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));
        Self::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
