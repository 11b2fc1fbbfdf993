use std::fmt;

use serde_json::Value;

/// Categories of API errors for consistent error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Connection failure or other transport-level error
    Network,
    /// Connection timeout or request timeout
    Timeout,
    /// HTTP status error not covered by a more specific kind
    Status,
    /// Rejected input (bad credentials, duplicate registration, bad payload)
    Validation,
    /// Missing or insufficient authorization (401, 403)
    Authorization,
    /// Failed to parse the response body
    Parse,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Timeout => write!(f, "timeout"),
            ApiErrorKind::Status => write!(f, "status"),
            ApiErrorKind::Validation => write!(f, "validation"),
            ApiErrorKind::Authorization => write!(f, "authorization"),
            ApiErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured error from the API with kind and details.
///
/// Every failure is surfaced to the user as `message`; none are fatal to the
/// process and none trigger an automatic retry.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error from a non-success HTTP response.
    ///
    /// 400/409/422 map to `Validation`, 401/403 to `Authorization`, anything
    /// else to `Status`. The backend (FastAPI) wraps human-readable messages
    /// in a `detail` field, which is preferred for display when present.
    pub fn http_status(status: u16, body: &str) -> Self {
        let kind = match status {
            400 | 409 | 422 => ApiErrorKind::Validation,
            401 | 403 => ApiErrorKind::Authorization,
            _ => ApiErrorKind::Status,
        };

        if let Ok(json) = serde_json::from_str::<Value>(body)
            && let Some(detail) = json.get("detail").and_then(|v| v.as_str())
        {
            return Self {
                kind,
                message: detail.to_string(),
                details: Some(body.to_string()),
            };
        }

        Self {
            kind,
            message: format!("HTTP {status}"),
            details: if body.is_empty() {
                None
            } else {
                Some(body.to_string())
            },
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Parse, message)
    }

    /// Classifies a reqwest transport error.
    pub fn from_reqwest(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::new(ApiErrorKind::Timeout, format!("Request timed out: {e}"))
        } else if e.is_connect() {
            Self::new(ApiErrorKind::Network, format!("Connection failed: {e}"))
        } else if e.is_decode() {
            Self::parse(format!("Invalid response: {e}"))
        } else {
            Self::new(ApiErrorKind::Network, format!("Network error: {e}"))
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::from_reqwest(&e)
    }
}
