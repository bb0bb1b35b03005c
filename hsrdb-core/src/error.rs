//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type.
///
/// Every variant is transport-class: the owning panel renders it inline and
/// the application keeps running. An empty result set is not an error.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Connection failure, DNS resolution failure, TLS failure, ...
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Non-2xx HTTP status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body could not be decoded as the expected payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// The service answered with an error payload (e.g. unknown id)
    #[error("API error: {0}")]
    Api(String),
}

impl CoreError {
    /// Whether this is expected behavior (missing id, user-driven miss) used
    /// for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Api(_) | Self::Status { status: 404, .. })
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_message() {
        let err = CoreError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn missing_id_is_expected() {
        assert!(CoreError::Api("not_found".to_string()).is_expected());
        assert!(!CoreError::Network("connection refused".to_string()).is_expected());
    }
}
