//! Dashboard error types

use thiserror::Error;

/// Failures reading the transactions endpoint
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    #[error("Transactions API unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not a valid `{ transactions, balance }` document
    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Decode(err.to_string())
    }
}

/// Errors surfaced by [`Dashboard::load`](super::Dashboard::load)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("Failed to load transactions: {0}")]
    Fetch(#[from] FeedError),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error 500: boom");

        let err: DashboardError = FeedError::Timeout.into();
        assert_eq!(err.to_string(), "Failed to load transactions: Request timeout");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FeedError = json_err.into();
        assert!(matches!(err, FeedError::Decode(_)));
    }
}
