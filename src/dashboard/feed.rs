//! Transaction feeds
//!
//! The seam between the dashboard and wherever `GET /transactions` data
//! comes from: the HTTP client in production, a fixed document for
//! offline rendering and tests.

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::FeedError;
use crate::models::TransactionsResponse;

/// Source of the transactions document
#[async_trait]
pub trait TransactionFeed: Send + Sync {
    /// Read the transaction list and balance summary once
    async fn fetch_transactions(&self) -> Result<TransactionsResponse, FeedError>;
}

/// Feed that answers every fetch with the same outcome
pub struct StaticFeed {
    outcome: Result<TransactionsResponse, FeedError>,
    calls: AtomicUsize,
}

impl StaticFeed {
    pub fn new(response: TransactionsResponse) -> Self {
        Self {
            outcome: Ok(response),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: FeedError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Decode a saved `GET /transactions` body.
    ///
    /// A body that does not decode becomes a feed that fails with
    /// [`FeedError::Decode`], the same as a malformed network response.
    pub fn from_json(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(response) => Self::new(response),
            Err(e) => Self::failing(e.into()),
        }
    }

    /// Read a saved response from disk
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let body = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&body))
    }

    /// Number of fetches served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionFeed for StaticFeed {
    async fn fetch_transactions(&self) -> Result<TransactionsResponse, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_static_feed_counts_calls() {
        let feed = StaticFeed::new(TransactionsResponse::default());
        assert_eq!(feed.calls(), 0);

        feed.fetch_transactions().await.unwrap();
        feed.fetch_transactions().await.unwrap();
        assert_eq!(feed.calls(), 2);
    }

    #[tokio::test]
    async fn test_malformed_json_fails_on_fetch() {
        let feed = StaticFeed::from_json(r#"{"transactions": "nope"}"#);
        let err = feed.fetch_transactions().await.unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }

    #[tokio::test]
    async fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"transactions":[],"balance":{{"income":"10","outcome":"4","total":"6"}}}}"#
        )
        .unwrap();

        let feed = StaticFeed::from_file(file.path()).unwrap();
        let response = feed.fetch_transactions().await.unwrap();
        assert_eq!(response.balance.total, 6.0);
    }
}
