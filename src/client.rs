//! Transactions API Client
//!
//! HTTP client for the `GET /transactions` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::dashboard::{FeedError, TransactionFeed};
use crate::models::TransactionsResponse;

/// Transactions API client
pub struct FinancesClient {
    client: Client,
    config: ClientConfig,
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:3333")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full URL of the transactions endpoint
    pub fn transactions_url(&self) -> String {
        format!("{}/transactions", self.base_url.trim_end_matches('/'))
    }
}

impl FinancesClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// GET /transactions
    pub async fn get_transactions(&self) -> Result<TransactionsResponse, FeedError> {
        let url = self.config.transactions_url();
        tracing::debug!(url = %url, "Fetching transactions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = response.text().await.map_err(classify)?;

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl TransactionFeed for FinancesClient {
    async fn fetch_transactions(&self) -> Result<TransactionsResponse, FeedError> {
        self.get_transactions().await
    }
}

fn classify(err: reqwest::Error) -> FeedError {
    if err.is_timeout() {
        FeedError::Timeout
    } else if err.is_connect() {
        FeedError::Unavailable
    } else {
        FeedError::Transport(err.to_string())
    }
}
