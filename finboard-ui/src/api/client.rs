//! HTTP API Client
//!
//! Reads the transactions document from the finances API.

use finboard::{FeedError, TransactionsResponse};
use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3333";

/// Local storage key holding an API base override
pub const API_BASE_KEY: &str = "finboard_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Trim whitespace and trailing slashes; blank falls back to the default
fn normalize_base(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        url.to_string()
    }
}

fn transactions_url(base: &str) -> String {
    format!("{}/transactions", base)
}

/// Fetch the transaction list and balance summary
pub async fn fetch_transactions() -> Result<TransactionsResponse, FeedError> {
    let url = transactions_url(&get_api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FeedError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FeedError::Status {
            status: response.status(),
            message: response.status_text(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FeedError::Transport(e.to_string()))?;

    Ok(serde_json::from_str(&body)?)
}
