//! Transaction Routes
//!
//! - GET /transactions - Transaction list with the computed balance

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::models::TransactionsResponse;

/// GET /transactions
///
/// Returns every stored transaction in store order together with the
/// income/outcome/total balance.
pub async fn list_transactions(State(state): State<Arc<AppState>>) -> Json<TransactionsResponse> {
    let response = state.store.response();

    tracing::debug!(
        transactions = response.transactions.len(),
        total = response.balance.total,
        "Serving transactions"
    );

    Json(response)
}
