//! Dashboard view state
//!
//! Two pieces of state, `transactions` and `balance`, written only by a
//! completed fetch. A new fetch replaces both; it never appends.

use super::view::{BalanceView, DashboardSnapshot, TransactionView};
use crate::models::TransactionsResponse;

#[cfg(feature = "native")]
use super::error::DashboardResult;
#[cfg(feature = "native")]
use super::feed::TransactionFeed;

/// The dashboard's view state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    transactions: Vec<TransactionView>,
    balance: BalanceView,
}

impl Dashboard {
    /// Empty dashboard: no rows, blank balance cards
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[TransactionView] {
        &self.transactions
    }

    pub fn balance(&self) -> &BalanceView {
        &self.balance
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.balance.is_blank()
    }

    /// Replace both pieces of state with a formatted snapshot
    pub fn apply(&mut self, snapshot: DashboardSnapshot) {
        self.transactions = snapshot.transactions;
        self.balance = snapshot.balance;
    }

    /// Format a wire response and apply it
    pub fn apply_response(&mut self, response: TransactionsResponse) {
        self.apply(DashboardSnapshot::from_response(response));
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            transactions: self.transactions.clone(),
            balance: self.balance.clone(),
        }
    }
}

#[cfg(feature = "native")]
impl Dashboard {
    /// Fetch once and apply the result.
    ///
    /// On failure the state is left exactly as it was.
    pub async fn load(&mut self, feed: &dyn TransactionFeed) -> DashboardResult<()> {
        let response = feed.fetch_transactions().await?;

        tracing::debug!(
            transactions = response.transactions.len(),
            "Transactions loaded"
        );

        self.apply_response(response);
        Ok(())
    }

    /// Create a dashboard and run its single mount-time fetch.
    ///
    /// A failed fetch is logged and the empty dashboard is returned.
    pub async fn mount(feed: &dyn TransactionFeed) -> Self {
        let mut dashboard = Self::new();

        if let Err(e) = dashboard.load(feed).await {
            tracing::warn!(error = %e, "Dashboard load failed, rendering empty state");
        }

        dashboard
    }
}
