//! Display-ready records
//!
//! Built once per fetch from the wire model and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::format::{format_date, format_value, verify_value};
use crate::models::{Balance, Category, Transaction, TransactionType, TransactionsResponse};

/// A transaction with its formatted amount and date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionView {
    pub id: String,
    pub title: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    #[serde(serialize_with = "crate::models::codec::serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    /// Currency string, prefixed with `"- "` for outcomes
    #[serde(rename = "formattedValue")]
    pub formatted_value: String,
    /// pt-BR date in UTC
    #[serde(rename = "formattedDate")]
    pub formatted_date: String,
}

impl TransactionView {
    pub fn from_wire(tx: Transaction) -> Self {
        let formatted_value = verify_value(&format_value(tx.value), tx.kind);
        let formatted_date = format_date(tx.created_at);

        Self {
            id: tx.id,
            title: tx.title,
            value: tx.value,
            kind: tx.kind,
            category: tx.category,
            created_at: tx.created_at,
            formatted_value,
            formatted_date,
        }
    }

    /// Style class for the price cell
    pub fn price_class(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// Formatted balance cards.
///
/// `Default` is the pre-load state: three blank strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalanceView {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

impl BalanceView {
    pub fn from_wire(balance: &Balance) -> Self {
        Self {
            income: format_value(balance.income),
            outcome: format_value(balance.outcome),
            total: format_value(balance.total),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.income.is_empty() && self.outcome.is_empty() && self.total.is_empty()
    }
}

/// Everything one successful fetch produces
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub transactions: Vec<TransactionView>,
    pub balance: BalanceView,
}

impl DashboardSnapshot {
    /// Format a response; transaction order is kept as received
    pub fn from_response(response: TransactionsResponse) -> Self {
        let balance = BalanceView::from_wire(&response.balance);
        let transactions = response
            .transactions
            .into_iter()
            .map(TransactionView::from_wire)
            .collect();

        Self {
            transactions,
            balance,
        }
    }
}
