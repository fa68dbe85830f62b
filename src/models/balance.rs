//! Balance summary and the response envelope

use serde::{Deserialize, Serialize};

use super::codec;
use super::transaction::{Transaction, TransactionType};

/// Aggregated income, outcome and net total.
///
/// On the wire each field is a numeric string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(
        deserialize_with = "codec::deserialize_amount",
        serialize_with = "codec::serialize_amount_string"
    )]
    pub income: f64,
    #[serde(
        deserialize_with = "codec::deserialize_amount",
        serialize_with = "codec::serialize_amount_string"
    )]
    pub outcome: f64,
    #[serde(
        deserialize_with = "codec::deserialize_amount",
        serialize_with = "codec::serialize_amount_string"
    )]
    pub total: f64,
}

impl Balance {
    pub fn new(income: f64, outcome: f64, total: f64) -> Self {
        Self {
            income,
            outcome,
            total,
        }
    }

    /// Sum incomes and outcomes; total is their difference
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let (income, outcome) =
            transactions
                .into_iter()
                .fold((0.0, 0.0), |(income, outcome), tx| match tx.kind {
                    TransactionType::Income => (income + tx.value, outcome),
                    TransactionType::Outcome => (income, outcome + tx.value),
                });

        Self {
            income,
            outcome,
            total: income - outcome,
        }
    }
}

/// Body of `GET /transactions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub balance: Balance,
}

impl TransactionsResponse {
    /// Build a response whose balance is computed from the transactions
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let balance = Balance::from_transactions(&transactions);
        Self {
            transactions,
            balance,
        }
    }
}
