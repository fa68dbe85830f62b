//! Transaction Store
//!
//! The fixed transaction list the companion server answers with. Loaded
//! once at startup from a fixture file or from built-in demo data.

use chrono::{TimeZone, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{Transaction, TransactionType, TransactionsResponse};

/// Read-only transaction list
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

/// Accepted fixture layouts: a bare array or a saved `GET /transactions` body
#[derive(Deserialize)]
#[serde(untagged)]
enum Fixture {
    List(Vec<Transaction>),
    Document { transactions: Vec<Transaction> },
}

impl TransactionStore {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Load a fixture file.
    ///
    /// A `balance` present in the file is ignored; it is always recomputed.
    pub fn from_fixture(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|e| FixtureError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let fixture: Fixture = serde_json::from_str(&content).map_err(|e| FixtureError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let transactions = match fixture {
            Fixture::List(transactions) => transactions,
            Fixture::Document { transactions } => transactions,
        };

        tracing::info!(
            path = %path.display(),
            count = transactions.len(),
            "Loaded transaction fixture"
        );

        Ok(Self::new(transactions))
    }

    /// Fixture when given, built-in demo data otherwise
    pub fn load(fixture: Option<&Path>) -> Result<Self, FixtureError> {
        match fixture {
            Some(path) => Self::from_fixture(path),
            None => {
                tracing::info!("No fixture configured, serving demo transactions");
                Ok(Self::demo())
            }
        }
    }

    /// Built-in sample data
    pub fn demo() -> Self {
        let day = |d: u32| Utc.with_ymd_and_hms(2020, 5, d, 0, 0, 0).single().unwrap_or_default();

        Self::new(vec![
            Transaction::new(
                "0f9d3c2e-5f51-4b9a-9a57-0b1e4c1d2a01",
                "Loan",
                1500.0,
                TransactionType::Income,
                "Others",
            )
            .created_at(day(20)),
            Transaction::new(
                "6b1e0f4a-2c7d-4e0b-8f6e-3d5a9c7b2a02",
                "Website Hosting",
                50.0,
                TransactionType::Outcome,
                "Hosting",
            )
            .created_at(day(22)),
            Transaction::new(
                "c4a2e7d1-9b3f-4c5e-a1d8-7e6f5b4c3a03",
                "Ice cream",
                3.0,
                TransactionType::Outcome,
                "Food",
            )
            .created_at(day(24)),
            Transaction::new(
                "9e8d7c6b-5a4f-4e3d-b2c1-0a9b8c7d6e04",
                "Freelance",
                2400.0,
                TransactionType::Income,
                "Work",
            )
            .created_at(day(28)),
        ])
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Response body with the balance computed over the stored list
    pub fn response(&self) -> TransactionsResponse {
        TransactionsResponse::from_transactions(self.transactions.clone())
    }
}

/// Fixture loading errors
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse fixture {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}
