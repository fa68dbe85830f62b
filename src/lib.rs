//! # Finboard
//!
//! A financial dashboard: fetch the transaction list and balance summary
//! from `GET /transactions`, format amounts and dates for display, and
//! render three balance cards and a transaction table.
//!
//! ## Modules
//!
//! - [`models`]: Wire types for the transactions endpoint
//! - [`format`]: Currency (pt-BR / BRL) and date formatting
//! - [`dashboard`]: View records and the dashboard state
//! - [`render`]: HTML and terminal renderers
//! - `client`: reqwest client for the transactions API (native)
//! - `api`: Companion Axum server (native)
//! - `config`, `logging`: Ambient setup for the binaries (native)
//!
//! The `native` feature (on by default) carries the client, server, CLI
//! and config stack. The browser UI builds this crate without it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use finboard::client::{ClientConfig, FinancesClient};
//! use finboard::dashboard::Dashboard;
//! use finboard::render::text::{render, TextOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FinancesClient::new(ClientConfig::new("http://localhost:3333"))?;
//!
//!     // One fetch; a failure leaves the dashboard empty
//!     let dashboard = Dashboard::mount(&client).await;
//!
//!     print!("{}", render(&dashboard, &TextOptions::default()));
//!     Ok(())
//! }
//! ```

pub mod dashboard;
pub mod format;
pub mod models;
pub mod render;

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use models::{Balance, Category, Transaction, TransactionType, TransactionsResponse};

pub use format::{format_date, format_value, verify_value, CurrencyFormatter};

pub use dashboard::{
    BalanceView, Dashboard, DashboardError, DashboardSnapshot, FeedError, TransactionView,
};

#[cfg(feature = "native")]
pub use dashboard::{StaticFeed, TransactionFeed};

#[cfg(feature = "native")]
pub use client::{ClientConfig, FinancesClient};

#[cfg(feature = "native")]
pub use api::{build_router, serve, ApiError, AppState, TransactionStore};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
