//! Dashboard
//!
//! The financial dashboard view: one fetch of `GET /transactions`, the
//! formatting pass, and the resulting `transactions` / `balance` state.
//!
//! ## Data Flow
//!
//! 1. A [`TransactionFeed`] returns the wire document
//! 2. [`DashboardSnapshot::from_response`] formats every record
//! 3. [`Dashboard::apply`] replaces the view state
//! 4. A renderer in [`crate::render`] turns the state into cards and a table

mod error;
#[cfg(feature = "native")]
mod feed;
mod state;
mod view;

pub use error::{DashboardError, DashboardResult, FeedError};
#[cfg(feature = "native")]
pub use feed::{StaticFeed, TransactionFeed};
pub use state::Dashboard;
pub use view::{BalanceView, DashboardSnapshot, TransactionView};
