//! API access for the dashboard

pub mod client;

pub use client::fetch_transactions;
