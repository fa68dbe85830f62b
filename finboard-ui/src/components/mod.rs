//! UI Components

pub mod balance_card;
pub mod header;
pub mod transaction_table;

pub use balance_card::BalanceCard;
pub use header::Header;
pub use transaction_table::TransactionTable;
