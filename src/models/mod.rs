//! Wire Model
//!
//! Types exchanged over `GET /transactions`:
//!
//! ```json
//! {
//!   "transactions": [
//!     { "id": "...", "title": "Loan", "value": 1500, "type": "income",
//!       "category": { "title": "Others" }, "created_at": "2020-05-24T00:00:00.000Z" }
//!   ],
//!   "balance": { "income": "1500", "outcome": "0", "total": "1500" }
//! }
//! ```

pub mod codec;
mod balance;
mod transaction;

pub use balance::{Balance, TransactionsResponse};
pub use transaction::{Category, Transaction, TransactionType};
