//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` for creating transactions
//! - The `TransactionStore` trait and its SQLite implementation
//! - Route handlers for the transaction API

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod store;

pub use self::core::{NewTransaction, Transaction, TransactionType, create_transaction_table};
pub use create_endpoint::{CreatedTransaction, create_transaction_endpoint};
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::get_transactions_endpoint;
pub use store::{SQLiteTransactionStore, TransactionStore};
