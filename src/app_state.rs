//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize, transaction::SQLiteTransactionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<S> {
    /// The store used by the transaction endpoints.
    pub transaction_store: S,
}

impl<S> AppState<S> {
    /// Create a new [AppState] around `transaction_store`.
    pub fn new(transaction_store: S) -> Self {
        Self { transaction_store }
    }
}

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLiteAppState = AppState<SQLiteTransactionStore>;

/// Create an [AppState] with a SQLite database connection.
///
/// This function will initialize the database by adding the tables for the
/// domain models if they do not exist yet.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(db_connection: Connection) -> Result<SQLiteAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(SQLiteTransactionStore::new(connection)))
}
