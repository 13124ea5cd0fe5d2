//! Defines the transaction store trait and its SQLite implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error,
    database_id::TransactionId,
    transaction::core::{NewTransaction, Transaction, map_transaction_row},
};

/// Handles the persistence of transactions.
///
/// There is deliberately no update operation: transactions are created once
/// and can only be deleted afterwards.
pub trait TransactionStore {
    /// Retrieve every transaction, most recent date first.
    fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Store a new transaction and return its newly assigned ID.
    fn create(&self, transaction: NewTransaction) -> Result<TransactionId, Error>;

    /// Remove the transaction with `id`.
    ///
    /// Implementers must treat a missing `id` as success.
    fn delete(&self, id: TransactionId) -> Result<(), Error>;
}

/// Stores transactions in a SQLite database.
///
/// The transaction table must exist before the store is used, see
/// [initialize_db](crate::initialize_db).
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire the database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Retrieve all transactions sorted by date in descending order.
    ///
    /// Transactions on the same date are ordered from most to least recently
    /// created.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        self.connection()?
            .prepare(
                "SELECT id, type, category, amount, date, description FROM \"transaction\"
                 ORDER BY date DESC, id DESC",
            )?
            .query_map([], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Insert a new transaction without validating its contents.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    fn create(&self, transaction: NewTransaction) -> Result<TransactionId, Error> {
        let id = self
            .connection()?
            .prepare(
                "INSERT INTO \"transaction\" (type, category, amount, date, description)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id",
            )?
            .query_row(
                (
                    transaction.transaction_type,
                    transaction.category,
                    transaction.amount,
                    transaction.date,
                    transaction.description,
                ),
                |row| row.get(0),
            )?;

        Ok(id)
    }

    /// Delete a transaction, doing nothing if `id` does not exist.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] if there is an SQL error.
    fn delete(&self, id: TransactionId) -> Result<(), Error> {
        let rows_affected = self.connection()?.execute(
            "DELETE FROM \"transaction\" WHERE id = :id",
            &[(":id", &id)],
        )?;

        if rows_affected == 0 {
            tracing::debug!("Tried to delete transaction {id} which does not exist");
        }

        Ok(())
    }
}
