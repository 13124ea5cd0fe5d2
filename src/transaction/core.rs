//! Defines the core data models and table schema for transactions.

use std::fmt::Display;

use rusqlite::{
    Connection, Row, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::database_id::TransactionId;

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The string used for this type in JSON and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(FromSqlError::Other(
                format!("invalid transaction type \"{other}\"").into(),
            )),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are never edited after creation, only deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category, e.g. "Alimentação" or "Salário".
    pub category: String,
    /// The amount of money in major currency units.
    pub amount: f64,
    /// When the transaction happened as an ISO 8601 date, e.g. "2024-01-31".
    pub date: String,
    /// An optional note about the transaction.
    pub description: Option<String>,
}

/// The data needed to create a [Transaction].
///
/// Values are stored exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category, e.g. "Alimentação" or "Salário".
    pub category: String,
    /// The amount of money in major currency units.
    pub amount: f64,
    /// When the transaction happened as an ISO 8601 date.
    pub date: String,
    /// An optional note about the transaction.
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTransaction {
    /// Shortcut for a new income transaction with no description.
    pub fn income(category: &str, amount: f64, date: &str) -> Self {
        Self::new(TransactionType::Income, category, amount, date)
    }

    /// Shortcut for a new expense transaction with no description.
    pub fn expense(category: &str, amount: f64, date: &str) -> Self {
        Self::new(TransactionType::Expense, category, amount, date)
    }

    fn new(transaction_type: TransactionType, category: &str, amount: f64, date: &str) -> Self {
        Self {
            transaction_type,
            category: category.to_owned(),
            amount,
            date: date.to_owned(),
            description: None,
        }
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transaction table in the database.
///
/// `AUTOINCREMENT` guarantees IDs of deleted transactions are never reused.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL CHECK(type IN ('income', 'expense')),
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
///
/// Expects the columns in the order `id, type, category, amount, date, description`.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let transaction_type = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;
    let description = row.get(5)?;

    Ok(Transaction {
        id,
        transaction_type,
        category,
        amount,
        date,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod model_tests {
    use serde_json::json;

    use crate::transaction::{NewTransaction, Transaction, TransactionType};

    #[test]
    fn transaction_serializes_type_field() {
        let transaction = Transaction {
            id: 1,
            transaction_type: TransactionType::Expense,
            category: "Lazer".to_owned(),
            amount: 42.5,
            date: "2024-03-01".to_owned(),
            description: None,
        };

        let value = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "type": "expense",
                "category": "Lazer",
                "amount": 42.5,
                "date": "2024-03-01",
                "description": null,
            })
        );
    }

    #[test]
    fn new_transaction_description_is_optional() {
        let new_transaction: NewTransaction = serde_json::from_value(json!({
            "type": "income",
            "category": "Salário",
            "amount": 1000,
            "date": "2024-01-01",
        }))
        .unwrap();

        assert_eq!(
            new_transaction,
            NewTransaction::income("Salário", 1000.0, "2024-01-01")
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result = serde_json::from_value::<NewTransaction>(json!({
            "type": "transfer",
            "category": "Outros",
            "amount": 1,
            "date": "2024-01-01",
        }));

        assert!(result.is_err());
    }
}
