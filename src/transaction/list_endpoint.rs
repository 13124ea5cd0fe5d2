//! Defines the endpoint for listing all transactions.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    transaction::{Transaction, TransactionStore},
};

/// A route handler that returns every transaction as JSON, most recent date first.
pub async fn get_transactions_endpoint<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    S: TransactionStore,
{
    let transactions = state.transaction_store.list()?;

    Ok(Json(transactions))
}
