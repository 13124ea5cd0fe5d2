//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    database_id::TransactionId,
    transaction::TransactionStore,
};

/// A route handler for deleting a transaction.
///
/// Responds with `{"success": true}` whether or not the transaction existed.
/// An ID that is not an integer cannot match any transaction, so it is
/// treated the same as a missing one.
pub async fn delete_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Value>, Error>
where
    S: TransactionStore,
{
    match transaction_id.parse::<TransactionId>() {
        Ok(id) => state.transaction_store.delete(id)?,
        Err(error) => {
            tracing::debug!("Ignoring delete for invalid transaction ID \"{transaction_id}\": {error}");
        }
    }

    Ok(Json(json!({ "success": true })))
}
