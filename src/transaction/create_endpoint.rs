//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    category::is_known_category,
    database_id::TransactionId,
    transaction::{NewTransaction, TransactionStore},
};

/// The response body for a newly created transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTransaction {
    /// The ID assigned to the new transaction.
    pub id: TransactionId,
}

/// A route handler for creating a new transaction, responds with the new ID.
///
/// The category vocabulary is advisory only, an unknown category is logged
/// and stored anyway.
pub async fn create_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Json(new_transaction): Json<NewTransaction>,
) -> Result<Json<CreatedTransaction>, Error>
where
    S: TransactionStore,
{
    if !is_known_category(new_transaction.transaction_type, &new_transaction.category) {
        tracing::warn!(
            "Creating {} transaction with unrecognised category \"{}\"",
            new_transaction.transaction_type,
            new_transaction.category
        );
    }

    let id = state.transaction_store.create(new_transaction)?;
    tracing::debug!("Created transaction {id}");

    Ok(Json(CreatedTransaction { id }))
}
