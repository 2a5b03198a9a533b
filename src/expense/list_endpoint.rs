//! The endpoint for listing expenses.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    models::{Expense, TripId},
    stores::{ExpenseStore, TripStore},
};

/// The query parameters accepted when listing expenses.
#[derive(Debug, Default, Deserialize)]
pub struct ListExpensesQuery {
    /// Restrict the listing to one trip's expenses.
    #[serde(default)]
    pub trip_id: Option<TripId>,
}

/// Return expenses in insertion order, filtered to one trip when `trip_id`
/// is given in the query string.
pub async fn list_expenses_endpoint<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<ListExpensesQuery>,
) -> Result<Json<Vec<Expense>>, Error>
where
    S: TripStore + ExpenseStore + Send + 'static,
{
    let expenses = state.store.lock().unwrap().expenses(query.trip_id)?;

    Ok(Json(expenses))
}
