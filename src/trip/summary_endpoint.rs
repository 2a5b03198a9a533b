//! The endpoint for the derived spending summary of a trip.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    models::TripId,
    stores::{ExpenseStore, TripStore},
    summary::{Summary, summarize},
};

/// Compute the spending summary for the trip from its current expenses.
///
/// The summary is never stored; it is derived on every request.
///
/// # Errors
/// Returns [Error::NotFound] if the trip does not exist.
pub async fn trip_summary_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(trip_id): Path<TripId>,
) -> Result<Json<Summary>, Error>
where
    S: TripStore + ExpenseStore + Send + 'static,
{
    let store = state.store.lock().unwrap();
    let trip = store.get_trip(trip_id)?;
    let expenses = store.expenses(Some(trip_id))?;

    Ok(Json(summarize(&trip, &expenses)))
}
