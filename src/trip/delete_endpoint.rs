//! The endpoint for deleting a trip.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState, Error,
    models::TripId,
    stores::{ExpenseStore, TripStore},
};

/// Delete the trip and every expense logged against it.
///
/// Deleting a trip that does not exist is a no-op, so repeated deletes
/// succeed.
pub async fn delete_trip_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(trip_id): Path<TripId>,
) -> Result<StatusCode, Error>
where
    S: TripStore + ExpenseStore + Send + 'static,
{
    state.store.lock().unwrap().delete_trip(trip_id)?;

    Ok(StatusCode::NO_CONTENT)
}
