//! The endpoint for listing all trips.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    models::Trip,
    stores::{ExpenseStore, TripStore},
};

/// Return every trip in insertion order.
pub async fn list_trips_endpoint<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Trip>>, Error>
where
    S: TripStore + ExpenseStore + Send + 'static,
{
    let trips = state.store.lock().unwrap().trips()?;

    Ok(Json(trips))
}
