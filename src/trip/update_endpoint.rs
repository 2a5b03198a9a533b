//! The endpoint for partially updating a trip.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    models::{Trip, TripId, TripUpdate},
    stores::{ExpenseStore, TripStore},
};

/// Apply a partial update to the trip and return the updated record.
///
/// Fields absent from the body are left untouched; an explicit
/// `"budget": null` clears the budget.
///
/// # Errors
/// Returns [Error::NotFound] if the trip does not exist, or
/// [Error::Validation] if an updated field is invalid. A failed validation
/// leaves the trip unchanged.
pub async fn update_trip_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(trip_id): Path<TripId>,
    Json(update): Json<TripUpdate>,
) -> Result<Json<Trip>, Error>
where
    S: TripStore + ExpenseStore + Send + 'static,
{
    let trip = state.store.lock().unwrap().update_trip(trip_id, update)?;

    Ok(Json(trip))
}

#[cfg(test)]
mod update_trip_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::put};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        AppState,
        endpoints::{TRIP, format_endpoint},
        models::{Trip, TripId, TripStatus},
        stores::{MemoryStore, TripStore},
    };

    use super::update_trip_endpoint;

    fn new_test_server(store: MemoryStore) -> TestServer {
        let app = Router::new()
            .route(TRIP, put(update_trip_endpoint::<MemoryStore>))
            .with_state(AppState::new(store));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn updating_a_trip_changes_only_the_given_fields() {
        let mut store = MemoryStore::new();
        let trip = store.create_trip("Goa", Some(10_000.0)).unwrap();
        let server = new_test_server(store);

        let response = server
            .put(&format_endpoint(TRIP, trip.id))
            .json(&json!({"status": "completed"}))
            .await;

        response.assert_status_ok();
        let updated: Trip = response.json();
        assert_eq!(updated.status, TripStatus::Completed);
        assert_eq!(updated.name, "Goa");
        assert_eq!(updated.budget, Some(10_000.0));
    }

    #[tokio::test]
    async fn a_null_budget_clears_the_budget() {
        let mut store = MemoryStore::new();
        let trip = store.create_trip("Goa", Some(10_000.0)).unwrap();
        let server = new_test_server(store);

        let response = server
            .put(&format_endpoint(TRIP, trip.id))
            .json(&json!({"budget": null}))
            .await;

        response.assert_status_ok();
        let updated: Trip = response.json();
        assert_eq!(updated.budget, None);
    }

    #[tokio::test]
    async fn updating_an_unknown_trip_returns_not_found() {
        let server = new_test_server(MemoryStore::new());

        let response = server
            .put(&format_endpoint(TRIP, TripId::random()))
            .json(&json!({"name": "Goa"}))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn an_invalid_update_is_rejected_and_leaves_the_trip_unchanged() {
        let mut store = MemoryStore::new();
        let trip = store.create_trip("Goa", Some(10_000.0)).unwrap();
        let server = new_test_server(store);

        let response = server
            .put(&format_endpoint(TRIP, trip.id))
            .json(&json!({"name": "", "budget": 500.0}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        // An empty update returns the record, which must be untouched.
        let unchanged: Trip = server
            .put(&format_endpoint(TRIP, trip.id))
            .json(&json!({}))
            .await
            .json();
        assert_eq!(unchanged.name, "Goa");
        assert_eq!(unchanged.budget, Some(10_000.0));
    }
}
