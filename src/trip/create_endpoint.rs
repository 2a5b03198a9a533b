//! The endpoint for creating a trip.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::{
    AppState, Error,
    models::Trip,
    stores::{ExpenseStore, TripStore},
};

/// The request body for creating a trip.
#[derive(Debug, Deserialize)]
pub struct CreateTripRequest {
    /// The display name of the trip.
    pub name: String,
    /// The spending budget, or `None` for an unbounded trip.
    #[serde(default)]
    pub budget: Option<f64>,
}

/// Create a trip and return the stored record with its generated ID.
///
/// # Errors
/// Returns [Error::Validation] if the name is blank or the budget is
/// negative.
pub async fn create_trip_endpoint<S>(
    State(state): State<AppState<S>>,
    Json(request): Json<CreateTripRequest>,
) -> Result<(StatusCode, Json<Trip>), Error>
where
    S: TripStore + ExpenseStore + Send + 'static,
{
    let trip = state
        .store
        .lock()
        .unwrap()
        .create_trip(&request.name, request.budget)?;

    Ok((StatusCode::CREATED, Json(trip)))
}

#[cfg(test)]
mod create_trip_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{AppState, endpoints::TRIPS, models::Trip, stores::MemoryStore};

    use super::create_trip_endpoint;

    fn new_test_server() -> TestServer {
        let app = Router::new()
            .route(TRIPS, post(create_trip_endpoint::<MemoryStore>))
            .with_state(AppState::new(MemoryStore::new()));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn creating_a_trip_returns_the_stored_record() {
        let server = new_test_server();

        let response = server
            .post(TRIPS)
            .json(&json!({"name": "Goa", "budget": 10000.0}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let trip: Trip = response.json();
        assert_eq!(trip.name, "Goa");
        assert_eq!(trip.budget, Some(10000.0));
    }

    #[tokio::test]
    async fn budget_may_be_omitted() {
        let server = new_test_server();

        let response = server.post(TRIPS).json(&json!({"name": "Roadtrip"})).await;

        response.assert_status(StatusCode::CREATED);
        let trip: Trip = response.json();
        assert_eq!(trip.budget, None);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let server = new_test_server();

        let response = server.post(TRIPS).json(&json!({"name": "   "})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn negative_budget_is_rejected() {
        let server = new_test_server();

        let response = server
            .post(TRIPS)
            .json(&json!({"name": "Goa", "budget": -1.0}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
