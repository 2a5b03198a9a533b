//! Defines the routes for the API and what functions handle them.

use axum::{
    Router, middleware,
    routing::{delete, get, put},
};

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, list_categories_endpoint,
        list_expenses_endpoint,
    },
    export::{document_export_endpoint, spreadsheet_export_endpoint},
    logging_middleware,
    stores::{ExpenseStore, TripStore},
    trip::{
        create_trip_endpoint, delete_trip_endpoint, list_trips_endpoint, trip_summary_endpoint,
        update_trip_endpoint,
    },
};

/// Return the router with all the routes of the application.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: TripStore + ExpenseStore + Send + 'static,
{
    Router::new()
        .route(
            endpoints::TRIPS,
            get(list_trips_endpoint::<S>).post(create_trip_endpoint::<S>),
        )
        .route(
            endpoints::TRIP,
            put(update_trip_endpoint::<S>).delete(delete_trip_endpoint::<S>),
        )
        .route(endpoints::TRIP_SUMMARY, get(trip_summary_endpoint::<S>))
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint::<S>).post(create_expense_endpoint::<S>),
        )
        .route(endpoints::EXPENSE, delete(delete_expense_endpoint::<S>))
        .route(endpoints::CATEGORIES, get(list_categories_endpoint))
        .route(
            endpoints::SPREADSHEET_EXPORT,
            get(spreadsheet_export_endpoint::<S>),
        )
        .route(
            endpoints::DOCUMENT_EXPORT,
            get(document_export_endpoint::<S>),
        )
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod routing_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{
        AppState,
        endpoints::{
            EXPENSE, EXPENSES, SPREADSHEET_EXPORT, TRIP, TRIP_SUMMARY, TRIPS, format_endpoint,
        },
        models::{Expense, Trip},
        stores::MemoryStore,
    };

    use super::build_router;

    fn new_test_server() -> TestServer {
        let app = build_router(AppState::new(MemoryStore::new()));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn a_full_trip_lifecycle_works_end_to_end() {
        let server = new_test_server();

        // Create a trip and log two expenses against it.
        let trip: Trip = server
            .post(TRIPS)
            .json(&json!({"name": "Goa", "budget": 10000.0}))
            .await
            .json();

        let lunch: Expense = server
            .post(EXPENSES)
            .json(&json!({
                "trip_id": trip.id,
                "amount": 1500.0,
                "category": "food",
                "person": "Asha",
            }))
            .await
            .json();
        server
            .post(EXPENSES)
            .json(&json!({
                "trip_id": trip.id,
                "amount": 2500.0,
                "category": "travel",
                "person": "Ravi",
            }))
            .await;

        // The summary reflects both expenses.
        let summary: Value = server
            .get(&format_endpoint(TRIP_SUMMARY, trip.id))
            .await
            .json();
        assert_eq!(summary["total_spent"], json!(4000.0));
        assert_eq!(summary["remaining"], json!(6000.0));
        assert_eq!(summary["expense_count"], json!(2));

        // Deleting one expense updates the summary.
        server.delete(&format_endpoint(EXPENSE, lunch.id)).await;
        let summary: Value = server
            .get(&format_endpoint(TRIP_SUMMARY, trip.id))
            .await
            .json();
        assert_eq!(summary["total_spent"], json!(2500.0));

        // Deleting the trip cascades to the remaining expense.
        let response = server.delete(&format_endpoint(TRIP, trip.id)).await;
        response.assert_status(StatusCode::NO_CONTENT);

        let trips: Vec<Trip> = server.get(TRIPS).await.json();
        assert!(trips.is_empty());
        let expenses: Vec<Expense> = server.get(EXPENSES).await.json();
        assert!(expenses.is_empty());
    }

    #[tokio::test]
    async fn malformed_bodies_are_rejected_before_reaching_the_store() {
        let server = new_test_server();

        let response = server
            .post(EXPENSES)
            .json(&json!({"amount": "not a number"}))
            .await;

        assert!(response.status_code().is_client_error());
        let trips: Vec<Expense> = server.get(EXPENSES).await.json();
        assert!(trips.is_empty());
    }

    #[tokio::test]
    async fn errors_are_returned_as_json_bodies() {
        let server = new_test_server();

        let response = server.post(TRIPS).json(&json!({"name": ""})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn binary_exports_pass_through_the_logging_middleware_intact() {
        let server = new_test_server();
        let trip: Trip = server
            .post(TRIPS)
            .json(&json!({"name": "Goa", "budget": 10000.0}))
            .await
            .json();
        server
            .post(EXPENSES)
            .json(&json!({
                "trip_id": trip.id,
                "amount": 1500.0,
                "category": "food",
                "person": "Asha",
            }))
            .await;

        let response = server
            .get(&format_endpoint(SPREADSHEET_EXPORT, trip.id))
            .await;

        response.assert_status_ok();
        assert_eq!(&response.as_bytes()[..2], b"PK");
    }

    #[tokio::test]
    async fn updating_a_trip_through_the_router_persists() {
        let server = new_test_server();
        let trip: Trip = server
            .post(TRIPS)
            .json(&json!({"name": "Goa"}))
            .await
            .json();

        server
            .put(&format_endpoint(TRIP, trip.id))
            .json(&json!({"name": "Goa New Year", "budget": 12000.0}))
            .await;

        let trips: Vec<Trip> = server.get(TRIPS).await.json();
        assert_eq!(trips[0].name, "Goa New Year");
        assert_eq!(trips[0].budget, Some(12000.0));
    }
}
