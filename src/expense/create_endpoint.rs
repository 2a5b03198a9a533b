//! The endpoint for logging an expense.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    models::{Expense, NewExpense},
    stores::{ExpenseStore, TripStore},
};

/// Log an expense and return the stored record, stamped with the current
/// date and time.
///
/// The trip ID is not checked against the trip collection, so an expense can
/// be logged before its trip is created.
///
/// # Errors
/// Returns [Error::Validation] if the amount is not positive or the person
/// is blank.
pub async fn create_expense_endpoint<S>(
    State(state): State<AppState<S>>,
    Json(new_expense): Json<NewExpense>,
) -> Result<(StatusCode, Json<Expense>), Error>
where
    S: TripStore + ExpenseStore + Send + 'static,
{
    let expense = state.store.lock().unwrap().create_expense(new_expense)?;

    Ok((StatusCode::CREATED, Json(expense)))
}

#[cfg(test)]
mod create_expense_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        AppState,
        endpoints::EXPENSES,
        models::{Expense, TripId},
        stores::MemoryStore,
    };

    use super::create_expense_endpoint;

    fn new_test_server() -> TestServer {
        let app = Router::new()
            .route(EXPENSES, post(create_expense_endpoint::<MemoryStore>))
            .with_state(AppState::new(MemoryStore::new()));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn logging_an_expense_returns_the_stored_record() {
        let server = new_test_server();
        let trip_id = TripId::random();

        let response = server
            .post(EXPENSES)
            .json(&json!({
                "trip_id": trip_id,
                "amount": 1500.0,
                "category": "food",
                "person": "Asha",
                "description": "Beach shack lunch",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let expense: Expense = response.json();
        assert_eq!(expense.trip_id, trip_id);
        assert_eq!(expense.amount, 1500.0);
        assert_eq!(expense.person, "Asha");
        assert_eq!(expense.description.as_deref(), Some("Beach shack lunch"));
    }

    #[tokio::test]
    async fn description_and_image_may_be_omitted() {
        let server = new_test_server();

        let response = server
            .post(EXPENSES)
            .json(&json!({
                "trip_id": TripId::random(),
                "amount": 100.0,
                "category": "other",
                "person": "Ravi",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let expense: Expense = response.json();
        assert_eq!(expense.description, None);
        assert_eq!(expense.image, None);
    }

    #[tokio::test]
    async fn a_zero_amount_is_rejected() {
        let server = new_test_server();

        let response = server
            .post(EXPENSES)
            .json(&json!({
                "trip_id": TripId::random(),
                "amount": 0.0,
                "category": "food",
                "person": "Asha",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn a_blank_person_is_rejected() {
        let server = new_test_server();

        let response = server
            .post(EXPENSES)
            .json(&json!({
                "trip_id": TripId::random(),
                "amount": 100.0,
                "category": "food",
                "person": "  ",
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
