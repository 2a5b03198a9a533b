//! The endpoint for deleting an expense.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    AppState, Error,
    models::ExpenseId,
    stores::{ExpenseStore, TripStore},
};

/// Delete the expense. Deleting an absent expense is a no-op, so repeated
/// deletes succeed.
pub async fn delete_expense_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<StatusCode, Error>
where
    S: TripStore + ExpenseStore + Send + 'static,
{
    state.store.lock().unwrap().delete_expense(expense_id)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod delete_expense_endpoint_tests {
    use axum::{
        Router,
        http::StatusCode,
        routing::{delete, get},
    };
    use axum_test::TestServer;

    use crate::{
        AppState,
        endpoints::{EXPENSE, EXPENSES, format_endpoint},
        expense::list_expenses_endpoint,
        models::{Expense, ExpenseId, NewExpense, TripId},
        stores::{ExpenseStore, MemoryStore},
    };

    use super::delete_expense_endpoint;

    fn new_test_server(store: MemoryStore) -> TestServer {
        let app = Router::new()
            .route(EXPENSE, delete(delete_expense_endpoint::<MemoryStore>))
            .route(EXPENSES, get(list_expenses_endpoint::<MemoryStore>))
            .with_state(AppState::new(store));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn deleting_an_expense_removes_it_from_listings() {
        let mut store = MemoryStore::new();
        let expense = store
            .create_expense(NewExpense {
                trip_id: TripId::random(),
                amount: 100.0,
                category: "food".to_owned(),
                person: "Asha".to_owned(),
                description: None,
                image: None,
            })
            .unwrap();
        let server = new_test_server(store);

        let response = server.delete(&format_endpoint(EXPENSE, expense.id)).await;
        response.assert_status(StatusCode::NO_CONTENT);

        let expenses: Vec<Expense> = server.get(EXPENSES).await.json();
        assert!(expenses.is_empty());
    }

    #[tokio::test]
    async fn deleting_an_absent_expense_succeeds() {
        let server = new_test_server(MemoryStore::new());

        let response = server
            .delete(&format_endpoint(EXPENSE, ExpenseId::random()))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
    }
}
