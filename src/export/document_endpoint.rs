//! The endpoint for downloading a trip's expenses as a PDF document.

use axum::extract::{Path, State};

use crate::{
    AppState, Error,
    export::{Export, render_document, suggested_filename},
    models::TripId,
    stores::{ExpenseStore, TripStore},
    summary::summarize,
};

const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Render the trip's expenses as a PDF report and return it as a file
/// download.
///
/// # Errors
/// Returns [Error::NotFound] if the trip does not exist, or [Error::NoData]
/// if it has no expenses.
pub async fn document_export_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(trip_id): Path<TripId>,
) -> Result<Export, Error>
where
    S: TripStore + ExpenseStore + Send + 'static,
{
    let store = state.store.lock().unwrap();
    let trip = store.get_trip(trip_id)?;
    let expenses = store.expenses(Some(trip_id))?;
    let summary = summarize(&trip, &expenses);

    let bytes = render_document(&trip, &expenses, &summary)?;

    Ok(Export {
        filename: suggested_filename(&trip.name, "pdf")?,
        content_type: PDF_CONTENT_TYPE,
        bytes,
    })
}

#[cfg(test)]
mod document_endpoint_tests {
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;

    use crate::{
        AppState,
        endpoints::{DOCUMENT_EXPORT, format_endpoint},
        models::{NewExpense, TripId},
        stores::{ExpenseStore, MemoryStore, TripStore},
    };

    use super::{PDF_CONTENT_TYPE, document_export_endpoint};

    fn new_test_server(store: MemoryStore) -> TestServer {
        let app = Router::new()
            .route(DOCUMENT_EXPORT, get(document_export_endpoint::<MemoryStore>))
            .with_state(AppState::new(store));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn exporting_a_trip_returns_a_pdf_attachment() {
        let mut store = MemoryStore::new();
        let trip = store.create_trip("Goa", Some(10_000.0)).unwrap();
        store
            .create_expense(NewExpense {
                trip_id: trip.id,
                amount: 1500.0,
                category: "food".to_owned(),
                person: "Asha".to_owned(),
                description: Some("Beach shack lunch".to_owned()),
                image: None,
            })
            .unwrap();
        let server = new_test_server(store);

        let response = server.get(&format_endpoint(DOCUMENT_EXPORT, trip.id)).await;

        response.assert_status_ok();
        assert_eq!(
            response.header("content-type").to_str().unwrap(),
            PDF_CONTENT_TYPE
        );
        let disposition = response.header("content-disposition");
        let disposition = disposition.to_str().unwrap();
        assert!(disposition.starts_with("attachment; filename=\"Goa_"));
        assert!(disposition.ends_with(".pdf\""));
        assert_eq!(&response.as_bytes()[..5], b"%PDF-");
    }

    #[tokio::test]
    async fn exporting_an_unknown_trip_returns_not_found() {
        let server = new_test_server(MemoryStore::new());

        let response = server
            .get(&format_endpoint(DOCUMENT_EXPORT, TripId::random()))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn exporting_a_trip_with_no_expenses_returns_bad_request() {
        let mut store = MemoryStore::new();
        let trip = store.create_trip("Goa", None).unwrap();
        let server = new_test_server(store);

        let response = server.get(&format_endpoint(DOCUMENT_EXPORT, trip.id)).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
