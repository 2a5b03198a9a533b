//! The endpoint for downloading a trip's expenses as an xlsx spreadsheet.

use axum::extract::{Path, State};

use crate::{
    AppState, Error,
    export::{Export, render_spreadsheet, suggested_filename},
    models::TripId,
    stores::{ExpenseStore, TripStore},
    summary::summarize,
};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Render the trip's expenses as an xlsx workbook and return it as a file
/// download.
///
/// # Errors
/// Returns [Error::NotFound] if the trip does not exist, or [Error::NoData]
/// if it has no expenses.
pub async fn spreadsheet_export_endpoint<S>(
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

    let bytes = render_spreadsheet(&trip, &expenses, &summary)?;

    Ok(Export {
        filename: suggested_filename(&trip.name, "xlsx")?,
        content_type: XLSX_CONTENT_TYPE,
        bytes,
    })
}
