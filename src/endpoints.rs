//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/trips/{trip_id}', use
//! [format_endpoint].

/// The route to list and create trips.
pub const TRIPS: &str = "/api/trips";
/// The route to update or delete a single trip.
pub const TRIP: &str = "/api/trips/{trip_id}";
/// The route to get the derived summary for a trip.
pub const TRIP_SUMMARY: &str = "/api/trips/{trip_id}/summary";
/// The route to list and create expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to list the category labels offered when logging an expense.
pub const CATEGORIES: &str = "/api/categories";
/// The route to delete a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route to download a trip's expenses as a spreadsheet.
pub const SPREADSHEET_EXPORT: &str = "/api/trips/{trip_id}/export/spreadsheet";
/// The route to download a trip's expenses as a PDF document.
pub const DOCUMENT_EXPORT: &str = "/api/trips/{trip_id}/export/document";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/trips/{trip_id}', '{trip_id}' is
/// the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let Some(param_end) = endpoint_path[param_start..].find('}') else {
        return endpoint_path.to_owned();
    };

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_start + param_end + 1..]
    )
}
