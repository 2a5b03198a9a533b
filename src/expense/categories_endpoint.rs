//! The endpoint for the expense category labels.

use axum::Json;

use crate::models::CATEGORIES;

/// Return the category labels clients should offer when logging an expense.
///
/// The store accepts free-text categories, so this list is advisory rather
/// than enforced.
pub async fn list_categories_endpoint() -> Json<[&'static str; 6]> {
    Json(CATEGORIES)
}
