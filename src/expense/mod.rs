//! Request handlers for creating, listing and deleting expenses.

mod categories_endpoint;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;

pub(crate) use categories_endpoint::list_categories_endpoint;
pub(crate) use create_endpoint::create_expense_endpoint;
pub(crate) use delete_endpoint::delete_expense_endpoint;
pub(crate) use list_endpoint::list_expenses_endpoint;
