//! This module defines the domain data types.

mod expense;
mod trip;

pub use expense::{CATEGORIES, Expense, ExpenseId, NewExpense};
pub use trip::{Trip, TripId, TripStatus, TripUpdate};
