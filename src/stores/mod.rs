//! Contains traits and implementations for objects that store the domain
//! [models](crate::models).
//!
//! Request handlers only ever see the traits, so tests run against
//! [MemoryStore] while production runs against [JsonFileStore] (or
//! [MemoryStore] again, when no data directory is configured).

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::{
    Error,
    models::{Expense, ExpenseId, NewExpense, Trip, TripId, TripUpdate},
};

/// Handles the creation and retrieval of trips.
///
/// Every mutating call persists the updated collection to the backing store
/// before returning, so a caller observing success may assume durability.
pub trait TripStore {
    /// Create a new trip in the store.
    ///
    /// # Errors
    /// Returns [Error::Validation] if `name` is empty or `budget` is
    /// negative.
    fn create_trip(&mut self, name: &str, budget: Option<f64>) -> Result<Trip, Error>;

    /// Apply a partial update to the trip with `id` and return the updated
    /// record.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a trip, or
    /// [Error::Validation] if an updated field is invalid.
    fn update_trip(&mut self, id: TripId, update: TripUpdate) -> Result<Trip, Error>;

    /// Remove the trip with `id` and every expense that references it, so no
    /// orphan expenses persist. Deleting an absent trip is a no-op.
    fn delete_trip(&mut self, id: TripId) -> Result<(), Error>;

    /// Retrieve the trip with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a trip.
    fn get_trip(&self, id: TripId) -> Result<Trip, Error>;

    /// Retrieve all trips in insertion order.
    fn trips(&self) -> Result<Vec<Trip>, Error>;
}

/// Handles the creation and retrieval of expenses.
pub trait ExpenseStore {
    /// Create a new expense in the store.
    ///
    /// The `trip_id` in `new_expense` is not checked against the trip
    /// collection; see [NewExpense].
    ///
    /// # Errors
    /// Returns [Error::Validation] if the amount is not positive or the
    /// person is blank.
    fn create_expense(&mut self, new_expense: NewExpense) -> Result<Expense, Error>;

    /// Remove the expense with `id`. Deleting an absent expense is a no-op.
    fn delete_expense(&mut self, id: ExpenseId) -> Result<(), Error>;

    /// Retrieve expenses in insertion order, filtered to one trip when
    /// `trip_id` is given.
    fn expenses(&self, trip_id: Option<TripId>) -> Result<Vec<Expense>, Error>;
}
