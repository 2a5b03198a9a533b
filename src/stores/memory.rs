//! A transient, in-process implementation of the store traits.

use crate::{
    Error,
    models::{Expense, ExpenseId, NewExpense, Trip, TripId, TripUpdate},
    stores::{ExpenseStore, TripStore},
};

/// Holds the trip and expense collections in process memory.
///
/// Data is lost when the process exits. This is the backend the server runs
/// with when no data directory is configured, and the backend the tests
/// substitute for the file-backed store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    trips: Vec<Trip>,
    expenses: Vec<Expense>,
}

impl MemoryStore {
    /// Create a store with empty collections.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TripStore for MemoryStore {
    fn create_trip(&mut self, name: &str, budget: Option<f64>) -> Result<Trip, Error> {
        let trip = Trip::new(name, budget)?;
        self.trips.push(trip.clone());

        Ok(trip)
    }

    fn update_trip(&mut self, id: TripId, update: TripUpdate) -> Result<Trip, Error> {
        let trip = self
            .trips
            .iter_mut()
            .find(|trip| trip.id == id)
            .ok_or(Error::NotFound)?;

        trip.apply(update)?;

        Ok(trip.clone())
    }

    fn delete_trip(&mut self, id: TripId) -> Result<(), Error> {
        self.trips.retain(|trip| trip.id != id);
        self.expenses.retain(|expense| expense.trip_id != id);

        Ok(())
    }

    fn get_trip(&self, id: TripId) -> Result<Trip, Error> {
        self.trips
            .iter()
            .find(|trip| trip.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn trips(&self) -> Result<Vec<Trip>, Error> {
        Ok(self.trips.clone())
    }
}

impl ExpenseStore for MemoryStore {
    fn create_expense(&mut self, new_expense: NewExpense) -> Result<Expense, Error> {
        let expense = Expense::new(new_expense)?;
        self.expenses.push(expense.clone());

        Ok(expense)
    }

    fn delete_expense(&mut self, id: ExpenseId) -> Result<(), Error> {
        self.expenses.retain(|expense| expense.id != id);

        Ok(())
    }

    fn expenses(&self, trip_id: Option<TripId>) -> Result<Vec<Expense>, Error> {
        Ok(self
            .expenses
            .iter()
            .filter(|expense| trip_id.is_none_or(|trip_id| expense.trip_id == trip_id))
            .cloned()
            .collect())
    }
}
