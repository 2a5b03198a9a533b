//! A durable implementation of the store traits backed by flat JSON files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Error,
    models::{Expense, ExpenseId, NewExpense, Trip, TripId, TripUpdate},
    stores::{ExpenseStore, TripStore},
};

const TRIPS_FILE: &str = "trips.json";
const EXPENSES_FILE: &str = "expenses.json";

/// Holds the trip and expense collections in memory and mirrors them to two
/// JSON files in a data directory.
///
/// Each collection is an array of flat records whose keys match the model
/// field names. A mutation rewrites the affected file in full before
/// returning, so a successful call implies the data is on disk; a failed
/// write rolls the in-memory collection back, so reads never show a record
/// that was not persisted. There is no partial-write guard: a crash
/// mid-write can corrupt the file. The tracker runs single-writer, which is
/// the trade-off this store accepts.
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    trips: Vec<Trip>,
    expenses: Vec<Expense>,
}

impl JsonFileStore {
    /// Open the store in `data_dir`, creating the directory if necessary and
    /// loading any collections already on disk. A missing collection file is
    /// treated as an empty collection.
    ///
    /// # Errors
    /// Returns [Error::Io] if the directory or files cannot be read, or
    /// [Error::Serialization] if a collection file holds invalid JSON.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, Error> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;

        let trips = load_collection(&data_dir.join(TRIPS_FILE))?;
        let expenses = load_collection(&data_dir.join(EXPENSES_FILE))?;

        tracing::info!(
            "Loaded {} trip(s) and {} expense(s) from {}",
            trips.len(),
            expenses.len(),
            data_dir.display()
        );

        Ok(Self {
            data_dir,
            trips,
            expenses,
        })
    }

    fn persist_trips(&self) -> Result<(), Error> {
        write_collection(&self.data_dir.join(TRIPS_FILE), &self.trips)
    }

    fn persist_expenses(&self) -> Result<(), Error> {
        write_collection(&self.data_dir.join(EXPENSES_FILE), &self.expenses)
    }
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Error> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let text = fs::read_to_string(path)?;
    let records = serde_json::from_str(&text)?;

    Ok(records)
}

fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<(), Error> {
    let text = serde_json::to_string_pretty(records)?;
    fs::write(path, text)?;

    Ok(())
}

impl TripStore for JsonFileStore {
    fn create_trip(&mut self, name: &str, budget: Option<f64>) -> Result<Trip, Error> {
        let trip = Trip::new(name, budget)?;
        self.trips.push(trip.clone());

        // Roll back so a failed write is not visible in later reads.
        if let Err(error) = self.persist_trips() {
            self.trips.pop();
            return Err(error);
        }

        Ok(trip)
    }

    fn update_trip(&mut self, id: TripId, update: TripUpdate) -> Result<Trip, Error> {
        let index = self
            .trips
            .iter()
            .position(|trip| trip.id == id)
            .ok_or(Error::NotFound)?;

        let mut updated = self.trips[index].clone();
        updated.apply(update)?;

        let previous = std::mem::replace(&mut self.trips[index], updated.clone());
        if let Err(error) = self.persist_trips() {
            self.trips[index] = previous;
            return Err(error);
        }

        Ok(updated)
    }

    fn delete_trip(&mut self, id: TripId) -> Result<(), Error> {
        let previous_trips = self.trips.clone();
        let previous_expenses = self.expenses.clone();

        self.trips.retain(|trip| trip.id != id);
        self.expenses.retain(|expense| expense.trip_id != id);

        // Only rewrite the files that changed.
        if self.trips.len() != previous_trips.len() {
            if let Err(error) = self.persist_trips() {
                self.trips = previous_trips;
                self.expenses = previous_expenses;
                return Err(error);
            }
        }

        if self.expenses.len() != previous_expenses.len() {
            if let Err(error) = self.persist_expenses() {
                self.expenses = previous_expenses;
                return Err(error);
            }
        }

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

impl ExpenseStore for JsonFileStore {
    fn create_expense(&mut self, new_expense: NewExpense) -> Result<Expense, Error> {
        let expense = Expense::new(new_expense)?;
        self.expenses.push(expense.clone());

        if let Err(error) = self.persist_expenses() {
            self.expenses.pop();
            return Err(error);
        }

        Ok(expense)
    }

    fn delete_expense(&mut self, id: ExpenseId) -> Result<(), Error> {
        let previous_expenses = self.expenses.clone();
        self.expenses.retain(|expense| expense.id != id);

        if self.expenses.len() != previous_expenses.len() {
            if let Err(error) = self.persist_expenses() {
                self.expenses = previous_expenses;
                return Err(error);
            }
        }

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
