//! This file defines the type `Expense`, a single dated monetary entry
//! attributed to a person and category within a trip.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, Time};
use uuid::Uuid;

use crate::{Error, models::TripId};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(iso_time, Time, "[hour]:[minute]:[second]");

/// The category labels offered by the UI, served from the categories
/// endpoint.
///
/// Categories are stored as free text; this list is not enforced by the
/// store.
pub const CATEGORIES: [&str; 6] = [
    "food",
    "travel",
    "accommodation",
    "entertainment",
    "shopping",
    "other",
];

/// The opaque identifier for an [Expense].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Generate a fresh, random expense ID.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single expense logged against a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The unique ID of the expense, assigned at creation.
    pub id: ExpenseId,
    /// The trip this expense belongs to.
    ///
    /// The referenced trip is not checked for existence at creation time,
    /// see [NewExpense].
    pub trip_id: TripId,
    /// How much money was spent. Always greater than zero.
    pub amount: f64,
    /// What kind of expense this was. See [CATEGORIES].
    pub category: String,
    /// Who paid. Never blank; used as the grouping key for the per-person
    /// breakdown.
    pub person: String,
    /// Free-text note about the expense.
    pub description: Option<String>,
    /// An opaque encoded receipt photo (e.g. a data URL), stored verbatim
    /// and never decoded by the server.
    pub image: Option<String>,
    /// The day the expense was logged, stamped from the server clock.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// The time of day the expense was logged, stamped from the server
    /// clock.
    #[serde(with = "iso_time")]
    pub time: Time,
}

impl Expense {
    /// Create a new expense with a fresh ID and `date`/`time` stamped from
    /// the server clock.
    ///
    /// # Errors
    /// Returns [Error::Validation] if the amount is zero, negative or not a
    /// finite number, or if `person` is blank after trimming.
    pub fn new(new_expense: NewExpense) -> Result<Self, Error> {
        if !new_expense.amount.is_finite() || new_expense.amount <= 0.0 {
            return Err(Error::Validation(
                "amount must be greater than zero".to_owned(),
            ));
        }

        let person = new_expense.person.trim();

        if person.is_empty() {
            return Err(Error::Validation("person cannot be blank".to_owned()));
        }

        let now = OffsetDateTime::now_utc();

        Ok(Self {
            id: ExpenseId::random(),
            trip_id: new_expense.trip_id,
            amount: new_expense.amount,
            category: new_expense.category,
            person: person.to_owned(),
            description: new_expense.description,
            image: new_expense.image,
            date: now.date(),
            time: now.time(),
        })
    }
}

/// The caller-supplied fields for creating an [Expense].
///
/// This doubles as the request body for the create endpoint. The `trip_id`
/// is deliberately not validated against the trip collection: an expense
/// logged before (or after) its trip exists is accepted, matching the
/// single-writer assumption the tracker runs under.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    /// The trip to log the expense against.
    pub trip_id: TripId,
    /// How much money was spent. Must be greater than zero.
    pub amount: f64,
    /// What kind of expense this was.
    pub category: String,
    /// Who paid. Must not be blank.
    pub person: String,
    /// Free-text note about the expense.
    pub description: Option<String>,
    /// An opaque encoded receipt photo, passed through verbatim.
    pub image: Option<String>,
}
