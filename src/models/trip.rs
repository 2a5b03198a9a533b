//! This file defines the type `Trip`, the budget-tracking container that
//! expenses are logged against.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::Error;

/// The opaque identifier for a [Trip].
///
/// IDs are random UUIDs rather than sequential integers so that an ID is
/// never reused after a delete, even when the collection is reloaded from
/// file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(Uuid);

impl TripId {
    /// Generate a fresh, random trip ID.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether a trip is still being added to or has wrapped up.
///
/// The status is informational only: expenses can still be added to a
/// completed trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// The trip is in progress.
    Ongoing,
    /// The trip has been marked as finished.
    Completed,
}

/// A named container for a set of expenses, with an optional budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// The unique ID of the trip, assigned at creation.
    pub id: TripId,
    /// The display name of the trip. Never empty.
    pub name: String,
    /// How much the group plans to spend. `None` means unbounded, in which
    /// case no remaining-budget figure is ever computed.
    pub budget: Option<f64>,
    /// Whether the trip is ongoing or completed.
    pub status: TripStatus,
    /// When the trip was created. Set once, never mutated.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Trip {
    /// Create a new trip with a fresh ID, `status = ongoing` and
    /// `created_at` stamped from the server clock.
    ///
    /// # Errors
    /// Returns [Error::Validation] if `name` is empty after trimming, or if
    /// `budget` is negative or not a finite number.
    pub fn new(name: &str, budget: Option<f64>) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::Validation("trip name cannot be empty".to_owned()));
        }

        validate_budget(budget)?;

        Ok(Self {
            id: TripId::random(),
            name: name.to_owned(),
            budget,
            status: TripStatus::Ongoing,
            created_at: OffsetDateTime::now_utc(),
        })
    }

    /// Apply a partial update to the trip. Fields absent from `update` are
    /// left unchanged; a present-but-null budget clears the budget.
    ///
    /// Validation happens before any field is touched, so a failed update
    /// leaves the trip exactly as it was.
    ///
    /// # Errors
    /// Returns [Error::Validation] under the same rules as [Trip::new].
    pub fn apply(&mut self, update: TripUpdate) -> Result<(), Error> {
        let name = match update.name {
            Some(name) => {
                let name = name.trim().to_owned();

                if name.is_empty() {
                    return Err(Error::Validation("trip name cannot be empty".to_owned()));
                }

                Some(name)
            }
            None => None,
        };

        if let Some(budget) = update.budget {
            validate_budget(budget)?;
        }

        if let Some(name) = name {
            self.name = name;
        }

        if let Some(budget) = update.budget {
            self.budget = budget;
        }

        if let Some(status) = update.status {
            self.status = status;
        }

        Ok(())
    }
}

/// A partial update to a [Trip].
///
/// This doubles as the request body for the update endpoint: it is the
/// explicit schema that replaces poking at loosely typed JSON.
#[derive(Debug, Default, Deserialize)]
pub struct TripUpdate {
    /// The new trip name, if it should change.
    pub name: Option<String>,
    /// The outer `Option` is whether the field was present in the request,
    /// the inner `Option` is the new budget. `Some(None)` clears the budget.
    #[serde(default, deserialize_with = "double_option")]
    pub budget: Option<Option<f64>>,
    /// The new trip status, if it should change.
    pub status: Option<TripStatus>,
}

/// Deserialize a present field into `Some(value)`, so that a missing field
/// (`None` via `#[serde(default)]`) can be told apart from an explicit null
/// (`Some(None)`).
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

fn validate_budget(budget: Option<f64>) -> Result<(), Error> {
    match budget {
        Some(budget) if !budget.is_finite() || budget < 0.0 => Err(Error::Validation(
            "budget must be a non-negative number".to_owned(),
        )),
        _ => Ok(()),
    }
}
