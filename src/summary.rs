//! The aggregation engine: derives totals and breakdowns for a trip from
//! its expense set.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Expense, Trip};

/// The grouping key used for expenses whose person field is blank.
///
/// Creation rejects blank persons, but records loaded from a hand-edited
/// data file may still carry them.
const UNKNOWN_PERSON: &str = "Unknown";

/// Derived totals and breakdowns for one trip, computed on demand.
///
/// No rounding is applied to any figure; display formatting is the
/// consumer's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// The trip the summary was computed for.
    pub trip: Trip,
    /// The trip's budget, repeated here so the summary payload is
    /// self-contained.
    pub total_budget: Option<f64>,
    /// The sum of all expense amounts. Zero when there are no expenses.
    pub total_spent: f64,
    /// `budget - total_spent`, or `None` when the trip has no budget. May be
    /// negative when the trip is over budget.
    pub remaining: Option<f64>,
    /// How many expenses the trip has.
    pub expense_count: usize,
    /// Per-category sums. Categories with no expenses are absent, not
    /// zero-valued.
    pub categories: BTreeMap<String, f64>,
    /// Per-person sums, keyed by `"Unknown"` for blank persons.
    pub person_totals: BTreeMap<String, f64>,
}

/// Compute the [Summary] for `trip` over `expenses`.
///
/// The caller decides which expenses belong to the trip; amounts are summed
/// as given, in one pass.
pub fn summarize(trip: &Trip, expenses: &[Expense]) -> Summary {
    let mut total_spent = 0.0;
    let mut categories: BTreeMap<String, f64> = BTreeMap::new();
    let mut person_totals: BTreeMap<String, f64> = BTreeMap::new();

    for expense in expenses {
        total_spent += expense.amount;

        *categories.entry(expense.category.clone()).or_insert(0.0) += expense.amount;

        let person = match expense.person.trim() {
            "" => UNKNOWN_PERSON,
            person => person,
        };
        *person_totals.entry(person.to_owned()).or_insert(0.0) += expense.amount;
    }

    Summary {
        trip: trip.clone(),
        total_budget: trip.budget,
        total_spent,
        remaining: trip.budget.map(|budget| budget - total_spent),
        expense_count: expenses.len(),
        categories,
        person_totals,
    }
}
