//! Request handlers for creating, listing, updating and deleting trips, and
//! for the derived trip summary.

mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod summary_endpoint;
mod update_endpoint;

pub(crate) use create_endpoint::create_trip_endpoint;
pub(crate) use delete_endpoint::delete_trip_endpoint;
pub(crate) use list_endpoint::list_trips_endpoint;
pub(crate) use summary_endpoint::trip_summary_endpoint;
pub(crate) use update_endpoint::update_trip_endpoint;
