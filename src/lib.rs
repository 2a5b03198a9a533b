//! Triptally is a web app for tracking shared expenses on a trip.
//!
//! Users create trips with an optional budget, log expenses against them
//! (amount, category, person, optional description and receipt photo), view
//! running totals and breakdowns, and download a spreadsheet or PDF report.
//!
//! This library provides a JSON REST API over an injected record store. The
//! store is either transient ([stores::MemoryStore]) or durable to flat JSON
//! files ([stores::JsonFileStore]); both expose the same operations, so the
//! rest of the application does not care which one is running.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod currency;
mod expense;
mod logging;
mod routing;
mod trip;

pub mod endpoints;
pub mod export;
pub mod models;
pub mod stores;
pub mod summary;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Caller-supplied data violated a field constraint.
    ///
    /// The string names the violated field so the client can show a useful
    /// message, e.g. "amount must be greater than zero".
    #[error("{0}")]
    Validation(String),

    /// The referenced trip or expense does not exist.
    ///
    /// For HTTP request handlers, the client should check that the ID in the
    /// request path is correct and that the record has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An export was requested for a trip with zero expenses.
    ///
    /// Exports of empty trips are rejected rather than rendered as an empty
    /// sheet or document. The UI should not offer the download when it knows
    /// the expense count is zero.
    #[error("the trip has no expenses to export")]
    NoData,

    /// An unexpected error while reading or writing the backing store files.
    #[error("an I/O error occurred: {0}")]
    Io(String),

    /// A collection file could not be serialized or deserialized.
    #[error("could not read or write JSON data: {0}")]
    Serialization(String),

    /// An export renderer failed for a reason other than missing data.
    ///
    /// The underlying message is surfaced as-is; no partial output is
    /// returned.
    #[error("could not render the export: {0}")]
    Render(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        tracing::error!("an unhandled I/O error occurred: {}", value);
        Error::Io(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        tracing::error!("an unhandled serialization error occurred: {}", value);
        Error::Serialization(value.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(value: rust_xlsxwriter::XlsxError) -> Self {
        Error::Render(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::NoData => StatusCode::BAD_REQUEST,
            // Errors that are not handled above are not actionable by the
            // client.
            ref error => {
                tracing::error!("An unexpected error occurred: {}", error);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
