//! Export renderers: turn a trip, its expenses and their summary into a
//! downloadable byte stream.
//!
//! Both renderers share the same input contract: the expense list must be
//! non-empty ([crate::Error::NoData] otherwise) and rows are emitted in
//! exactly the order supplied, never re-sorted.

mod document;
mod document_endpoint;
mod spreadsheet;
mod spreadsheet_endpoint;

pub use document::render_document;
pub use spreadsheet::render_spreadsheet;

pub(crate) use document_endpoint::document_export_endpoint;
pub(crate) use spreadsheet_endpoint::spreadsheet_export_endpoint;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The maximum description length rendered in the PDF document before the
/// text is cut off with an ellipsis.
pub const DESCRIPTION_LIMIT: usize = 50;

/// A rendered export ready to be sent to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    /// The filename the browser should save the download as.
    pub filename: String,
    /// The MIME type of `bytes`.
    pub content_type: &'static str,
    /// The rendered file.
    pub bytes: Vec<u8>,
}

impl IntoResponse for Export {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, self.content_type.to_owned()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", self.filename),
                ),
            ],
            self.bytes,
        )
            .into_response()
    }
}

/// Build the suggested download filename `<TripName>_<YYYYMMDD>.<extension>`
/// with spaces in the trip name replaced by underscores.
pub fn suggested_filename(trip_name: &str, extension: &str) -> Result<String, Error> {
    const FILE_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year][month][day]");

    let date = OffsetDateTime::now_utc()
        .date()
        .format(FILE_DATE_FORMAT)
        .map_err(|error| Error::Render(error.to_string()))?;

    Ok(format!(
        "{}_{date}.{extension}",
        trip_name.replace(' ', "_")
    ))
}

/// Cut `description` off at [DESCRIPTION_LIMIT] characters, marking the cut
/// with an ellipsis.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let truncated: String = description.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{truncated}...")
    } else {
        description.to_owned()
    }
}

/// The "Generated: ..." footer line both renderers stamp at the bottom of an
/// export.
fn generation_timestamp() -> Result<String, Error> {
    const TIMESTAMP_FORMAT: &[BorrowedFormatItem] = format_description!(
        "[month repr:long] [day padding:none], [year] at [hour repr:12 padding:none]:[minute] [period]"
    );

    let timestamp = OffsetDateTime::now_utc()
        .format(TIMESTAMP_FORMAT)
        .map_err(|error| Error::Render(error.to_string()))?;

    Ok(format!("Generated: {timestamp}"))
}
