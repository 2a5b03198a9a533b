//! Renders a trip's expenses as a paginated PDF document.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    currency::format_currency,
    export::{generation_timestamp, truncate_description},
    models::{Expense, Trip},
    summary::Summary,
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

// US letter.
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 18.0;

/// Vertical space per table row, in millimetres.
const ROW_HEIGHT: f32 = 7.0;

/// Left edges of the Date, Category, Amount, Person and Description columns.
const COLUMN_POSITIONS: [f32; 5] = [18.0, 48.0, 82.0, 116.0, 146.0];
const COLUMN_HEADERS: [&str; 5] = ["Date", "Category", "Amount", "Person", "Description"];

struct PageCursor {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    bold_font: IndirectFontRef,
    y: f32,
}

impl PageCursor {
    /// Move down by `height`, starting a fresh page when the bottom margin
    /// would be crossed.
    fn advance(&mut self, height: f32) {
        if self.y - height < MARGIN {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        } else {
            self.y -= height;
        }
    }

    fn text(&self, text: &str, font_size: f32, x: f32) {
        self.layer
            .use_text(text, font_size, Mm(x), Mm(self.y), &self.font);
    }

    fn bold_text(&self, text: &str, font_size: f32, x: f32) {
        self.layer
            .use_text(text, font_size, Mm(x), Mm(self.y), &self.bold_font);
    }

    fn set_fill(&self, red: f32, green: f32, blue: f32) {
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(red, green, blue, None)));
    }

    fn rule(&self) {
        let line = Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(self.y - 1.5)), false),
                (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(self.y - 1.5)), false),
            ],
            is_closed: false,
        };
        self.layer.set_outline_thickness(0.4);
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.89, 0.91, 0.94, None)));
        self.layer.add_line(line);
    }
}

/// Render `expenses` as a PDF: the trip name as a title, a
/// budget/spent/remaining block, one table row per expense in the order
/// supplied (flowing across pages as needed), a closing summary block and a
/// generation timestamp footer.
///
/// # Errors
/// Returns [Error::NoData] if `expenses` is empty, or [Error::Render] if the
/// document cannot be produced.
pub fn render_document(
    trip: &Trip,
    expenses: &[Expense],
    summary: &Summary,
) -> Result<Vec<u8>, Error> {
    if expenses.is_empty() {
        return Err(Error::NoData);
    }

    let (doc, page, layer) = PdfDocument::new(
        format!("Trip: {}", trip.name),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|error| Error::Render(error.to_string()))?;
    let bold_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|error| Error::Render(error.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut cursor = PageCursor {
        doc,
        layer,
        font,
        bold_font,
        y: PAGE_HEIGHT - MARGIN - 6.0,
    };

    write_title(&mut cursor, trip);
    write_budget_block(&mut cursor, summary);
    write_expense_table(&mut cursor, expenses)?;
    write_summary_block(&mut cursor, summary);
    write_footer(&mut cursor)?;

    cursor
        .doc
        .save_to_bytes()
        .map_err(|error| Error::Render(error.to_string()))
}

fn write_title(cursor: &mut PageCursor, trip: &Trip) {
    // Indigo, matching the spreadsheet's title band.
    cursor.set_fill(0.40, 0.49, 0.92);
    cursor.bold_text(&format!("Trip: {}", trip.name), 24.0, MARGIN);
    cursor.set_fill(0.0, 0.0, 0.0);
    cursor.advance(14.0);
}

/// The key-value block under the title: budget, spent so far and remaining.
/// Remaining and budget lines are omitted for unbounded trips.
fn write_budget_block(cursor: &mut PageCursor, summary: &Summary) {
    if let Some(budget) = summary.total_budget {
        cursor.bold_text("Trip Budget:", 12.0, MARGIN);
        cursor.text(&format_currency(budget), 12.0, MARGIN + 40.0);
        cursor.advance(ROW_HEIGHT);
    }

    cursor.bold_text("Total Spent:", 12.0, MARGIN);
    cursor.text(&format_currency(summary.total_spent), 12.0, MARGIN + 40.0);
    cursor.advance(ROW_HEIGHT);

    if let Some(remaining) = summary.remaining {
        cursor.bold_text("Remaining:", 12.0, MARGIN);
        cursor.text(&format_currency(remaining), 12.0, MARGIN + 40.0);
        cursor.advance(ROW_HEIGHT);
    }

    cursor.advance(6.0);
}

fn write_expense_table(cursor: &mut PageCursor, expenses: &[Expense]) -> Result<(), Error> {
    write_table_header(cursor);

    for expense in expenses {
        let previous_y = cursor.y;
        cursor.advance(ROW_HEIGHT);

        // A page break swallows the header, so repeat it before the row.
        if cursor.y > previous_y {
            write_table_header(cursor);
            cursor.advance(ROW_HEIGHT);
        }

        let date = expense
            .date
            .format(DATE_FORMAT)
            .map_err(|error| Error::Render(error.to_string()))?;
        let description = expense.description.as_deref().unwrap_or("-");

        cursor.text(&date, 9.0, COLUMN_POSITIONS[0]);
        cursor.text(&expense.category, 9.0, COLUMN_POSITIONS[1]);
        cursor.text(&format_currency(expense.amount), 9.0, COLUMN_POSITIONS[2]);
        cursor.text(&expense.person, 9.0, COLUMN_POSITIONS[3]);
        cursor.text(&truncate_description(description), 9.0, COLUMN_POSITIONS[4]);
        cursor.rule();
    }

    Ok(())
}

fn write_table_header(cursor: &mut PageCursor) {
    for (header, x) in COLUMN_HEADERS.iter().zip(COLUMN_POSITIONS) {
        cursor.bold_text(header, 10.0, x);
    }
    cursor.rule();
}

/// The closing block restating spent, budget and remaining, with remaining
/// colored by sign.
fn write_summary_block(cursor: &mut PageCursor, summary: &Summary) {
    cursor.advance(12.0);

    cursor.bold_text("Total Spent:", 12.0, MARGIN);
    cursor.text(&format_currency(summary.total_spent), 12.0, MARGIN + 40.0);

    if let Some(budget) = summary.total_budget {
        cursor.advance(ROW_HEIGHT);
        cursor.bold_text("Trip Budget:", 12.0, MARGIN);
        cursor.text(&format_currency(budget), 12.0, MARGIN + 40.0);
    }

    if let Some(remaining) = summary.remaining {
        cursor.advance(ROW_HEIGHT);

        if remaining >= 0.0 {
            // Green for within budget.
            cursor.set_fill(0.06, 0.73, 0.51);
        } else {
            // Red for over budget.
            cursor.set_fill(0.94, 0.27, 0.27);
        }

        cursor.bold_text("Remaining:", 12.0, MARGIN);
        cursor.bold_text(&format_currency(remaining), 12.0, MARGIN + 40.0);
        cursor.set_fill(0.0, 0.0, 0.0);
    }
}

fn write_footer(cursor: &mut PageCursor) -> Result<(), Error> {
    cursor.advance(12.0);
    cursor.set_fill(0.39, 0.45, 0.55);
    cursor.text(&generation_timestamp()?, 8.0, MARGIN);

    Ok(())
}
