//! Renders a trip's expenses as a styled xlsx workbook.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    currency::format_currency,
    export::generation_timestamp,
    models::{Expense, Trip},
    summary::Summary,
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem] = format_description!("[hour]:[minute]:[second]");

const COLUMN_HEADERS: [&str; 6] = ["Date", "Time", "Category", "Amount", "Person", "Description"];
const COLUMN_WIDTHS: [f64; 6] = [12.0, 10.0, 20.0, 15.0, 18.0, 40.0];

/// The 0-based worksheet row the expense table's header lands on. Rows 0-1
/// hold the title band and budget line, rows 2-3 are left blank.
const HEADER_ROW: u32 = 4;

const TITLE_COLOR: Color = Color::RGB(0x667EEA);
const HEADER_COLOR: Color = Color::RGB(0x1E293B);
const BORDER_COLOR: Color = Color::RGB(0xE2E8F0);
const SUMMARY_FILL: Color = Color::RGB(0xF8FAFC);
const POSITIVE_COLOR: Color = Color::RGB(0x10B981);
const NEGATIVE_COLOR: Color = Color::RGB(0xEF4444);
const FOOTER_COLOR: Color = Color::RGB(0x64748B);

/// Render `expenses` as an xlsx workbook: a title band, a budget line, one
/// table row per expense in the order supplied, a totals block and a
/// generation timestamp footer.
///
/// # Errors
/// Returns [Error::NoData] if `expenses` is empty, or [Error::Render] if the
/// workbook cannot be produced.
pub fn render_spreadsheet(
    trip: &Trip,
    expenses: &[Expense],
    summary: &Summary,
) -> Result<Vec<u8>, Error> {
    if expenses.is_empty() {
        return Err(Error::NoData);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Expenses")?;

    write_title_band(worksheet, trip)?;
    write_expense_table(worksheet, expenses)?;

    let totals_end = write_totals_block(worksheet, summary, HEADER_ROW + expenses.len() as u32 + 2)?;
    write_footer(worksheet, totals_end + 2)?;

    for (column, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(column as u16, *width)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_title_band(worksheet: &mut Worksheet, trip: &Trip) -> Result<(), Error> {
    let title_format = Format::new()
        .set_font_size(16)
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(TITLE_COLOR)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter);

    worksheet.merge_range(0, 0, 0, 5, &format!("TRIP: {}", trip.name), &title_format)?;
    worksheet.set_row_height(0, 30)?;

    let budget_line = match trip.budget {
        Some(budget) => format!("Budget: {}", format_currency(budget)),
        None => "Budget: Not Set".to_owned(),
    };
    worksheet.write_string_with_format(1, 0, &budget_line, &Format::new().set_bold())?;

    Ok(())
}

fn write_expense_table(worksheet: &mut Worksheet, expenses: &[Expense]) -> Result<(), Error> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_COLOR)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR);

    for (column, header) in COLUMN_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(HEADER_ROW, column as u16, *header, &header_format)?;
    }
    worksheet.set_row_height(HEADER_ROW, 25)?;

    let cell_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR);
    let amount_format = Format::new()
        .set_bold()
        .set_num_format("#,##0.00")
        .set_align(FormatAlign::Right)
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR);

    for (index, expense) in expenses.iter().enumerate() {
        let row = HEADER_ROW + 1 + index as u32;
        let date = expense
            .date
            .format(DATE_FORMAT)
            .map_err(|error| Error::Render(error.to_string()))?;
        let time = expense
            .time
            .format(TIME_FORMAT)
            .map_err(|error| Error::Render(error.to_string()))?;

        worksheet.write_string_with_format(row, 0, &date, &cell_format)?;
        worksheet.write_string_with_format(row, 1, &time, &cell_format)?;
        worksheet.write_string_with_format(row, 2, &expense.category, &cell_format)?;
        worksheet.write_number_with_format(row, 3, expense.amount, &amount_format)?;
        worksheet.write_string_with_format(row, 4, &expense.person, &cell_format)?;
        worksheet.write_string_with_format(
            row,
            5,
            expense.description.as_deref().unwrap_or("-"),
            &cell_format,
        )?;
    }

    Ok(())
}

/// Write the totals block starting at `row` and return the last row written.
fn write_totals_block(
    worksheet: &mut Worksheet,
    summary: &Summary,
    row: u32,
) -> Result<u32, Error> {
    let label_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Right)
        .set_background_color(SUMMARY_FILL)
        .set_border(FormatBorder::Medium)
        .set_border_color(HEADER_COLOR);
    let value_format = Format::new()
        .set_bold()
        .set_font_size(12)
        .set_num_format("#,##0.00")
        .set_align(FormatAlign::Right)
        .set_background_color(SUMMARY_FILL)
        .set_border(FormatBorder::Medium)
        .set_border_color(HEADER_COLOR);

    worksheet.write_string_with_format(row, 3, "TOTAL SPENT:", &label_format)?;
    worksheet.write_number_with_format(row, 4, summary.total_spent, &value_format)?;
    worksheet.set_row_height(row, 25)?;

    let (Some(budget), Some(remaining)) = (summary.total_budget, summary.remaining) else {
        return Ok(row);
    };

    worksheet.write_string_with_format(row + 1, 3, "TRIP BUDGET:", &label_format)?;
    worksheet.write_number_with_format(row + 1, 4, budget, &value_format)?;
    worksheet.set_row_height(row + 1, 25)?;

    // Remaining is flagged by sign: green when within budget, red when over.
    let remaining_color = if remaining >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    };
    let remaining_label_format = Format::new()
        .set_bold()
        .set_font_size(12)
        .set_font_color(Color::White)
        .set_align(FormatAlign::Right)
        .set_background_color(remaining_color)
        .set_border(FormatBorder::Medium)
        .set_border_color(HEADER_COLOR);
    let remaining_value_format = Format::new()
        .set_bold()
        .set_font_size(13)
        .set_font_color(Color::White)
        .set_num_format("#,##0.00")
        .set_align(FormatAlign::Right)
        .set_background_color(remaining_color)
        .set_border(FormatBorder::Medium)
        .set_border_color(HEADER_COLOR);

    worksheet.write_string_with_format(row + 2, 3, "REMAINING:", &remaining_label_format)?;
    worksheet.write_number_with_format(row + 2, 4, remaining, &remaining_value_format)?;
    worksheet.set_row_height(row + 2, 30)?;

    Ok(row + 2)
}

fn write_footer(worksheet: &mut Worksheet, row: u32) -> Result<(), Error> {
    let footer_format = Format::new()
        .set_font_size(9)
        .set_italic()
        .set_font_color(FOOTER_COLOR);

    worksheet.write_string_with_format(row, 0, &generation_timestamp()?, &footer_format)?;

    Ok(())
}
