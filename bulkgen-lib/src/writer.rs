//! Serialize generated rows to the bulk-upload formats.

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::markets::Market;
use crate::template::{Cell, TemplateRow, TEMPLATE_COLUMNS};

const SHEET_NAME: &str = "Sponsored Products Campaigns";

/// Name of the generated template file for a market
pub fn output_filename(market: Market) -> String {
    format!("header-{}.xlsx", market.code())
}

/// Name of the optional CSV preview for a market
pub fn csv_output_filename(market: Market) -> String {
    format!("header-{}.csv", market.code())
}

/// Write the template to an `.xlsx` file: header row, then one row per
/// entity. Numeric cells are written as numbers so the platform parses bids
/// and budgets without locale surprises.
pub fn write_template_xlsx(rows: &[TemplateRow], path: &str) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(SHEET_NAME)?;
    for (col, header) in TEMPLATE_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (offset, row) in rows.iter().enumerate() {
        let row_idx = offset as u32 + 1;
        for (col, cell) in row.cells().iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_idx, col as u16, *text)?;
                }
                Cell::Number(number) => {
                    worksheet.write_number(row_idx, col as u16, *number)?;
                }
                Cell::Empty => {}
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path))?;

    Ok(())
}

/// Write the template as CSV for quick inspection
pub fn write_template_csv(rows: &[TemplateRow], path: &str) -> Result<()> {
    // Quote fields only when necessary (e.g. when they contain commas)
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)?;

    wtr.write_record(TEMPLATE_COLUMNS)?;

    for row in rows {
        let record: Vec<String> = row
            .cells()
            .iter()
            .map(|cell| match cell {
                Cell::Text(text) => text.to_string(),
                Cell::Number(number) => format_number(*number),
                Cell::Empty => String::new(),
            })
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;

    Ok(())
}

/// Render whole numbers without a trailing ".0"
fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.is_finite() {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}
