//! Form Export
//!
//! Turns the form record into a two-column `Field`/`Value` sheet.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::ExportError;
use crate::models::FormRecord;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const NO_FILE: &str = "No file uploaded";

/// Export stays disabled until at least one text field is filled in
pub fn can_export(record: &FormRecord) -> bool {
    record.has_text()
}

/// Header row followed by one row per field, in fixed order
pub fn export_rows(record: &FormRecord) -> Vec<[String; 2]> {
    let row = |field: &str, value: &str| [field.to_string(), value.to_string()];
    vec![
        row("Field", "Value"),
        row("First Name", &record.first_name),
        row("Last Name", &record.last_name),
        row("Address", &record.address),
        row("File Name", record.file_name.as_deref().unwrap_or(NO_FILE)),
    ]
}

/// Write `rows` into a single-sheet workbook and return the xlsx bytes.
///
/// The first row is treated as the header and set in bold.
pub fn build_workbook(rows: &[[String; 2]], sheet_name: &str) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;
    worksheet.set_column_width(0, 14)?;
    worksheet.set_column_width(1, 40)?;

    for (index, cells) in rows.iter().enumerate() {
        let row = index as u32;
        for (col, text) in cells.iter().enumerate() {
            let col = col as u16;
            if index == 0 {
                worksheet.write_string_with_format(row, col, text.as_str(), &header)?;
            } else {
                worksheet.write_string(row, col, text.as_str())?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
