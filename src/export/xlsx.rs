//! Spreadsheet export: one worksheet of transactions

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Error;
use crate::transactions::Transaction;

/// Header row of the worksheet
pub const SHEET_COLUMNS: [&str; 7] = [
    "Date",
    "Description",
    "Category",
    "Type",
    "Amount",
    "Payment Method",
    "Tags",
];

/// Build a one-sheet workbook of the given transactions and return the
/// xlsx bytes
pub fn write_workbook(transactions: &[Transaction]) -> Result<Vec<u8>, Error> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Transactions").map_err(Error::export)?;

    for (col, header) in SHEET_COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(Error::export)?;
    }

    for (index, transaction) in transactions.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet
            .write_string(row, 0, transaction.date.format("%Y-%m-%d").to_string())
            .map_err(Error::export)?;
        worksheet
            .write_string(row, 1, transaction.description.as_str())
            .map_err(Error::export)?;
        worksheet
            .write_string(row, 2, transaction.category.as_str())
            .map_err(Error::export)?;
        worksheet
            .write_string(row, 3, transaction.kind.to_string())
            .map_err(Error::export)?;
        worksheet
            .write_number(row, 4, transaction.amount)
            .map_err(Error::export)?;
        worksheet
            .write_string(row, 5, transaction.payment_method.as_str())
            .map_err(Error::export)?;
        worksheet
            .write_string(row, 6, transaction.tags.join(", "))
            .map_err(Error::export)?;
    }

    workbook.save_to_buffer().map_err(Error::export)
}

/// Write the workbook to an xlsx file
pub async fn export_workbook(
    transactions: &[Transaction],
    path: impl AsRef<Path>,
) -> Result<(), Error> {
    let bytes = write_workbook(transactions)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
