//! PDF export: a fixed five-column table of transactions

use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::Error;
use crate::export::{day_with_ordinal, signed_amount};
use crate::transactions::Transaction;

/// Header of the export table
pub const PDF_COLUMNS: [&str; 5] = ["Date", "Description", "Category", "Type", "Amount"];

// A4 portrait, text rows flowing down from the top margin
const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const TOP: f64 = 280.0;
const BOTTOM: f64 = 16.0;
const ROW_STEP: f64 = 7.0;
const COLUMN_X: [f64; 5] = [14.0, 44.0, 104.0, 139.0, 169.0];

/// The table body, one five-column row per transaction
pub fn table_rows(transactions: &[Transaction]) -> Vec<[String; 5]> {
    transactions
        .iter()
        .map(|t| {
            [
                day_with_ordinal(t.date),
                t.description.clone(),
                t.category.clone(),
                t.kind.to_string(),
                signed_amount(t.kind, t.amount),
            ]
        })
        .collect()
}

/// Render the transaction table and return the PDF bytes
pub fn write_pdf(transactions: &[Transaction]) -> Result<Vec<u8>, Error> {
    let (doc, page, layer) = PdfDocument::new("Transactions", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "table");
    let header_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(Error::export)?;
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(Error::export)?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = TOP;

    for (header, x) in PDF_COLUMNS.iter().zip(COLUMN_X) {
        current.use_text(*header, 11.0, Mm(x), Mm(y), &header_font);
    }
    y -= ROW_STEP;

    for row in table_rows(transactions) {
        if y < BOTTOM {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "table");
            current = doc.get_page(page).get_layer(layer);
            y = TOP;
        }
        for (cell, x) in row.iter().zip(COLUMN_X) {
            current.use_text(cell.as_str(), 10.0, Mm(x), Mm(y), &body_font);
        }
        y -= ROW_STEP;
    }

    doc.save_to_bytes().map_err(Error::export)
}

/// Write the transaction table to a PDF file
pub async fn export_pdf(transactions: &[Transaction], path: impl AsRef<Path>) -> Result<(), Error> {
    let bytes = write_pdf(transactions)?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
