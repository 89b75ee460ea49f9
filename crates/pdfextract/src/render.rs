//! Text layout of the extracted content.
//!
//! Page numbers passed to these helpers are 1-based.

use std::fmt::Display;

/// Separator between page blocks of the text pass.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Separator between cells of a rendered table row.
pub const CELL_SEPARATOR: &str = " | ";

/// `--- Page N ---` followed by the page text on the next line.
pub fn page_block(page_number: usize, text: &str) -> String {
    format!("--- Page {page_number} ---\n{text}")
}

/// Header line emitted before the tables of one page.
pub fn tables_marker(page_number: usize) -> String {
    format!("--- Page {page_number} Tables ---")
}

/// Header line emitted before each table; `table_number` restarts at 1 on
/// every page.
pub fn table_marker(table_number: usize) -> String {
    format!("Table {table_number}:")
}

/// Join a row's cells with `" | "`, rendering empty cells as `""`.
pub fn render_row<T: Display>(row: &[Option<T>]) -> String {
    row.iter()
        .map(|cell| cell.as_ref().map(ToString::to_string).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}
