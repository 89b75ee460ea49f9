//! Seam between the extraction policy and the PDF parsing library.
//!
//! The [`Extractor`](crate::Extractor) only needs three things from a parser:
//! open a file, read document-level properties, and ask each page for its text
//! and its tables. These traits capture exactly that, so the policy can be
//! driven by [`PlumberBackend`](crate::PlumberBackend) in production and by an
//! in-memory document in tests.

use std::path::Path;

use crate::error::ExtractError;

/// One table row: cell text in column order, `None` for an empty cell.
pub type Row = Vec<Option<String>>;

/// One detected table: rows from top to bottom.
pub type Table = Vec<Row>;

/// Opens documents by path.
///
/// # Usage
///
/// ```ignore
/// let doc = backend.open(path)?;
/// for index in 0..doc.page_count() {
///     let page = doc.page(index)?;
///     let text = page.extract_text(3.0, 3.0)?;
/// }
/// // doc is closed when it goes out of scope
/// ```
pub trait Backend {
    /// The opened document. Dropping it releases the underlying handle.
    type Document: Document;

    /// Open the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid PDF.
    fn open(&self, path: &Path) -> Result<Self::Document, ExtractError>;
}

/// An opened PDF document.
pub trait Document {
    /// A single page, extracted on demand.
    type Page: PageContent;

    /// Document-level properties as `(name, value)` pairs, in the order the
    /// parser reports them. Absent properties are omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the properties exist but cannot be decoded.
    fn metadata(&self) -> Result<Vec<(String, String)>, ExtractError>;

    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Load the page at 0-based `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the page content
    /// cannot be interpreted.
    fn page(&self, index: usize) -> Result<Self::Page, ExtractError>;
}

/// Text and table access for one page.
pub trait PageContent {
    /// Extract the page text, merging glyphs closer than the given
    /// horizontal/vertical tolerances (in points) into words and lines.
    ///
    /// Returns `None` when the page has no text.
    fn extract_text(
        &self,
        x_tolerance: f64,
        y_tolerance: f64,
    ) -> Result<Option<String>, ExtractError>;

    /// Detect tables on the page and return their cell text.
    fn extract_tables(&self) -> Result<Vec<Table>, ExtractError>;
}
