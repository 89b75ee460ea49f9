//! pdfextract: pull page text and metadata out of a PDF as a single JSON record.
//!
//! Text is extracted page by page and joined with `--- Page N ---` markers. When
//! a document has no linear text at all, the document is opened again and every
//! detected table is rendered as pipe-delimited rows instead.
//!
//! # Architecture
//!
//! - [`backend`]: the seam to the PDF parsing library (documents, pages, tables)
//! - [`plumber`]: the production backend, built on the `pdfplumber` crate
//! - [`extractor`]: the text pass, the table fallback and failure capture
//! - [`result`] and [`json`]: the output record and its one-line JSON form
//!
//! # Example
//!
//! ```ignore
//! let result = pdfextract::extract("report.pdf");
//! println!("{}", pdfextract::json::to_line(&result)?);
//! ```

pub mod backend;
pub mod error;
pub mod extractor;
pub mod json;
pub mod plumber;
pub mod render;
pub mod result;

use std::path::Path;

pub use backend::{Backend, Document, PageContent, Row, Table};
pub use error::{ErrorKind, ExtractError};
pub use extractor::{Extractor, TextTolerance};
pub use plumber::PlumberBackend;
pub use result::{Extraction, ExtractionResult, Failure, Metadata, MetadataValue};

/// Extract a document with the default `pdfplumber` backend.
///
/// Never returns an error: failures are reported as
/// [`ExtractionResult::Failure`].
pub fn extract(path: impl AsRef<Path>) -> ExtractionResult {
    Extractor::new(PlumberBackend::default()).extract(path.as_ref())
}
