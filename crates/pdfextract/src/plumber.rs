//! [`Backend`] implementation on top of the `pdfplumber` crate.

use std::path::Path;

use pdfplumber::{DocumentMetadata, Page, Pdf, TableSettings, TextOptions};
use tracing::trace;

use crate::backend::{Backend, Document, PageContent, Table};
use crate::error::ExtractError;

/// Opens documents with [`pdfplumber::Pdf`].
///
/// Tables are detected with the library's default [`TableSettings`].
#[derive(Debug, Clone, Default)]
pub struct PlumberBackend {
    table_settings: TableSettings,
}

impl PlumberBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for PlumberBackend {
    type Document = PlumberDocument;

    fn open(&self, path: &Path) -> Result<PlumberDocument, ExtractError> {
        let pdf = Pdf::open_file(path, None)?;
        Ok(PlumberDocument {
            pdf,
            table_settings: self.table_settings.clone(),
        })
    }
}

/// A document opened by [`PlumberBackend`].
pub struct PlumberDocument {
    pdf: Pdf,
    table_settings: TableSettings,
}

impl Document for PlumberDocument {
    type Page = PlumberPage;

    fn metadata(&self) -> Result<Vec<(String, String)>, ExtractError> {
        Ok(info_entries(self.pdf.metadata()))
    }

    fn page_count(&self) -> usize {
        self.pdf.page_count()
    }

    fn page(&self, index: usize) -> Result<PlumberPage, ExtractError> {
        let page = self.pdf.page(index)?;
        Ok(PlumberPage {
            page,
            index,
            table_settings: self.table_settings.clone(),
        })
    }
}

/// One page of a [`PlumberDocument`].
pub struct PlumberPage {
    page: Page,
    index: usize,
    table_settings: TableSettings,
}

impl PageContent for PlumberPage {
    fn extract_text(
        &self,
        x_tolerance: f64,
        y_tolerance: f64,
    ) -> Result<Option<String>, ExtractError> {
        // Word grouping inside extract_text uses the library's fixed 3pt x gap.
        trace!(page = self.index, x_tolerance, y_tolerance, "extracting text");
        let options = TextOptions {
            y_tolerance,
            ..TextOptions::default()
        };
        let text = self.page.extract_text(&options);
        Ok((!text.is_empty()).then_some(text))
    }

    fn extract_tables(&self) -> Result<Vec<Table>, ExtractError> {
        trace!(page = self.index, "detecting tables");
        let tables = self
            .page
            .find_tables(&self.table_settings)
            .into_iter()
            .map(|table| {
                table
                    .rows
                    .into_iter()
                    .map(|row| row.into_iter().map(|cell| cell.text).collect())
                    .collect()
            })
            .collect();
        Ok(tables)
    }
}

/// Flatten the Info dictionary fields into `(key, value)` pairs keyed by
/// their PDF names, skipping absent ones.
fn info_entries(meta: &DocumentMetadata) -> Vec<(String, String)> {
    [
        ("Title", &meta.title),
        ("Author", &meta.author),
        ("Subject", &meta.subject),
        ("Keywords", &meta.keywords),
        ("Creator", &meta.creator),
        ("Producer", &meta.producer),
        ("CreationDate", &meta.creation_date),
        ("ModDate", &meta.mod_date),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_string(), v.clone())))
    .collect()
}
