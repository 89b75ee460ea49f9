//! The extraction policy: a text pass, then a table pass when no text was found.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::backend::{Backend, Document, PageContent};
use crate::error::{ExtractError, catch_panic};
use crate::render;
use crate::result::{Extraction, ExtractionResult, Metadata, PAGES_KEY};

/// Glyph-merging tolerances (in points) for text extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextTolerance {
    pub x: f64,
    pub y: f64,
}

impl TextTolerance {
    pub const DEFAULT: TextTolerance = TextTolerance { x: 3.0, y: 3.0 };
}

impl Default for TextTolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Runs extractions against a [`Backend`].
///
/// Each pass opens the document itself and drops it before returning, so no
/// handle outlives the pass that opened it.
#[derive(Debug, Clone)]
pub struct Extractor<B> {
    backend: B,
    tolerance: TextTolerance,
}

impl<B: Backend> Extractor<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            tolerance: TextTolerance::DEFAULT,
        }
    }

    /// Extract the text and metadata of the document at `path`.
    ///
    /// Any error or panic along the way discards the partial result and is
    /// returned as [`ExtractionResult::Failure`].
    pub fn extract(&self, path: &Path) -> ExtractionResult {
        let result = catch_panic(|| self.try_extract(path));
        if let Err(ref err) = result {
            warn!(path = %path.display(), error = %err, "extraction failed");
        }
        ExtractionResult::from(result)
    }

    /// Like [`extract`](Self::extract), but hands the error back to the
    /// caller. Panics are not caught.
    pub fn try_extract(&self, path: &Path) -> Result<Extraction, ExtractError> {
        let (mut text, metadata) = self.text_pass(path)?;

        if text.trim().is_empty() {
            info!(path = %path.display(), "no text found, falling back to tables");
            text = self.table_pass(path)?;
        }

        Ok(Extraction { text, metadata })
    }

    fn text_pass(&self, path: &Path) -> Result<(String, Metadata), ExtractError> {
        let doc = self.backend.open(path)?;
        let mut metadata: Metadata = doc.metadata()?.into_iter().collect();

        let page_count = doc.page_count();
        debug!(path = %path.display(), pages = page_count, "text pass");

        let mut blocks = Vec::new();
        for index in 0..page_count {
            let page = doc.page(index)?;
            match page.extract_text(self.tolerance.x, self.tolerance.y)? {
                Some(text) if !text.is_empty() => {
                    blocks.push(render::page_block(index + 1, &text));
                }
                _ => debug!(page = index + 1, "no text on page"),
            }
        }

        metadata.insert(PAGES_KEY, page_count as u64);
        Ok((blocks.join(render::PAGE_SEPARATOR), metadata))
    }

    fn table_pass(&self, path: &Path) -> Result<String, ExtractError> {
        let doc = self.backend.open(path)?;

        let mut lines = Vec::new();
        for index in 0..doc.page_count() {
            let tables = doc.page(index)?.extract_tables()?;
            if tables.is_empty() {
                continue;
            }
            debug!(page = index + 1, tables = tables.len(), "tables found");

            lines.push(render::tables_marker(index + 1));
            for (table_index, table) in tables.iter().enumerate() {
                lines.push(render::table_marker(table_index + 1));
                lines.extend(table.iter().map(|row| render::render_row(row)));
            }
        }

        Ok(lines.join("\n"))
    }
}
