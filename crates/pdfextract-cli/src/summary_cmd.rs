use std::io::{self, Write};
use std::path::Path;

use pdfextract::ExtractionResult;

/// Number of leading characters of text shown in the report.
const PREVIEW_CHARS: usize = 500;

pub fn run(file: Option<&Path>) -> Result<(), i32> {
    report(io::stdout().lock(), io::stderr().lock(), file)
}

/// Extract `file` and print a human-readable report.
///
/// Usage problems (no file, file not found) go to `err` and return `Err(1)`.
/// Extraction failures are printed to `err` but still return `Ok`.
pub fn report<O: Write, E: Write>(
    mut out: O,
    mut err: E,
    file: Option<&Path>,
) -> Result<(), i32> {
    let Some(file) = file else {
        let _ = writeln!(err, "Please provide a path to a PDF file");
        return Err(1);
    };

    if !file.exists() {
        let _ = writeln!(err, "File not found: {}", file.display());
        return Err(1);
    }

    write_report(&mut out, &mut err, file).map_err(|_| 1)
}

fn write_report<O: Write, E: Write>(out: &mut O, err: &mut E, file: &Path) -> io::Result<()> {
    writeln!(out, "Testing PDF extraction on: {}", file.display())?;

    match pdfextract::extract(file) {
        ExtractionResult::Success(extraction) => {
            let metadata =
                pdfextract::json::to_line(&extraction.metadata).map_err(io::Error::other)?;
            writeln!(out, "PDF extraction successful!")?;
            writeln!(out, "Metadata: {metadata}")?;
            writeln!(out, "Text length: {}", extraction.text.chars().count())?;
            writeln!(out, "First {PREVIEW_CHARS} characters:")?;
            writeln!(out, "{}", preview(&extraction.text))?;
        }
        ExtractionResult::Failure(failure) => {
            writeln!(err, "Error in PDF extraction: {}", failure.error)?;
            writeln!(err, "Traceback: {}", failure.traceback)?;
        }
    }

    out.flush()?;
    err.flush()
}

fn preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
