use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tracing::error;

/// Message printed when no file argument is given.
pub const NO_PATH_MESSAGE: &str = "No PDF file path provided";

#[derive(Serialize)]
struct UsageError {
    success: bool,
    error: &'static str,
}

pub fn run(file: Option<&Path>) -> Result<(), i32> {
    write_result(io::stdout().lock(), file)
}

/// Extract `file` and write the result as one JSON line.
///
/// Returns `Err(1)` only when no file was given or stdout cannot be written;
/// extraction failures are part of the JSON output.
pub fn write_result<W: Write>(mut out: W, file: Option<&Path>) -> Result<(), i32> {
    let Some(file) = file else {
        let usage = UsageError {
            success: false,
            error: NO_PATH_MESSAGE,
        };
        emit(&mut out, &usage)?;
        return Err(1);
    };

    let result = pdfextract::extract(file);
    emit(&mut out, &result)
}

fn emit<W: Write, T: Serialize>(out: W, value: &T) -> Result<(), i32> {
    pdfextract::json::write_line(out, value).map_err(|e| {
        error!(error = %e, "failed to write output");
        1
    })
}
