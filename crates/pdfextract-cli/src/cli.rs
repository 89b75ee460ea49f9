use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Print the text and metadata of a PDF document as one JSON line.
///
/// Text is extracted page by page; if the document has no text, detected
/// tables are rendered instead. Extraction failures are reported in the JSON
/// output and the exit status stays 0.
#[derive(Debug, Parser)]
#[command(name = "pdfextract", about, version)]
pub struct Cli {
    /// Path to the PDF file, taken literally even when it starts with `-`
    #[arg(value_name = "FILE", allow_hyphen_values = true)]
    pub file: Option<PathBuf>,

    /// Print a human-readable report instead of JSON
    #[arg(long)]
    pub summary: bool,

    /// Extra arguments, accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<OsString>,
}
