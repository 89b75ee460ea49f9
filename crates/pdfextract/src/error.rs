//! Error types for the extraction layer.
//!
//! Uses [`thiserror`] for the error kinds. Every [`ExtractError`] carries a
//! stack backtrace captured where the error entered this crate, so a failed
//! extraction can report a full trace alongside its message.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use pdfplumber::PdfError;
use thiserror::Error;

/// What went wrong during extraction.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Error reported by the PDF parsing library.
    #[error(transparent)]
    Pdf(#[from] PdfError),

    /// The parsing library panicked; holds the panic message.
    #[error("{0}")]
    Panic(String),
}

impl ErrorKind {
    /// Short type label used as the first word of a traceback.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Pdf(_) => "PdfError",
            ErrorKind::Panic(_) => "Panic",
        }
    }
}

/// An extraction error plus the backtrace of the point where it was raised.
pub struct ExtractError {
    kind: ErrorKind,
    backtrace: Backtrace,
}

impl ExtractError {
    /// Wrap `kind`, capturing the current stack.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::force_capture(),
        }
    }

    fn with_backtrace(kind: ErrorKind, backtrace: Backtrace) -> Self {
        Self { kind, backtrace }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Render the error type, message, source chain and stack backtrace.
    ///
    /// The result is never empty.
    pub fn traceback(&self) -> String {
        let mut out = format!("{}: {}\n", self.kind.name(), self.kind);

        let mut source = StdError::source(&self.kind);
        if source.is_some() {
            out.push_str("\nCaused by:\n");
        }
        let mut depth = 0;
        while let Some(err) = source {
            out.push_str(&format!("    {depth}: {err}\n"));
            depth += 1;
            source = err.source();
        }

        out.push_str("\nStack backtrace:\n");
        out.push_str(&self.backtrace.to_string());
        out
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Debug for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractError")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl StdError for ExtractError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.kind.source()
    }
}

impl From<ErrorKind> for ExtractError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<PdfError> for ExtractError {
    fn from(err: PdfError) -> Self {
        Self::new(ErrorKind::Pdf(err))
    }
}

static HOOK: Once = Once::new();

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static PANIC_BACKTRACE: RefCell<Option<Backtrace>> = const { RefCell::new(None) };
}

/// Chain a hook in front of the current one, once per process.
///
/// Panics on a thread inside [`catch_panic`] only record their backtrace;
/// every other panic goes to the previous hook unchanged.
fn install_hook() {
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CAPTURING.get() {
                PANIC_BACKTRACE.with(|slot| *slot.borrow_mut() = Some(Backtrace::force_capture()));
            } else {
                previous(info);
            }
        }));
    });
}

/// Run `f`, turning a panic inside it into an [`ExtractError`].
///
/// Safe to call from several threads at once. A panic raised by `f` is not
/// printed; the backtrace is taken inside the hook, at the panic site.
pub fn catch_panic<T>(f: impl FnOnce() -> Result<T, ExtractError>) -> Result<T, ExtractError> {
    install_hook();
    let was_capturing = CAPTURING.replace(true);
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    CAPTURING.set(was_capturing);

    match outcome {
        Ok(result) => result,
        Err(payload) => {
            let backtrace = PANIC_BACKTRACE
                .with(|slot| slot.borrow_mut().take())
                .unwrap_or_else(Backtrace::force_capture);
            Err(ExtractError::with_backtrace(
                ErrorKind::Panic(panic_message(payload.as_ref())),
                backtrace,
            ))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}
