//! crates/logging/src/fatal.rs
//! Termination payload raised by fatal log calls.

use std::any::Any;
use std::io;

use thiserror::Error;

/// Payload carried by the panic raised from every fatal entry point.
///
/// Fatal calls write their line (unless the FATAL level is masked out) and then
/// unwind with this value via [`std::panic::panic_any`]. The unwind happens
/// even when the line was suppressed, so a fatal call never returns. A
/// top-level handler that catches the unwind is expected to end the process.
///
/// ```
/// use bitlog::{Fatal, LevelSet, Logger, args};
/// use std::panic::{AssertUnwindSafe, catch_unwind};
///
/// let logger = Logger::new(Vec::new(), LevelSet::INFO);
/// let payload = catch_unwind(AssertUnwindSafe(|| logger.fatal(args!["disk ", "gone"])))
///     .unwrap_err();
///
/// let fatal = Fatal::from_payload(payload.as_ref()).expect("fatal payload");
/// assert_eq!(fatal.message(), "disk gone");
/// assert!(logger.into_inner().is_empty());
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Fatal {
    message: String,
    #[source]
    write_error: Option<io::Error>,
}

impl Fatal {
    pub(crate) fn new(message: String, write_result: io::Result<()>) -> Self {
        Self {
            message,
            write_error: write_result.err(),
        }
    }

    /// The formatted message of the fatal call.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Error returned by the sink while writing the fatal line, if any.
    #[must_use]
    pub fn write_error(&self) -> Option<&io::Error> {
        self.write_error.as_ref()
    }

    /// Unwinds with `self` as the panic payload.
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }

    /// Recovers a [`Fatal`] from a caught panic payload.
    #[must_use]
    pub fn from_payload(payload: &(dyn Any + Send)) -> Option<&Self> {
        payload.downcast_ref::<Self>()
    }
}
