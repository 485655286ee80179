//! Error types surfaced by the prompt engine.
//!
//! Malformed answers are not errors: they are [`Rejection`]s, printed as a
//! hint and answered by asking again. The only failures a caller ever sees
//! come from the streams themselves.
use std::io;

use thiserror::Error;

/// A failure of the underlying input or output stream.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The input stream ended and the terminal was configured with
    /// [`EofPolicy::Fail`](crate::utils::EofPolicy::Fail).
    #[error("input stream closed")]
    Closed,
}
