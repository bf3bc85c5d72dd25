use std::borrow::Cow;
use thiserror::Error;

/// The single run-time failure of a parser: nothing matched at the cursor.
///
/// Carries no position or expectation set. Callers wanting diagnostics can
/// compare [`Outcome::remainder`](crate::Outcome::remainder) lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no match")]
pub struct NoMatch;

/// Faults outside of ordinary parse failure
#[derive(Debug, Error)]
pub enum TextcombError {
    /// A combinator was built with arguments it cannot work with
    #[error("invalid argument: {message}")]
    InvalidArgument { message: Cow<'static, str> },

    #[error("cannot seek to position {position}, valid positions are 0..={len}")]
    SeekOutOfBounds { position: usize, len: usize },

    #[error("cannot read value at end of input (position {position})")]
    CannotReadValueAtEof { position: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TextcombError {
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        TextcombError::InvalidArgument {
            message: message.into(),
        }
    }
}
