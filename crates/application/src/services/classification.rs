//! Classification outcome

use std::error::Error;

use domain::{ErrorKind, LogicError};

/// Result of classifying a raw error
///
/// `Unrecognized` hands the original error back untouched so the caller can
/// fall back to generic handling.
#[derive(Debug)]
pub enum Classified<E> {
    /// The error was understood and normalized
    Recognized(LogicError),
    /// The error has no shape this layer understands
    Unrecognized(E),
}

impl<E> Classified<E> {
    /// Check whether the raw error was understood
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        matches!(self, Self::Recognized(_))
    }

    /// The produced logic error, if any
    #[must_use]
    pub const fn logic_error(&self) -> Option<&LogicError> {
        match self {
            Self::Recognized(err) => Some(err),
            Self::Unrecognized(_) => None,
        }
    }

    /// Category of the produced logic error, if any
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.logic_error().map(LogicError::kind)
    }

    /// Split into the logic error or the untouched original
    pub fn into_result(self) -> Result<LogicError, E> {
        match self {
            Self::Recognized(err) => Ok(err),
            Self::Unrecognized(err) => Err(err),
        }
    }
}

impl<E> Classified<E>
where
    E: Error + Send + Sync + 'static,
{
    /// The `(recognized, error)` pair
    pub fn into_parts(self) -> (bool, Box<dyn Error + Send + Sync>) {
        match self {
            Self::Recognized(err) => (true, Box::new(err)),
            Self::Unrecognized(err) => (false, Box::new(err)),
        }
    }
}
