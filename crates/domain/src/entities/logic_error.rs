//! Logic error entity
//!
//! A normalized application-level error: a category, the original failure it
//! was built from, an optional free-form payload and an optional message
//! override.

use serde_json::Value;
use std::error::Error;
use std::fmt;

use crate::value_objects::ErrorKind;

/// Sentinel category for "concurrent transaction"
///
/// Compare with [`is_logic_error`] to detect a conflict anywhere in a chain,
/// including errors that were already classified once.
pub const TX_CONCURRENT_EXEC: ErrorKind = ErrorKind::ConcurrentTransactionConflict;

type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Normalized application-level error
#[derive(Debug)]
pub struct LogicError {
    kind: ErrorKind,
    source: Option<BoxError>,
    data: Option<Value>,
    message: Option<String>,
}

impl LogicError {
    /// Create a logic error of the given category
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            source: None,
            data: None,
            message: None,
        }
    }

    /// Wrap the original failure for diagnostic chaining
    #[must_use]
    pub fn wrap(mut self, err: impl Into<BoxError>) -> Self {
        self.source = Some(err.into());
        self
    }

    /// Attach a free-form payload
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Override the human-readable message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check whether this error has the given category
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Attached payload, if any
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Message override, if one was set
    #[must_use]
    pub fn message_override(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Message to show: the override, or the category's default
    #[must_use]
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| self.kind.default_message())
    }
}

impl From<ErrorKind> for LogicError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for LogicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err.as_ref() as &(dyn Error + 'static))
    }
}

/// Iterate over an error and every error it wraps, outermost first
pub fn error_chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&current| current.source())
}

/// First logic error found in the chain
#[must_use]
pub fn find_logic_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a LogicError> {
    error_chain(err).find_map(|link| link.downcast_ref::<LogicError>())
}

/// Check whether `err` is, or wraps, a logic error of the given category
#[must_use]
pub fn is_logic_error(err: &(dyn Error + 'static), kind: ErrorKind) -> bool {
    error_chain(err)
        .filter_map(|link| link.downcast_ref::<LogicError>())
        .any(|logic| logic.is(kind))
}
