//! In-process driver errors for explaining classifications
//!
//! Lets the CLI describe a database failure by SQLSTATE alone and run it
//! through the same classifier the sqlx adapter feeds.

use std::error::Error;
use std::fmt;

use application::ports::{DatabaseErrorDetails, DatabaseErrorPort};

/// Code accepted on the command line for the no-rows sentinel
pub const NO_ROWS: &str = "no-rows";

/// A database failure described on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// Query matched no rows
    NoRows,
    /// Structured driver error
    Database(DatabaseErrorDetails),
}

impl ProbeError {
    /// Build a probe from a SQLSTATE (or [`NO_ROWS`]) and optional names
    pub fn new(code: &str, column: Option<String>, constraint: Option<String>) -> Self {
        if code.eq_ignore_ascii_case(NO_ROWS) {
            return Self::NoRows;
        }
        Self::Database(DatabaseErrorDetails {
            code: code.to_uppercase(),
            column,
            constraint,
        })
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => write!(f, "no rows in result set"),
            Self::Database(details) => write!(f, "database error (SQLSTATE {})", details.code),
        }
    }
}

impl Error for ProbeError {}

/// [`DatabaseErrorPort`] for [`ProbeError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbePort;

impl DatabaseErrorPort for ProbePort {
    fn is_no_rows(&self, err: &(dyn Error + 'static)) -> bool {
        matches!(err.downcast_ref::<ProbeError>(), Some(ProbeError::NoRows))
    }

    fn inspect(&self, err: &(dyn Error + 'static)) -> Option<DatabaseErrorDetails> {
        match err.downcast_ref::<ProbeError>()? {
            ProbeError::Database(details) => Some(details.clone()),
            ProbeError::NoRows => None,
        }
    }
}
