//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A wire code that does not name any logic-error category
    #[error("Unknown error kind: {0}")]
    UnknownErrorKind(String),
}
