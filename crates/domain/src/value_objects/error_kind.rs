//! Logic-error category value object
//!
//! The closed set of categories every classified failure falls into. The
//! snake_case wire codes are a contract with downstream consumers and must not
//! change.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Category of a logic error
///
/// The shape of this enum never depends on where the failure came from:
/// database and transport failures land in the same vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Query matched no rows
    NoRows,
    /// Unique constraint violated
    UniqueViolation,
    /// Foreign key constraint violated
    ForeignKeyViolation,
    /// NOT NULL constraint violated
    NotNullViolation,
    /// CHECK constraint violated
    CheckViolation,
    /// RESTRICT action prevented a change
    RestrictViolation,
    /// Generic integrity constraint violated
    IntegrityViolation,
    /// Transaction lost a serialization race and may be retried
    ConcurrentTransactionConflict,
    /// Unexpected failure
    Internal,
    /// Caller sent an invalid request
    BadRequest,
    /// Caller is not authenticated
    Unauthorized,
    /// Caller is not allowed to perform the operation
    Forbidden,
    /// Requested entity does not exist
    NotFound,
    /// Operation conflicts with current state
    Conflict,
    /// Request is well-formed but cannot be processed
    UnprocessableEntity,
    /// Operation is not supported
    NotAcceptable,
    /// Remote dependency is unavailable
    ServiceUnavailable,
    /// Remote call was cancelled, timed out or ran out of resources
    Canceled,
}

impl ErrorKind {
    /// Every category, in declaration order
    pub const ALL: [Self; 18] = [
        Self::NoRows,
        Self::UniqueViolation,
        Self::ForeignKeyViolation,
        Self::NotNullViolation,
        Self::CheckViolation,
        Self::RestrictViolation,
        Self::IntegrityViolation,
        Self::ConcurrentTransactionConflict,
        Self::Internal,
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::Conflict,
        Self::UnprocessableEntity,
        Self::NotAcceptable,
        Self::ServiceUnavailable,
        Self::Canceled,
    ];

    /// Stable wire code
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoRows => "no_rows",
            Self::UniqueViolation => "unique_violation",
            Self::ForeignKeyViolation => "foreign_key_violation",
            Self::NotNullViolation => "not_null_violation",
            Self::CheckViolation => "check_violation",
            Self::RestrictViolation => "restrict_violation",
            Self::IntegrityViolation => "integrity_violation",
            Self::ConcurrentTransactionConflict => "concurrent_transaction_conflict",
            Self::Internal => "internal",
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::UnprocessableEntity => "unprocessable_entity",
            Self::NotAcceptable => "not_acceptable",
            Self::ServiceUnavailable => "service_unavailable",
            Self::Canceled => "canceled",
        }
    }

    /// Message used when a logic error carries no override
    #[must_use]
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::NoRows => "no rows in result set",
            Self::UniqueViolation => "unique constraint violation",
            Self::ForeignKeyViolation => "foreign key constraint violation",
            Self::NotNullViolation => "not null constraint violation",
            Self::CheckViolation => "check constraint violation",
            Self::RestrictViolation => "restrict constraint violation",
            Self::IntegrityViolation => "integrity constraint violation",
            Self::ConcurrentTransactionConflict => "concurrent transaction conflict",
            Self::Internal => "internal error",
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::Conflict => "conflict",
            Self::UnprocessableEntity => "unprocessable entity",
            Self::NotAcceptable => "not acceptable",
            Self::ServiceUnavailable => "service unavailable",
            Self::Canceled => "canceled",
        }
    }

    /// Check if this category is produced from a database failure
    #[must_use]
    pub const fn is_store_violation(&self) -> bool {
        matches!(
            self,
            Self::NoRows
                | Self::UniqueViolation
                | Self::ForeignKeyViolation
                | Self::NotNullViolation
                | Self::CheckViolation
                | Self::RestrictViolation
                | Self::IntegrityViolation
        )
    }

    /// Check if this category can be produced from a transport failure
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Internal
                | Self::BadRequest
                | Self::Unauthorized
                | Self::Forbidden
                | Self::NotFound
                | Self::Conflict
                | Self::UnprocessableEntity
                | Self::NotAcceptable
                | Self::ServiceUnavailable
                | Self::Canceled
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownErrorKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn wire_codes_are_unique() {
        let codes: HashSet<_> = ErrorKind::ALL.iter().map(ErrorKind::as_str).collect();
        assert_eq!(codes.len(), ErrorKind::ALL.len());
    }

    #[test]
    fn wire_codes_are_stable() {
        assert_eq!(ErrorKind::NoRows.as_str(), "no_rows");
        assert_eq!(
            ErrorKind::ConcurrentTransactionConflict.as_str(),
            "concurrent_transaction_conflict"
        );
        assert_eq!(ErrorKind::UnprocessableEntity.as_str(), "unprocessable_entity");
        assert_eq!(ErrorKind::Canceled.as_str(), "canceled");
    }

    #[test]
    fn display_writes_wire_code() {
        assert_eq!(ErrorKind::ForeignKeyViolation.to_string(), "foreign_key_violation");
    }

    #[test]
    fn serde_uses_wire_code() {
        for kind in ErrorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(
            "Service_Unavailable".parse::<ErrorKind>().unwrap(),
            ErrorKind::ServiceUnavailable
        );
        assert_eq!(" not_found ".parse::<ErrorKind>().unwrap(), ErrorKind::NotFound);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "teapot".parse::<ErrorKind>().unwrap_err();
        assert_eq!(err, DomainError::UnknownErrorKind("teapot".to_string()));
    }

    #[test]
    fn store_and_transport_sets() {
        assert!(ErrorKind::NoRows.is_store_violation());
        assert!(ErrorKind::IntegrityViolation.is_store_violation());
        assert!(!ErrorKind::ConcurrentTransactionConflict.is_store_violation());
        assert!(!ErrorKind::ConcurrentTransactionConflict.is_transport());
        assert!(ErrorKind::Internal.is_transport());
        assert!(ErrorKind::Canceled.is_transport());
        assert!(!ErrorKind::UniqueViolation.is_transport());
    }

    #[test]
    fn default_messages_are_not_empty() {
        for kind in ErrorKind::ALL {
            assert!(!kind.default_message().is_empty(), "{kind} has no message");
        }
    }
}
