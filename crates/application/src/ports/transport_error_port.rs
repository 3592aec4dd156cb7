//! Transport error port
//!
//! Defines how the application reads RPC status metadata out of an error
//! raised by a remote-procedure-call client.

use std::fmt;

#[cfg(test)]
use mockall::automock;

use super::DynError;

/// RPC status code
///
/// Mirrors the gRPC status code space, including the numeric values. Numbers
/// outside the canonical range are kept as [`RpcCode::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcCode {
    Ok,
    Canceled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
    /// A number outside the canonical code space
    Other(i32),
}

impl RpcCode {
    /// Map a numeric status code; values outside the canonical range become `Other`
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::Canceled,
            3 => Self::InvalidArgument,
            4 => Self::DeadlineExceeded,
            5 => Self::NotFound,
            6 => Self::AlreadyExists,
            7 => Self::PermissionDenied,
            8 => Self::ResourceExhausted,
            9 => Self::FailedPrecondition,
            10 => Self::Aborted,
            11 => Self::OutOfRange,
            12 => Self::Unimplemented,
            13 => Self::Internal,
            14 => Self::Unavailable,
            15 => Self::DataLoss,
            16 => Self::Unauthenticated,
            2 => Self::Unknown,
            other => Self::Other(other),
        }
    }

    /// Numeric status code
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Canceled => 1,
            Self::Unknown => 2,
            Self::InvalidArgument => 3,
            Self::DeadlineExceeded => 4,
            Self::NotFound => 5,
            Self::AlreadyExists => 6,
            Self::PermissionDenied => 7,
            Self::ResourceExhausted => 8,
            Self::FailedPrecondition => 9,
            Self::Aborted => 10,
            Self::OutOfRange => 11,
            Self::Unimplemented => 12,
            Self::Internal => 13,
            Self::Unavailable => 14,
            Self::DataLoss => 15,
            Self::Unauthenticated => 16,
            Self::Other(code) => *code,
        }
    }

    /// Canonical upper-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Canceled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::Aborted => "ABORTED",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::Unimplemented => "UNIMPLEMENTED",
            Self::Internal => "INTERNAL",
            Self::Unavailable => "UNAVAILABLE",
            Self::DataLoss => "DATA_LOSS",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Other(_) => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for RpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(code) => write!(f, "{}({code})", self.as_str()),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl std::str::FromStr for RpcCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.trim().parse::<i32>() {
            return Ok(Self::from_i32(code));
        }
        let normalized = s.trim().to_uppercase().replace('-', "_");
        match normalized.as_str() {
            "OK" => Ok(Self::Ok),
            "CANCELLED" | "CANCELED" => Ok(Self::Canceled),
            "UNKNOWN" => Ok(Self::Unknown),
            "INVALID_ARGUMENT" => Ok(Self::InvalidArgument),
            "DEADLINE_EXCEEDED" => Ok(Self::DeadlineExceeded),
            "NOT_FOUND" => Ok(Self::NotFound),
            "ALREADY_EXISTS" => Ok(Self::AlreadyExists),
            "PERMISSION_DENIED" => Ok(Self::PermissionDenied),
            "RESOURCE_EXHAUSTED" => Ok(Self::ResourceExhausted),
            "FAILED_PRECONDITION" => Ok(Self::FailedPrecondition),
            "ABORTED" => Ok(Self::Aborted),
            "OUT_OF_RANGE" => Ok(Self::OutOfRange),
            "UNIMPLEMENTED" => Ok(Self::Unimplemented),
            "INTERNAL" => Ok(Self::Internal),
            "UNAVAILABLE" => Ok(Self::Unavailable),
            "DATA_LOSS" => Ok(Self::DataLoss),
            "UNAUTHENTICATED" => Ok(Self::Unauthenticated),
            _ => Err(format!("Invalid RPC status code: {s}")),
        }
    }
}

/// Status metadata carried by a transport error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportStatus {
    /// Status code
    pub code: RpcCode,
    /// Human-readable status message
    pub message: String,
}

impl TransportStatus {
    /// Create a status
    #[must_use]
    pub fn new(code: RpcCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Port for reading RPC status metadata out of transport errors
///
/// Looks at exactly one link of an error chain.
#[cfg_attr(test, automock)]
pub trait TransportErrorPort: Send + Sync {
    /// Extract the status if this link carries RPC status metadata
    fn status(&self, err: &DynError) -> Option<TransportStatus>;
}
