//! Database error port
//!
//! Defines how the application looks inside an error raised by a relational
//! database driver without depending on the driver itself.

#[cfg(test)]
use mockall::automock;

use super::DynError;

/// Structured information carried by a database driver error
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatabaseErrorDetails {
    /// Vendor error code (SQLSTATE for PostgreSQL)
    pub code: String,
    /// Column that caused the failure, when the backend reports it
    pub column: Option<String>,
    /// Constraint that caused the failure, when the backend reports it
    pub constraint: Option<String>,
}

impl DatabaseErrorDetails {
    /// Create details carrying only a vendor code
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            column: None,
            constraint: None,
        }
    }

    /// Add the offending column name
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Add the offending constraint name
    #[must_use]
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }
}

/// Port for inspecting database driver errors
///
/// Each method looks at exactly one link of an error chain. The classification
/// services walk the chain and ask the port about every link.
#[cfg_attr(test, automock)]
pub trait DatabaseErrorPort: Send + Sync {
    /// Check if this link is the driver's "no matching rows" sentinel
    fn is_no_rows(&self, err: &DynError) -> bool;

    /// Extract structured details if this link has the driver's error shape
    fn inspect(&self, err: &DynError) -> Option<DatabaseErrorDetails>;
}
