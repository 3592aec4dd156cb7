//! PostgreSQL SQLSTATE codes the classifiers understand

/// `serialization_failure`
pub const SERIALIZATION_FAILURE: &str = "40001";
/// `in_failed_sql_transaction` (class 25, invalid transaction state)
pub const IN_FAILED_SQL_TRANSACTION: &str = "25P02";
/// `unique_violation`
pub const UNIQUE_VIOLATION: &str = "23505";
/// `foreign_key_violation`
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
/// `not_null_violation`
pub const NOT_NULL_VIOLATION: &str = "23502";
/// `check_violation`
pub const CHECK_VIOLATION: &str = "23514";
/// `restrict_violation`
pub const RESTRICT_VIOLATION: &str = "23001";
/// `integrity_constraint_violation`
pub const INTEGRITY_CONSTRAINT_VIOLATION: &str = "23000";

/// Check if a code signals a retryable transaction conflict
#[must_use]
pub fn is_concurrent_conflict(code: &str) -> bool {
    code == SERIALIZATION_FAILURE || code == IN_FAILED_SQL_TRANSACTION
}
