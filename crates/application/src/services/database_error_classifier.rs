//! Database error classification

use std::error::Error;

use domain::{ErrorKind, LogicError, error_chain};
use tracing::{debug, trace};

use super::classification::Classified;
use super::sql_state;
use crate::ports::{DatabaseErrorDetails, DatabaseErrorPort};

/// Convert a database driver error into a logic error
///
/// Evaluated in order:
/// 1. the no-rows sentinel anywhere in the chain gives [`ErrorKind::NoRows`];
/// 2. a chain with no structured driver error is handed back as
///    [`Classified::Unrecognized`];
/// 3. otherwise the vendor code picks the category. Codes without a mapping
///    are still recognized and become [`ErrorKind::Internal`].
///
/// Every produced logic error wraps `err`.
pub fn classify_database_error<P, E>(port: &P, err: E) -> Classified<E>
where
    P: DatabaseErrorPort + ?Sized,
    E: Error + Send + Sync + 'static,
{
    if error_chain(&err).any(|link| port.is_no_rows(link)) {
        debug!(kind = %ErrorKind::NoRows, "Classified database error");
        return Classified::Recognized(LogicError::new(ErrorKind::NoRows).wrap(err));
    }

    let Some(details) = error_chain(&err).find_map(|link| port.inspect(link)) else {
        trace!(error = %err, "Database error is not structured, passing through");
        return Classified::Unrecognized(err);
    };

    let code = details.code.clone();
    let logic = logic_error_for(details);
    debug!(kind = %logic.kind(), code = %code, "Classified database error");
    Classified::Recognized(logic.wrap(err))
}

fn logic_error_for(details: DatabaseErrorDetails) -> LogicError {
    let DatabaseErrorDetails {
        code,
        column,
        constraint,
    } = details;

    let (kind, payload) = match code.as_str() {
        sql_state::SERIALIZATION_FAILURE | sql_state::IN_FAILED_SQL_TRANSACTION => {
            (ErrorKind::ConcurrentTransactionConflict, None)
        },
        sql_state::UNIQUE_VIOLATION => (ErrorKind::UniqueViolation, column),
        sql_state::FOREIGN_KEY_VIOLATION => (ErrorKind::ForeignKeyViolation, column),
        sql_state::NOT_NULL_VIOLATION => (ErrorKind::NotNullViolation, column),
        sql_state::CHECK_VIOLATION => (ErrorKind::CheckViolation, constraint),
        sql_state::RESTRICT_VIOLATION => (ErrorKind::RestrictViolation, constraint),
        sql_state::INTEGRITY_CONSTRAINT_VIOLATION => (ErrorKind::IntegrityViolation, constraint),
        _ => (ErrorKind::Internal, None),
    };

    let logic = LogicError::new(kind);
    match payload {
        Some(name) => logic.with_data(name),
        None => logic,
    }
}
