//! Concurrent transaction conflict detection

use std::error::Error;

use domain::{TX_CONCURRENT_EXEC, error_chain, is_logic_error};
use tracing::trace;

use super::sql_state;
use crate::ports::DatabaseErrorPort;

/// Check whether `err` is a transaction conflict the caller may retry
///
/// True when any link of the chain carries SQLSTATE `40001` or `25P02`, or when
/// the chain holds a logic error with the concurrent-transaction category, so
/// errors that already went through [`classify_database_error`] are still
/// detected.
///
/// [`classify_database_error`]: super::classify_database_error
pub fn is_concurrent_transaction_conflict<P>(port: &P, err: &(dyn Error + 'static)) -> bool
where
    P: DatabaseErrorPort + ?Sized,
{
    let by_code = error_chain(err).any(|link| {
        port.inspect(link)
            .is_some_and(|details| sql_state::is_concurrent_conflict(&details.code))
    });
    let conflict = by_code || is_logic_error(err, TX_CONCURRENT_EXEC);
    trace!(conflict, by_code, "Checked for concurrent transaction conflict");
    conflict
}
